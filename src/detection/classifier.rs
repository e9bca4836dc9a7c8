//! 언어 분류기 인터페이스
//!
//! 분류기는 단어가 영어일 확률만 돌려준다. 계산 방식(학습 모델, 휴리스틱 등)은
//! 교정 파이프라인이 알 필요가 없다.

/// 단어의 영어 확률을 돌려주는 분류기
pub trait LanguageClassifier {
    /// 영어일 확률 (0.0 ~ 1.0)
    ///
    /// 분류할 수 있는 문자가 하나도 없으면 None.
    fn predict(&self, word: &str) -> Option<f32>;
}

impl<F> LanguageClassifier for F
where
    F: Fn(&str) -> Option<f32>,
{
    fn predict(&self, word: &str) -> Option<f32> {
        self(word)
    }
}
