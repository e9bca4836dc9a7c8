//! 변환 결과 검사 (낱자모 검출)

use crate::core::unicode::{is_compat_jamo, is_complete_syllable};

/// 완성형이 아닌 낱자모가 포함되어 있는지 검사
pub fn has_incomplete_jamo(text: &str) -> bool {
    text.chars().any(is_compat_jamo)
}

/// 한글 문자(완성형 + 낱자모) 중 낱자모의 비율 (0.0 ~ 1.0)
pub fn incomplete_jamo_ratio(text: &str) -> f32 {
    let (jamo, hangul) = text.chars().fold((0u32, 0u32), |(jamo, hangul), ch| {
        if is_compat_jamo(ch) {
            (jamo + 1, hangul + 1)
        } else if is_complete_syllable(ch) {
            (jamo, hangul + 1)
        } else {
            (jamo, hangul)
        }
    });

    if hangul == 0 {
        return 0.0;
    }
    jamo as f32 / hangul as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_incomplete_jamo() {
        assert!(has_incomplete_jamo("ㅜ믇"));
        assert!(has_incomplete_jamo("안녕ㅎ"));
        assert!(!has_incomplete_jamo("안녕"));
        assert!(!has_incomplete_jamo("hello"));
        assert!(!has_incomplete_jamo(""));
    }

    #[test]
    fn test_incomplete_jamo_ratio() {
        assert_eq!(incomplete_jamo_ratio("ㄱㅏㄴㅏ"), 1.0);
        assert!((incomplete_jamo_ratio("ㅜ믇") - 0.5).abs() < 0.01);
        assert_eq!(incomplete_jamo_ratio("안녕"), 0.0);
        assert_eq!(incomplete_jamo_ratio("hello"), 0.0);
    }
}
