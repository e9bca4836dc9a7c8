//! 영문 키 시퀀스 <-> 한글 문자열 변환

use crate::core::composer::HangulComposer;
use crate::core::keymap::{to_jamo, to_latin};
use crate::core::unicode::{
    choseong_glyph, decompose_syllable, jongseong_glyph, jungseong_glyph, split_jongseong,
    split_jungseong,
};

/// 영문 키 시퀀스를 한글로 조합
/// 매핑되지 않는 문자(숫자, 특수문자 등)는 그대로 유지
pub fn convert(input: &str) -> String {
    let mut composer = HangulComposer::new();
    for c in input.chars() {
        composer.feed(to_jamo(c));
    }
    composer.flush()
}

/// 한글을 두벌식 영문 키 시퀀스로 되돌림
/// 복합 모음과 겹받침은 두 키로 분리된다.
pub fn revert(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match decompose_syllable(c) {
            Some((cho, jung, jong)) => {
                out.extend(choseong_glyph(cho).map(to_latin));
                push_jungseong_keys(jung, &mut out);
                push_jongseong_keys(jong, &mut out);
            }
            None => out.push(to_latin(c)),
        }
    }
    out
}

fn push_jungseong_keys(jung: u32, out: &mut String) {
    match split_jungseong(jung) {
        Some((first, second)) => {
            out.extend(jungseong_glyph(first).map(to_latin));
            out.extend(jungseong_glyph(second).map(to_latin));
        }
        None => out.extend(jungseong_glyph(jung).map(to_latin)),
    }
}

fn push_jongseong_keys(jong: u32, out: &mut String) {
    match split_jongseong(jong) {
        Some((first, second)) => {
            out.extend(jongseong_glyph(first).map(to_latin));
            out.extend(jongseong_glyph(second).map(to_latin));
        }
        None => out.extend(jongseong_glyph(jong).map(to_latin)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_conversion() {
        assert_eq!(convert("rkskek"), "가나다");
        assert_eq!(convert("dkssudgktpdy"), "안녕하세요");
    }

    #[test]
    fn test_jongseong() {
        assert_eq!(convert("gksrmf"), "한글");
        assert_eq!(convert("dkswl"), "안지");
    }

    #[test]
    fn test_complex_vowel() {
        assert_eq!(convert("dhksfy"), "완료");
    }

    #[test]
    fn test_double_consonant() {
        assert_eq!(convert("Tks"), "싼");
        assert_eq!(convert("Rk"), "까");
    }

    #[test]
    fn test_mixed_input() {
        assert_eq!(convert("123rksk"), "123가나");
        assert_eq!(convert("rkXsk"), "가X나");
    }

    #[test]
    fn test_jamo_input_is_accepted() {
        // 이미 자모인 입력도 그대로 조합됨
        assert_eq!(convert("ㅎㅏㄴㄱㅡㄹ"), "한글");
    }

    #[test]
    fn test_revert() {
        assert_eq!(revert("안녕"), "dkssud");
        assert_eq!(revert("한글"), "gksrmf");
        assert_eq!(revert("완료"), "dhksfy");
        assert_eq!(revert("읽"), "dlfr");
        assert_eq!(revert("ㅎㅏ"), "gk");
        assert_eq!(revert("hello 1"), "hello 1");
    }

    #[test]
    fn test_revert_then_convert() {
        for word in ["안녕하세요", "프로그램", "값이", "까치", "의자"] {
            assert_eq!(convert(&revert(word)), word);
        }
    }
}
