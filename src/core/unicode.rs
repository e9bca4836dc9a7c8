//! 유니코드 한글 음절 조합/분해와 호환용 자모 테이블
//!
//! 인덱스 체계는 유니코드 완성형 배열 순서를 따른다.
//! - 초성 19개: ㄱ ㄲ ㄴ ㄷ ㄸ ㄹ ㅁ ㅂ ㅃ ㅅ ㅆ ㅇ ㅈ ㅉ ㅊ ㅋ ㅌ ㅍ ㅎ
//! - 중성 21개: ㅏ ㅐ ㅑ ㅒ ㅓ ㅔ ㅕ ㅖ ㅗ ㅘ ㅙ ㅚ ㅛ ㅜ ㅝ ㅞ ㅟ ㅠ ㅡ ㅢ ㅣ
//! - 종성 28개: (없음) ㄱ ㄲ ㄳ ㄴ ㄵ ㄶ ㄷ ㄹ ㄺ ㄻ ㄼ ㄽ ㄾ ㄿ ㅀ ㅁ ㅂ ㅄ ㅅ ㅆ ㅇ ㅈ ㅊ ㅋ ㅌ ㅍ ㅎ

/// 완성형 한글 시작 코드포인트 (가)
const SYLLABLE_FIRST: u32 = 0xAC00;
/// 완성형 한글 마지막 코드포인트 (힣)
const SYLLABLE_LAST: u32 = 0xD7A3;

const CHOSEONG_COUNT: u32 = 19;
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 없음(0) 포함
const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서의 호환용 자모
const CHOSEONG_GLYPHS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 순서의 호환용 모음 (U+314F ~ U+3163 연속)
const JUNGSEONG_GLYPHS: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 인덱스 1~27의 호환용 자모 (배열 위치 = 인덱스 - 1)
const JONGSEONG_GLYPHS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 복합 모음: (앞 중성, 뒤 중성, 결과 중성)
const COMPOUND_JUNGSEONG: [(u32, u32, u32); 7] = [
    (8, 0, 9),    // ㅗ + ㅏ = ㅘ
    (8, 1, 10),   // ㅗ + ㅐ = ㅙ
    (8, 20, 11),  // ㅗ + ㅣ = ㅚ
    (13, 4, 14),  // ㅜ + ㅓ = ㅝ
    (13, 5, 15),  // ㅜ + ㅔ = ㅞ
    (13, 20, 16), // ㅜ + ㅣ = ㅟ
    (18, 20, 19), // ㅡ + ㅣ = ㅢ
];

/// 겹받침: (앞 종성, 뒤 종성, 결과 종성)
const COMPOUND_JONGSEONG: [(u32, u32, u32); 11] = [
    (1, 19, 3),   // ㄱ + ㅅ = ㄳ
    (4, 22, 5),   // ㄴ + ㅈ = ㄵ
    (4, 27, 6),   // ㄴ + ㅎ = ㄶ
    (8, 1, 9),    // ㄹ + ㄱ = ㄺ
    (8, 16, 10),  // ㄹ + ㅁ = ㄻ
    (8, 17, 11),  // ㄹ + ㅂ = ㄼ
    (8, 19, 12),  // ㄹ + ㅅ = ㄽ
    (8, 25, 13),  // ㄹ + ㅌ = ㄾ
    (8, 26, 14),  // ㄹ + ㅍ = ㄿ
    (8, 27, 15),  // ㄹ + ㅎ = ㅀ
    (17, 19, 18), // ㅂ + ㅅ = ㅄ
];

/// 초성/중성/종성 인덱스로 완성형 음절 생성 (종성 0 = 받침 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let offset = (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT + jongseong;
    char::from_u32(SYLLABLE_FIRST + offset)
}

/// 완성형 음절을 (초성, 중성, 종성) 인덱스로 분해
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - SYLLABLE_FIRST;
    Some((
        offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT),
        (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT,
        offset % JONGSEONG_COUNT,
    ))
}

/// 완성형 한글(가-힣)인지 확인
pub fn is_complete_syllable(c: char) -> bool {
    (SYLLABLE_FIRST..=SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자모 영역(U+3131 ~ U+318E)인지 확인
pub fn is_compat_jamo(c: char) -> bool {
    (0x3131..=0x318E).contains(&(c as u32))
}

fn position(table: &[char], glyph: char) -> Option<u32> {
    table.iter().position(|&g| g == glyph).map(|i| i as u32)
}

/// 자모 글리프의 초성 인덱스 (초성이 될 수 없으면 None)
pub fn choseong_index(glyph: char) -> Option<u32> {
    position(&CHOSEONG_GLYPHS, glyph)
}

/// 모음 글리프의 중성 인덱스
pub fn jungseong_index(glyph: char) -> Option<u32> {
    position(&JUNGSEONG_GLYPHS, glyph)
}

/// 자음 글리프의 종성 인덱스 (ㄸ ㅃ ㅉ처럼 받침이 될 수 없으면 None)
pub fn jongseong_index(glyph: char) -> Option<u32> {
    position(&JONGSEONG_GLYPHS, glyph).map(|i| i + 1)
}

pub fn choseong_glyph(index: u32) -> Option<char> {
    CHOSEONG_GLYPHS.get(index as usize).copied()
}

pub fn jungseong_glyph(index: u32) -> Option<char> {
    JUNGSEONG_GLYPHS.get(index as usize).copied()
}

/// 종성 인덱스의 호환용 자모 (0 = 받침 없음이므로 None)
pub fn jongseong_glyph(index: u32) -> Option<char> {
    index
        .checked_sub(1)
        .and_then(|i| JONGSEONG_GLYPHS.get(i as usize).copied())
}

/// 두 중성을 복합 모음으로 조합
pub fn combine_jungseong(first: u32, second: u32) -> Option<u32> {
    COMPOUND_JUNGSEONG
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, combined)| combined)
}

/// 복합 모음을 구성 중성으로 분리
pub fn split_jungseong(jung: u32) -> Option<(u32, u32)> {
    COMPOUND_JUNGSEONG
        .iter()
        .find(|&&(_, _, combined)| combined == jung)
        .map(|&(a, b, _)| (a, b))
}

/// 두 종성을 겹받침으로 조합
pub fn combine_jongseong(first: u32, second: u32) -> Option<u32> {
    COMPOUND_JONGSEONG
        .iter()
        .find(|&&(a, b, _)| a == first && b == second)
        .map(|&(_, _, combined)| combined)
}

/// 겹받침을 (남는 종성, 뒤 종성) 으로 분리
pub fn split_jongseong(jong: u32) -> Option<(u32, u32)> {
    COMPOUND_JONGSEONG
        .iter()
        .find(|&&(_, _, combined)| combined == jong)
        .map(|&(a, b, _)| (a, b))
}

/// 홑받침을 다음 음절의 초성 인덱스로 변환 (겹받침은 None)
pub fn jongseong_to_choseong(jong: u32) -> Option<u32> {
    jongseong_glyph(jong).and_then(choseong_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_syllable() {
        assert_eq!(compose_syllable(0, 0, 0), Some('가'));
        assert_eq!(compose_syllable(0, 0, 1), Some('각'));
        assert_eq!(compose_syllable(18, 0, 4), Some('한'));
        assert_eq!(compose_syllable(0, 18, 8), Some('글'));
        assert_eq!(compose_syllable(18, 20, 27), Some('힣'));
        assert_eq!(compose_syllable(19, 0, 0), None);
        assert_eq!(compose_syllable(0, 21, 0), None);
        assert_eq!(compose_syllable(0, 0, 28), None);
    }

    #[test]
    fn test_decompose_syllable() {
        assert_eq!(decompose_syllable('가'), Some((0, 0, 0)));
        assert_eq!(decompose_syllable('한'), Some((18, 0, 4)));
        assert_eq!(decompose_syllable('읽'), Some((11, 20, 9)));
        assert_eq!(decompose_syllable('ㄱ'), None);
        assert_eq!(decompose_syllable('a'), None);
    }

    #[test]
    fn test_glyph_index_lookup() {
        assert_eq!(choseong_index('ㄱ'), Some(0));
        assert_eq!(choseong_index('ㅎ'), Some(18));
        assert_eq!(choseong_index('ㄳ'), None);
        assert_eq!(choseong_index('ㅏ'), None);

        assert_eq!(jungseong_index('ㅏ'), Some(0));
        assert_eq!(jungseong_index('ㅘ'), Some(9));
        assert_eq!(jungseong_index('ㅣ'), Some(20));
        assert_eq!(jungseong_index('ㄱ'), None);

        assert_eq!(jongseong_index('ㄱ'), Some(1));
        assert_eq!(jongseong_index('ㄴ'), Some(4));
        assert_eq!(jongseong_index('ㅎ'), Some(27));
        // 받침 불가 쌍자음
        assert_eq!(jongseong_index('ㄸ'), None);
        assert_eq!(jongseong_index('ㅃ'), None);
        assert_eq!(jongseong_index('ㅉ'), None);
    }

    #[test]
    fn test_glyph_by_index() {
        assert_eq!(choseong_glyph(11), Some('ㅇ'));
        assert_eq!(choseong_glyph(19), None);
        assert_eq!(jungseong_glyph(19), Some('ㅢ'));
        assert_eq!(jungseong_glyph(21), None);
        assert_eq!(jongseong_glyph(0), None);
        assert_eq!(jongseong_glyph(9), Some('ㄺ'));
        assert_eq!(jongseong_glyph(28), None);
    }

    #[test]
    fn test_combine_and_split_jungseong() {
        assert_eq!(combine_jungseong(8, 0), Some(9));
        assert_eq!(combine_jungseong(13, 4), Some(14));
        assert_eq!(combine_jungseong(18, 20), Some(19));
        assert_eq!(combine_jungseong(0, 0), None);
        assert_eq!(split_jungseong(10), Some((8, 1)));
        assert_eq!(split_jungseong(0), None);
    }

    #[test]
    fn test_combine_and_split_jongseong() {
        assert_eq!(combine_jongseong(1, 19), Some(3));
        assert_eq!(combine_jongseong(8, 1), Some(9));
        assert_eq!(combine_jongseong(17, 19), Some(18));
        assert_eq!(combine_jongseong(1, 1), None);

        assert_eq!(split_jongseong(3), Some((1, 19)));
        assert_eq!(split_jongseong(15), Some((8, 27)));
        assert_eq!(split_jongseong(4), None);
    }

    #[test]
    fn test_jongseong_to_choseong() {
        assert_eq!(jongseong_to_choseong(1), Some(0));
        assert_eq!(jongseong_to_choseong(4), Some(2));
        assert_eq!(jongseong_to_choseong(20), Some(10)); // ㅆ
        assert_eq!(jongseong_to_choseong(27), Some(18));
        assert_eq!(jongseong_to_choseong(3), None); // ㄳ
        assert_eq!(jongseong_to_choseong(0), None);
    }

    #[test]
    fn test_character_classes() {
        assert!(is_complete_syllable('가'));
        assert!(is_complete_syllable('힣'));
        assert!(!is_complete_syllable('ㄱ'));
        assert!(is_compat_jamo('ㄱ'));
        assert!(is_compat_jamo('ㅣ'));
        assert!(!is_compat_jamo('가'));
        assert!(!is_compat_jamo('a'));
    }
}
