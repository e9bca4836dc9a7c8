//! 두벌식 자판 영문 키 <-> 한글 자모 양방향 매핑

use std::collections::HashMap;
use std::sync::LazyLock;

use super::unicode::{choseong_index, jongseong_index, jungseong_index};

/// (영문 키, 자모) 매핑 테이블
/// 소문자 26키 + Shift 쌍자음/이중모음 7키
#[rustfmt::skip]
const KEY_TABLE: [(char, char); 33] = [
    // 자음
    ('r', 'ㄱ'), ('s', 'ㄴ'), ('e', 'ㄷ'), ('f', 'ㄹ'), ('a', 'ㅁ'),
    ('q', 'ㅂ'), ('t', 'ㅅ'), ('d', 'ㅇ'), ('w', 'ㅈ'), ('c', 'ㅊ'),
    ('z', 'ㅋ'), ('x', 'ㅌ'), ('v', 'ㅍ'), ('g', 'ㅎ'),
    // 모음
    ('k', 'ㅏ'), ('o', 'ㅐ'), ('i', 'ㅑ'), ('j', 'ㅓ'), ('p', 'ㅔ'),
    ('u', 'ㅕ'), ('h', 'ㅗ'), ('y', 'ㅛ'), ('n', 'ㅜ'), ('b', 'ㅠ'),
    ('m', 'ㅡ'), ('l', 'ㅣ'),
    // Shift
    ('R', 'ㄲ'), ('E', 'ㄸ'), ('Q', 'ㅃ'), ('T', 'ㅆ'), ('W', 'ㅉ'),
    ('O', 'ㅒ'), ('P', 'ㅖ'),
];

static LATIN_TO_JAMO: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| KEY_TABLE.iter().copied().collect());

static JAMO_TO_LATIN: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| KEY_TABLE.iter().map(|&(latin, jamo)| (jamo, latin)).collect());

/// 영문 키를 자모로 변환. 테이블에 없는 문자는 그대로 반환
pub fn to_jamo(c: char) -> char {
    LATIN_TO_JAMO.get(&c).copied().unwrap_or(c)
}

/// 자모를 영문 키로 변환. 테이블에 없는 문자는 그대로 반환
pub fn to_latin(c: char) -> char {
    JAMO_TO_LATIN.get(&c).copied().unwrap_or(c)
}

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (jongseong이 None이면 받침 불가)
    Consonant { choseong: u32, jongseong: Option<u32> },
    /// 모음
    Vowel { jungseong: u32 },
}

impl Jamo {
    /// 호환용 자모 글리프를 분류. 초성이 될 수 있는 자음이나 모음이 아니면 None
    pub fn from_glyph(glyph: char) -> Option<Self> {
        if let Some(choseong) = choseong_index(glyph) {
            return Some(Jamo::Consonant {
                choseong,
                jongseong: jongseong_index(glyph),
            });
        }
        jungseong_index(glyph).map(|jungseong| Jamo::Vowel { jungseong })
    }

    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant { .. })
    }

    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel { .. })
    }
}

/// 영문 키가 두벌식 자음 키인지 확인
pub fn is_consonant_key(c: char) -> bool {
    LATIN_TO_JAMO
        .get(&c)
        .and_then(|&j| Jamo::from_glyph(j))
        .is_some_and(|j| j.is_consonant())
}

/// 영문 키가 두벌식 모음 키인지 확인
pub fn is_vowel_key(c: char) -> bool {
    LATIN_TO_JAMO
        .get(&c)
        .and_then(|&j| Jamo::from_glyph(j))
        .is_some_and(|j| j.is_vowel())
}
