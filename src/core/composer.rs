//! 두벌식 한글 조합 오토마타
//!
//! 자모를 한 글자씩 받아 완성형 음절을 만든다. 조합할 수 없는 입력은
//! 앞 조각을 그대로 확정하고 새 조각을 시작하므로 입력이 버려지지 않는다.

use crate::core::keymap::Jamo;
use crate::core::unicode::{
    choseong_glyph, combine_jongseong, combine_jungseong, compose_syllable, jongseong_to_choseong,
    jungseong_glyph, split_jongseong,
};

/// 조합 중인 음절의 초성/중성/종성 슬롯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Syllable {
    choseong: Option<u32>,
    jungseong: Option<u32>,
    jongseong: Option<u32>,
}

impl Syllable {
    fn leading(choseong: u32) -> Self {
        Self {
            choseong: Some(choseong),
            ..Self::default()
        }
    }

    fn vowel(jungseong: u32) -> Self {
        Self {
            jungseong: Some(jungseong),
            ..Self::default()
        }
    }

    /// 화면에 표시할 형태. 초성이나 중성만 있으면 호환용 자모로 표시
    fn render(&self) -> Option<char> {
        match (self.choseong, self.jungseong) {
            (Some(cho), Some(jung)) => compose_syllable(cho, jung, self.jongseong.unwrap_or(0)),
            (Some(cho), None) => choseong_glyph(cho),
            (None, Some(jung)) => jungseong_glyph(jung),
            (None, None) => None,
        }
    }
}

/// 오토마타 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    /// 조합 중인 음절 없음
    Empty,
    /// 초성만 입력됨
    HasLeading,
    /// 초성+중성 (받침 대기)
    HasLeadingVowel,
    /// 초성+중성+종성
    HasTrailing,
    /// 초성 없이 모음만 입력됨
    VowelFragment,
}

/// 한글 조합기
#[derive(Debug, Clone, Default)]
pub struct HangulComposer {
    /// 확정된 음절/조각
    composed: Vec<String>,
    /// 조합 중인 음절을 이루는 자모 (입력 순서)
    pending: Vec<char>,
    current: Option<Syllable>,
}

impl HangulComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 자모 한 글자 입력. 자모가 아닌 문자는 현재 음절을 확정한 뒤 그대로 출력
    pub fn feed(&mut self, glyph: char) {
        match Jamo::from_glyph(glyph) {
            Some(Jamo::Consonant {
                choseong,
                jongseong,
            }) => self.feed_consonant(glyph, choseong, jongseong),
            Some(Jamo::Vowel { jungseong }) => self.feed_vowel(glyph, jungseong),
            None => {
                self.commit();
                self.composed.push(glyph.to_string());
            }
        }
    }

    fn feed_consonant(&mut self, glyph: char, choseong: u32, jongseong: Option<u32>) {
        let extended = match self.current {
            // 받침 자리 채우기
            Some(s @ Syllable {
                choseong: Some(_),
                jungseong: Some(_),
                jongseong: None,
            }) => jongseong.map(|jong| Syllable {
                jongseong: Some(jong),
                ..s
            }),
            // 겹받침 시도
            Some(s @ Syllable {
                jongseong: Some(prev),
                ..
            }) => jongseong
                .and_then(|jong| combine_jongseong(prev, jong))
                .map(|combined| Syllable {
                    jongseong: Some(combined),
                    ..s
                }),
            _ => None,
        };

        match extended {
            Some(syllable) => {
                self.current = Some(syllable);
                self.pending.push(glyph);
            }
            None => {
                self.commit();
                self.start(Syllable::leading(choseong), &[glyph]);
            }
        }
    }

    fn feed_vowel(&mut self, glyph: char, jungseong: u32) {
        let Some(current) = self.current else {
            self.start(Syllable::vowel(jungseong), &[glyph]);
            return;
        };

        match (current.jungseong, current.jongseong) {
            // 초성 + 중성
            (None, _) => {
                self.current = Some(Syllable {
                    jungseong: Some(jungseong),
                    ..current
                });
                self.pending.push(glyph);
            }
            // 복합 모음 시도
            (Some(prev), None) => match combine_jungseong(prev, jungseong) {
                Some(combined) => {
                    self.current = Some(Syllable {
                        jungseong: Some(combined),
                        ..current
                    });
                    self.pending.push(glyph);
                }
                None => {
                    self.commit();
                    self.start(Syllable::vowel(jungseong), &[glyph]);
                }
            },
            // 받침이 다음 음절의 초성으로 이동
            (Some(_), Some(jong)) => {
                let (remaining, moved) = match split_jongseong(jong) {
                    Some((first, second)) => (Some(first), jongseong_to_choseong(second)),
                    None => (None, jongseong_to_choseong(jong)),
                };
                let Some(next_choseong) = moved else {
                    self.commit();
                    self.start(Syllable::vowel(jungseong), &[glyph]);
                    return;
                };

                self.current = Some(Syllable {
                    jongseong: remaining,
                    ..current
                });
                self.commit();

                let mut glyphs = Vec::with_capacity(2);
                glyphs.extend(choseong_glyph(next_choseong));
                glyphs.push(glyph);
                self.start(
                    Syllable {
                        choseong: Some(next_choseong),
                        jungseong: Some(jungseong),
                        jongseong: None,
                    },
                    &glyphs,
                );
            }
        }
    }

    fn start(&mut self, syllable: Syllable, glyphs: &[char]) {
        self.current = Some(syllable);
        self.pending.clear();
        self.pending.extend_from_slice(glyphs);
    }

    /// 조합 중인 음절을 확정 출력에 추가
    fn commit(&mut self) {
        if let Some(syllable) = self.current.take() {
            match syllable.render() {
                Some(c) => self.composed.push(c.to_string()),
                None => self.composed.push(self.pending.iter().collect()),
            }
        }
        self.pending.clear();
    }

    /// 확정된 출력 + 조합 중인 음절의 표시 형태
    ///
    /// 상태를 바꾸지 않으므로 여러 번 호출해도 결과가 같다.
    pub fn flush(&self) -> String {
        let mut out = self.composed.concat();
        if let Some(syllable) = self.current {
            match syllable.render() {
                Some(c) => out.push(c),
                None => out.extend(self.pending.iter()),
            }
        }
        out
    }

    /// 모든 상태 초기화
    pub fn reset(&mut self) {
        self.composed.clear();
        self.pending.clear();
        self.current = None;
    }

    pub fn state(&self) -> ComposerState {
        match self.current {
            None => ComposerState::Empty,
            Some(Syllable {
                choseong: None, ..
            }) => ComposerState::VowelFragment,
            Some(Syllable {
                jungseong: None, ..
            }) => ComposerState::HasLeading,
            Some(Syllable {
                jongseong: None, ..
            }) => ComposerState::HasLeadingVowel,
            Some(_) => ComposerState::HasTrailing,
        }
    }

    /// 아직 음절로 확정되지 않은 자모
    pub fn pending(&self) -> &[char] {
        &self.pending
    }

    pub fn is_empty(&self) -> bool {
        self.composed.is_empty() && self.current.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(jamo: &str) -> String {
        let mut composer = HangulComposer::new();
        for c in jamo.chars() {
            composer.feed(c);
        }
        composer.flush()
    }

    #[test]
    fn test_basic_syllable() {
        assert_eq!(compose("ㄱㅏ"), "가");
        assert_eq!(compose("ㄴㅏ"), "나");
    }

    #[test]
    fn test_two_syllables() {
        assert_eq!(compose("ㅎㅏㄴㄱㅡㄹ"), "한글");
        assert_eq!(compose("ㅇㅏㄴㄴㅕㅇ"), "안녕");
    }

    #[test]
    fn test_trailing_moves_to_next_syllable() {
        assert_eq!(compose("ㄱㅏㄱㅏ"), "가가");
        assert_eq!(compose("ㅇㅏㄴㅈㅣ"), "안지");
    }

    #[test]
    fn test_compound_vowel() {
        assert_eq!(compose("ㅇㅗㅏ"), "와");
        assert_eq!(compose("ㅇㅜㅓ"), "워");
        assert_eq!(compose("ㅇㅡㅣ"), "의");
    }

    #[test]
    fn test_compound_trailing() {
        assert_eq!(compose("ㅇㅣㄹㄱ"), "읽");
        // 겹받침 뒤 모음: 뒤 자음만 다음 초성으로
        assert_eq!(compose("ㅇㅣㄹㄱㅓ"), "일거");
        assert_eq!(compose("ㄱㅏㅂㅅㅇㅣ"), "값이");
    }

    #[test]
    fn test_non_trailing_double_consonant() {
        // ㄸ은 받침이 될 수 없으므로 새 음절 시작
        assert_eq!(compose("ㄱㅏㄸㅏ"), "가따");
    }

    #[test]
    fn test_partial_rendering() {
        assert_eq!(compose("ㄱ"), "ㄱ");
        assert_eq!(compose("ㄱㄴ"), "ㄱㄴ");
        assert_eq!(compose("ㅏ"), "ㅏ");
    }

    #[test]
    fn test_vowel_fragments_never_dropped() {
        assert_eq!(compose("ㅏㅗ"), "ㅏㅗ");
        assert_eq!(compose("ㄱㅏㅏ"), "가ㅏ");
        // 조각 모음끼리도 복합 모음이 되면 합침
        assert_eq!(compose("ㅗㅏ"), "ㅘ");
        // 모음 조각 뒤 자음은 새 음절
        assert_eq!(compose("ㅏㄱㅏ"), "ㅏ가");
    }

    #[test]
    fn test_passthrough_glyph() {
        assert_eq!(compose("ㄱㅏ1ㄴㅏ"), "가1나");
        assert_eq!(compose("ㄱ ㄴ"), "ㄱ ㄴ");
        assert_eq!(compose("X"), "X");
    }

    #[test]
    fn test_state_transitions() {
        let mut composer = HangulComposer::new();
        assert_eq!(composer.state(), ComposerState::Empty);
        composer.feed('ㅎ');
        assert_eq!(composer.state(), ComposerState::HasLeading);
        composer.feed('ㅏ');
        assert_eq!(composer.state(), ComposerState::HasLeadingVowel);
        composer.feed('ㄴ');
        assert_eq!(composer.state(), ComposerState::HasTrailing);
        composer.feed('ㄱ');
        assert_eq!(composer.state(), ComposerState::HasLeading);
        assert_eq!(composer.pending(), &['ㄱ']);
        composer.feed('ㅡ');
        assert_eq!(composer.state(), ComposerState::HasLeadingVowel);
        assert_eq!(composer.flush(), "한그");
    }

    #[test]
    fn test_pending_after_split() {
        let mut composer = HangulComposer::new();
        for c in "ㄱㅏㄴㅏ".chars() {
            composer.feed(c);
        }
        assert_eq!(composer.pending(), &['ㄴ', 'ㅏ']);
        assert_eq!(composer.flush(), "가나");
    }

    #[test]
    fn test_flush_is_idempotent() {
        let mut composer = HangulComposer::new();
        for c in "ㅎㅏㄴ".chars() {
            composer.feed(c);
        }
        assert_eq!(composer.flush(), "한");
        assert_eq!(composer.flush(), "한");
        // flush 후에도 조합이 이어짐
        composer.feed('ㅏ');
        assert_eq!(composer.flush(), "하나");
    }

    #[test]
    fn test_reset() {
        let mut composer = HangulComposer::new();
        assert_eq!(composer.flush(), "");
        for c in "ㅎㅏㄴㄱㅡ".chars() {
            composer.feed(c);
        }
        composer.reset();
        assert!(composer.is_empty());
        assert!(composer.pending().is_empty());
        assert_eq!(composer.state(), ComposerState::Empty);
        assert_eq!(composer.flush(), "");
    }
}
