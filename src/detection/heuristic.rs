//! 규칙 기반 언어 분류기
//!
//! 학습된 모델 없이 두벌식 키 패턴만으로 영어 확률을 추정한다.
//! 확신이 있을 때만 0/1 근처의 값을 내고, 애매하면 중간 대역을 돌려주어
//! 결정 정책이 판단을 보류하게 한다.

use super::classifier::LanguageClassifier;
use super::patterns::{is_hangul_bigram, COMMON_ENGLISH_WORDS, ENGLISH_BIGRAMS};
use super::validator::incomplete_jamo_ratio;
use crate::core::converter::convert;
use crate::core::keymap::{is_consonant_key, is_vowel_key};

/// 흔한 영어 단어의 영어 확률
const COMMON_WORD_PROBABILITY: f32 = 0.99;
/// 확신 구간의 폭 (0 또는 1로부터)
const DECISIVE_MARGIN: f32 = 0.04;
/// 판단 근거가 부족할 때
const UNDECIDED_PROBABILITY: f32 = 0.5;

/// 휴리스틱 분류기 설정
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// 한글로 판정하기 위한 최소 신뢰도 (0.0 ~ 100.0)
    pub threshold: f32,
    /// 판정에 필요한 최소 글자 수
    pub min_length: usize,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            min_length: 3,
        }
    }
}

/// 두벌식 키 패턴 기반 분류기
#[derive(Debug, Clone, Default)]
pub struct HeuristicClassifier {
    config: HeuristicConfig,
}

impl HeuristicClassifier {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }

    /// 한글 신뢰도 (0.0 ~ 100.0)
    ///
    /// 자음/모음 비율(30) + 바이그램(40) + 자음-모음 교대(30)
    pub fn confidence(&self, letters: &str) -> f32 {
        let chars: Vec<char> = letters.to_lowercase().chars().collect();
        if chars.is_empty() {
            return 0.0;
        }
        cv_ratio_score(&chars) + bigram_score(&chars) + alternation_score(&chars)
    }
}

impl LanguageClassifier for HeuristicClassifier {
    fn predict(&self, word: &str) -> Option<f32> {
        let letters: String = word.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        if letters.is_empty() {
            return None;
        }

        if COMMON_ENGLISH_WORDS.contains(letters.to_lowercase().as_str()) {
            return Some(COMMON_WORD_PROBABILITY);
        }

        let hangul_score = self.confidence(&letters) / 100.0;

        // 실제 한글 단어는 낱자모 없이 조합된다
        let jamo_ratio = incomplete_jamo_ratio(&convert(&letters));
        if jamo_ratio > 0.0 {
            return Some(1.0 - DECISIVE_MARGIN * (1.0 - jamo_ratio) * hangul_score);
        }

        if letters.chars().count() < self.config.min_length {
            return Some(UNDECIDED_PROBABILITY);
        }

        let threshold = self.config.threshold / 100.0;
        if hangul_score >= threshold {
            let headroom = (1.0 - threshold).max(f32::EPSILON);
            return Some(DECISIVE_MARGIN * (1.0 - hangul_score) / headroom);
        }

        Some((1.0 - hangul_score).clamp(DECISIVE_MARGIN + 0.01, 0.95))
    }
}

/// 자음/모음 비율 점수 (한글은 보통 1:1 ~ 2:1)
fn cv_ratio_score(chars: &[char]) -> f32 {
    let consonants = chars.iter().filter(|&&c| is_consonant_key(c)).count();
    let vowels = chars.iter().filter(|&&c| is_vowel_key(c)).count();
    let total = consonants + vowels;
    if total == 0 {
        return 0.0;
    }

    let ratio = consonants as f32 / total as f32;
    if (0.4..=0.7).contains(&ratio) {
        30.0
    } else if (0.3..=0.8).contains(&ratio) {
        20.0
    } else if (0.2..=0.9).contains(&ratio) {
        10.0
    } else {
        0.0
    }
}

/// 한글 바이그램이 많고 영어 바이그램이 적을수록 높은 점수
fn bigram_score(chars: &[char]) -> f32 {
    if chars.len() < 2 {
        return 0.0;
    }

    let mut hangul = 0;
    let mut english = 0;
    for pair in chars.windows(2) {
        if is_hangul_bigram(pair[0], pair[1]) {
            hangul += 1;
        }
        let bigram: String = pair.iter().collect();
        if ENGLISH_BIGRAMS.contains(bigram.as_str()) {
            english += 1;
        }
    }

    let total = (chars.len() - 1) as f32;
    let score = ((hangul as f32 - english as f32) / total + 1.0) / 2.0 * 40.0;
    score.clamp(0.0, 40.0)
}

/// 자음-모음 교대 패턴 점수
fn alternation_score(chars: &[char]) -> f32 {
    if chars.len() < 2 {
        return 0.0;
    }

    let mut alternations = 0;
    let mut prev_consonant: Option<bool> = None;
    for &c in chars {
        let consonant = is_consonant_key(c);
        let vowel = is_vowel_key(c);

        if let Some(prev) = prev_consonant {
            if (prev && vowel) || (!prev && consonant) {
                alternations += 1;
            }
        }

        if consonant {
            prev_consonant = Some(true);
        } else if vowel {
            prev_consonant = Some(false);
        }
    }

    alternations as f32 / (chars.len() - 1) as f32 * 30.0
}
