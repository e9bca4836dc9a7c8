//! 교정 결정 정책
//!
//! (현재 입력 소스, 분류기 확률) 쌍을 보고 단어를 한글로 바꿀지, 그대로 둘지,
//! 판단을 보류할지 정한다. 실제로 교정이 일어나는 경우는
//! 영문 입력 상태에서 영어가 아닌 단어를 친 경우 하나뿐이다.

use std::fmt;

/// 기본 불확실 구간 폭
pub const DEFAULT_EPSILON: f32 = 0.05;

/// 단어 경계 시점의 활성 입력 소스
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveInputSource {
    /// 한글 입력기
    Korean,
    /// 영문 등 그 외
    Other,
}

impl ActiveInputSource {
    pub fn from_alternate(alternate_script_active: bool) -> Self {
        if alternate_script_active {
            ActiveInputSource::Korean
        } else {
            ActiveInputSource::Other
        }
    }
}

/// 확률을 구간으로 나눈 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    English,
    NonEnglish,
    Ambiguous,
}

/// 판단 보류 사유
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbstainReason {
    /// 분류할 문자가 없음 (또는 분류기 응답 없음)
    Unclassifiable,
    /// 확률이 불확실 구간 안에 있음
    Ambiguous,
    /// 단어가 버퍼 용량을 넘음
    Overflow,
}

impl fmt::Display for AbstainReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AbstainReason::Unclassifiable => "분류 불가",
            AbstainReason::Ambiguous => "애매함",
            AbstainReason::Overflow => "버퍼 초과",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// 한글로 변환하여 다시 입력
    Convert,
    /// 입력한 그대로 둠
    Keep {
        source: ActiveInputSource,
        classification: Classification,
    },
    Abstain(AbstainReason),
}

impl Decision {
    pub fn is_convert(&self) -> bool {
        matches!(self, Decision::Convert)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DecisionPolicy {
    epsilon: f32,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl DecisionPolicy {
    /// `epsilon`은 (0, 0.5) 범위여야 한다
    pub fn new(epsilon: f32) -> Option<Self> {
        if epsilon > 0.0 && epsilon < 0.5 {
            Some(Self { epsilon })
        } else {
            None
        }
    }

    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// 영어 확률을 구간으로 분류
    pub fn classify(&self, p: f32) -> Classification {
        if p > 1.0 - self.epsilon {
            Classification::English
        } else if p < self.epsilon {
            Classification::NonEnglish
        } else {
            Classification::Ambiguous
        }
    }

    /// 결정 표 적용
    ///
    /// `verdict`가 None이거나 유한하지 않으면 분류 불가로 본다.
    /// 범위를 벗어난 유한 값은 [0, 1]로 자른다.
    pub fn decide(&self, word: &str, source: ActiveInputSource, verdict: Option<f32>) -> Decision {
        if word.is_empty() {
            return Decision::Abstain(AbstainReason::Unclassifiable);
        }

        let p = match verdict {
            Some(p) if p.is_finite() => p.clamp(0.0, 1.0),
            _ => return Decision::Abstain(AbstainReason::Unclassifiable),
        };

        let classification = self.classify(p);
        match (source, classification) {
            (_, Classification::Ambiguous) => Decision::Abstain(AbstainReason::Ambiguous),
            (ActiveInputSource::Other, Classification::NonEnglish) => Decision::Convert,
            (ActiveInputSource::Korean, Classification::English) => {
                // 한글 모드에서 영어를 친 경우: 기록만 하고 고치지 않음
                log::info!("한글 입력 중 영어 단어로 보임: {} (p={:.3})", word, p);
                Decision::Keep {
                    source,
                    classification,
                }
            }
            _ => Decision::Keep {
                source,
                classification,
            },
        }
    }
}
