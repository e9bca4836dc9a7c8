//! 언어 판정 모듈 (분류기 + 결정 정책)

mod bounded;
mod classifier;
mod heuristic;
mod patterns;
pub mod policy;
pub mod validator;

pub use bounded::{BoundedClassifier, DEFAULT_TIMEOUT};
pub use classifier::LanguageClassifier;
pub use heuristic::{HeuristicClassifier, HeuristicConfig};
pub use policy::{
    AbstainReason, ActiveInputSource, Classification, Decision, DecisionPolicy, DEFAULT_EPSILON,
};
pub use validator::{has_incomplete_jamo, incomplete_jamo_ratio};
