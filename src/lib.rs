pub mod config;
pub mod core;
pub mod detection;
pub mod engine;
#[cfg(target_os = "macos")]
pub mod platform;

pub use self::core::converter::{convert, revert};
pub use detection::{BoundedClassifier, DecisionPolicy, HeuristicClassifier, LanguageClassifier};
pub use engine::{CorrectionController, KeyEvent, Outcome};
