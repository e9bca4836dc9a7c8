//! 키 입력 캡처 이후의 교정 파이프라인 (플랫폼 독립)

pub mod buffer;
pub mod controller;
pub mod event;
pub mod replay;
pub mod snippets;

pub use buffer::KeyStreamBuffer;
pub use controller::{CorrectionController, InputSourceReader, Outcome};
pub use event::{Boundary, KeyEvent};
pub use replay::{KeySink, RecordingSink, ReplayEngine, ReplayError, SyntheticKey};
pub use snippets::{SnippetError, SnippetStore};
