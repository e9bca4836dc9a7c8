//! macOS 어댑터: 키 캡처, 입력 소스 질의, 합성 입력, 권한

pub mod event_tap;
pub mod input_source;
pub mod permissions;
pub mod synthetic;

use thiserror::Error;

pub use event_tap::run_event_tap;
pub use input_source::TisInputSource;
pub use permissions::request_accessibility_permission;
pub use synthetic::CgEventSink;

#[derive(Debug, Error)]
pub enum TapError {
    #[error("CGEventTap 생성 실패. Accessibility 권한을 확인하세요.")]
    Create,
    #[error("RunLoop source 생성 실패")]
    RunLoopSource,
}
