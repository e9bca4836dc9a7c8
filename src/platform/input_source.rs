//! 현재 입력 소스(한/영) 확인
//! Carbon API의 TIS (Text Input Source) 함수 사용

use core_foundation::base::{CFRelease, CFTypeRef, TCFType};
use core_foundation::string::{CFString, CFStringRef};

use crate::engine::InputSourceReader;

type TISInputSourceRef = *mut std::ffi::c_void;

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    fn TISCopyCurrentKeyboardInputSource() -> TISInputSourceRef;
    fn TISGetInputSourceProperty(
        inputSource: TISInputSourceRef,
        propertyKey: CFStringRef,
    ) -> CFTypeRef;

    static kTISPropertyInputSourceID: CFStringRef;
}

/// 현재 입력 소스 ID (예: com.apple.inputmethod.Korean.2SetKorean)
pub fn current_input_source_id() -> Option<String> {
    unsafe {
        let current = TISCopyCurrentKeyboardInputSource();
        if current.is_null() {
            return None;
        }

        let source_id = TISGetInputSourceProperty(current, kTISPropertyInputSourceID);
        // 속성 값은 입력 소스가 소유하므로 해제 전에 복사
        let id = if source_id.is_null() {
            None
        } else {
            Some(CFString::wrap_under_get_rule(source_id as CFStringRef).to_string())
        };
        CFRelease(current as CFTypeRef);
        id
    }
}

/// 입력 소스 ID가 한글 입력기인지
pub fn is_korean_source_id(id: &str) -> bool {
    let id = id.to_lowercase();
    id.contains("korean") || id.contains("hangul")
}

/// TIS로 매번 새로 읽는 입력 소스 질의
#[derive(Debug, Clone, Copy, Default)]
pub struct TisInputSource;

impl InputSourceReader for TisInputSource {
    fn is_alternate_script_active(&self) -> bool {
        match current_input_source_id() {
            Some(id) => is_korean_source_id(&id),
            None => {
                log::warn!("입력 소스를 알 수 없음, 영문으로 간주");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_source_ids() {
        assert!(is_korean_source_id("com.apple.inputmethod.Korean.2SetKorean"));
        assert!(is_korean_source_id("com.example.inputmethod.Hangul"));
        assert!(!is_korean_source_id("com.apple.keylayout.ABC"));
        assert!(!is_korean_source_id("com.apple.keylayout.US"));
    }

    #[test]
    #[ignore] // GUI 환경에서만 테스트 가능
    fn test_current_input_source() {
        let id = current_input_source_id();
        assert!(id.is_some());
        println!("현재 입력 소스: {:?}", id);
    }
}
