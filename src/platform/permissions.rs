//! Accessibility 권한 확인

use core_foundation::base::TCFType;
use core_foundation::boolean::CFBoolean;
use core_foundation::dictionary::CFDictionary;
use core_foundation::string::CFString;
use std::ptr;

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    fn AXIsProcessTrustedWithOptions(
        options: *const core_foundation::dictionary::__CFDictionary,
    ) -> bool;
}

/// 이벤트 탭과 합성 입력에 필요한 권한이 있는지 확인
/// `prompt`가 true이고 권한이 없으면 시스템 요청 다이얼로그를 띄운다
pub fn request_accessibility_permission(prompt: bool) -> bool {
    if !prompt {
        return unsafe { AXIsProcessTrustedWithOptions(ptr::null()) };
    }

    let options = CFDictionary::from_CFType_pairs(&[(
        CFString::new("AXTrustedCheckOptionPrompt"),
        CFBoolean::true_value(),
    )]);
    unsafe { AXIsProcessTrustedWithOptions(options.as_concrete_TypeRef()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_permission() {
        // 권한 여부와 관계없이 크래시 없이 실행되어야 함
        let _ = request_accessibility_permission(false);
    }
}
