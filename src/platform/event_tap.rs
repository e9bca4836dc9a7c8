//! CGEventTap을 사용한 키보드 이벤트 감지 (listen-only)

use core_foundation::base::TCFType;
use core_foundation::runloop::{kCFRunLoopCommonModes, CFRunLoop};
use core_graphics::event::{
    CGEvent, CGEventFlags, CGEventTap, CGEventTapLocation, CGEventTapOptions, CGEventTapPlacement,
    CGEventType, EventField,
};
use foreign_types_shared::ForeignType;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::Arc;

use super::TapError;
use crate::engine::{Boundary, KeyEvent};

/// 키 이벤트 하나가 만드는 최대 UTF-16 유닛 수
const MAX_EVENT_UNITS: usize = 8;

extern "C" {
    /// macOS CoreGraphics: 이벤트 탭 활성화/비활성화
    fn CGEventTapEnable(tap: *mut std::ffi::c_void, enable: bool);
    /// 수정자 키가 반영된 이벤트 문자열
    fn CGEventKeyboardGetUnicodeString(
        event: *mut std::ffi::c_void,
        max_len: std::ffi::c_ulong,
        actual_len: *mut std::ffi::c_ulong,
        buffer: *mut u16,
    );
}

/// 이벤트가 실제로 입력하는 문자열 (제어 문자는 제외)
fn event_text(event: &CGEvent) -> String {
    let mut units = [0u16; MAX_EVENT_UNITS];
    let mut len: std::ffi::c_ulong = 0;
    unsafe {
        CGEventKeyboardGetUnicodeString(
            event.as_ptr() as *mut std::ffi::c_void,
            MAX_EVENT_UNITS as std::ffi::c_ulong,
            &mut len,
            units.as_mut_ptr(),
        );
    }
    let len = (len as usize).min(MAX_EVENT_UNITS);
    String::from_utf16_lossy(&units[..len])
        .chars()
        .filter(|c| !c.is_control())
        .collect()
}

/// CGEvent를 키 이벤트 레코드로
///
/// Command/Control 조합은 커서나 텍스트를 바꿀 수 있으므로 취소 경계로 본다.
fn to_key_event(event: &CGEvent) -> KeyEvent {
    let keycode = event.get_integer_value_field(EventField::KEYBOARD_EVENT_KEYCODE) as u16;
    let pid = event.get_integer_value_field(EventField::EVENT_SOURCE_UNIX_PROCESS_ID);
    let flags = event.get_flags();

    if flags.intersects(CGEventFlags::CGEventFlagCommand | CGEventFlags::CGEventFlagControl) {
        return KeyEvent {
            keycode,
            text: String::new(),
            pid,
            boundary: Some(Boundary::Cancel),
        };
    }

    let text = event_text(event);
    if text.is_empty() {
        // 문자열을 얻지 못하면 US 배열 표로 대신함
        let shift = flags.contains(CGEventFlags::CGEventFlagShift);
        return KeyEvent::from_keycode(keycode, shift, pid);
    }
    KeyEvent::new(keycode, text, pid)
}

fn reenable_tap(port: &AtomicPtr<std::ffi::c_void>) {
    let port = port.load(Ordering::SeqCst);
    if !port.is_null() {
        unsafe {
            CGEventTapEnable(port, true);
        }
        log::warn!("이벤트 탭 재활성화됨");
    }
}

/// 이벤트 탭을 만들고 현재 스레드에서 런루프를 실행 (블로킹)
///
/// `handler`는 키 입력마다 한 번씩, 탭 스레드에서 순서대로 호출된다.
pub fn run_event_tap<F>(handler: F) -> Result<(), TapError>
where
    F: Fn(KeyEvent),
{
    let tap_port = Arc::new(AtomicPtr::new(std::ptr::null_mut()));
    let port_for_callback = Arc::clone(&tap_port);

    let tap = CGEventTap::new(
        CGEventTapLocation::HID,
        CGEventTapPlacement::HeadInsertEventTap,
        CGEventTapOptions::ListenOnly,
        vec![CGEventType::KeyDown],
        move |_proxy, event_type, event| {
            match event_type {
                // macOS가 이벤트 탭을 비활성화했으면 즉시 재활성화
                CGEventType::TapDisabledByTimeout | CGEventType::TapDisabledByUserInput => {
                    log::warn!("이벤트 탭 비활성화 감지: {:?}", event_type);
                    reenable_tap(&port_for_callback);
                }
                CGEventType::KeyDown => handler(to_key_event(event)),
                _ => {}
            }
            Some(event.clone())
        },
    )
    .map_err(|_| TapError::Create)?;

    let raw_port = tap.mach_port.as_concrete_TypeRef() as *mut std::ffi::c_void;
    tap_port.store(raw_port, Ordering::SeqCst);

    unsafe {
        let loop_source = tap
            .mach_port
            .create_runloop_source(0)
            .map_err(|_| TapError::RunLoopSource)?;

        CFRunLoop::get_current().add_source(&loop_source, kCFRunLoopCommonModes);
        tap.enable();

        log::info!("Event tap 시작됨");
        CFRunLoop::run_current();
    }

    Ok(())
}
