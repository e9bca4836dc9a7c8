//! CGEvent로 합성 키 입력 주입

use core_graphics::event::{CGEvent, CGEventTapLocation, CGKeyCode, EventField};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

use crate::engine::{KeySink, ReplayError};

/// 유니코드 입력에 쓰는 가상 키코드
const UNICODE_CARRIER_KEYCODE: CGKeyCode = 0;

/// 자기 프로세스 ID를 붙여 HID 위치에 이벤트를 보내는 싱크
pub struct CgEventSink {
    pid: i64,
}

impl CgEventSink {
    pub fn new(pid: i64) -> Self {
        Self { pid }
    }

    fn keyboard_event(&self, keycode: CGKeyCode, key_down: bool) -> Result<CGEvent, ReplayError> {
        let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
            .map_err(|_| ReplayError::Source)?;
        let event = CGEvent::new_keyboard_event(source, keycode, key_down)
            .map_err(|_| ReplayError::Event(keycode))?;
        event.set_integer_value_field(EventField::EVENT_SOURCE_UNIX_PROCESS_ID, self.pid);
        Ok(event)
    }
}

impl KeySink for CgEventSink {
    fn post_key(&mut self, keycode: u16, key_down: bool) -> Result<(), ReplayError> {
        let event = self.keyboard_event(keycode, key_down)?;
        event.post(CGEventTapLocation::HID);
        Ok(())
    }

    /// key-down 하나에 코드 유닛 하나
    fn post_unicode(&mut self, unit: u16) -> Result<(), ReplayError> {
        let event = self.keyboard_event(UNICODE_CARRIER_KEYCODE, true)?;
        event.set_string_from_utf16_unchecked(&[unit]);
        event.post(CGEventTapLocation::HID);
        Ok(())
    }
}
