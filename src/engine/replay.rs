//! 합성 키 입력 재생 (Backspace + 유니코드 입력)
//!
//! 실제 이벤트 주입은 `KeySink`가 맡는다. macOS에서는 CGEvent,
//! 테스트에서는 `RecordingSink`를 쓴다.

use thiserror::Error;

use super::event::DELETE_KEYCODE;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("이벤트 소스 생성 실패")]
    Source,
    #[error("키 이벤트 생성 실패 (keycode {0})")]
    Event(u16),
    #[error("합성 이벤트 거부됨: {0}")]
    Rejected(String),
}

/// 합성 키 이벤트를 받는 쪽
///
/// 구현체는 이벤트에 자기 프로세스 ID를 붙여 캡처 쪽에서 걸러낼 수 있게 해야 한다.
pub trait KeySink {
    fn post_key(&mut self, keycode: u16, key_down: bool) -> Result<(), ReplayError>;

    /// UTF-16 코드 유닛 하나를 키 입력으로 보냄
    fn post_unicode(&mut self, unit: u16) -> Result<(), ReplayError>;
}

pub struct ReplayEngine<S> {
    sink: S,
}

impl<S: KeySink> ReplayEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Delete 키 down/up 쌍을 `count`번
    pub fn delete_characters(&mut self, count: usize) -> Result<(), ReplayError> {
        for _ in 0..count {
            self.sink.post_key(DELETE_KEYCODE, true)?;
            self.sink.post_key(DELETE_KEYCODE, false)?;
        }
        Ok(())
    }

    /// UTF-16 코드 유닛마다 이벤트 하나
    pub fn type_text(&mut self, text: &str) -> Result<(), ReplayError> {
        for unit in text.encode_utf16() {
            self.sink.post_unicode(unit)?;
        }
        Ok(())
    }

    /// 지우고 다시 입력. 첫 실패에서 멈춘다 (재시도 없음)
    pub fn replace(&mut self, delete_count: usize, text: &str) -> Result<(), ReplayError> {
        self.delete_characters(delete_count)?;
        self.type_text(text)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// 기록된 합성 이벤트
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticKey {
    Key { keycode: u16, down: bool },
    Unicode(u16),
}

/// 이벤트를 주입하지 않고 기록만 하는 싱크
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SyntheticKey>,
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `accepted`개를 받은 뒤부터 모든 이벤트를 거부
    pub fn failing_after(accepted: usize) -> Self {
        Self {
            events: Vec::new(),
            fail_after: Some(accepted),
        }
    }

    pub fn events(&self) -> &[SyntheticKey] {
        &self.events
    }

    /// Delete key-down 수
    pub fn delete_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    SyntheticKey::Key {
                        keycode: DELETE_KEYCODE,
                        down: true
                    }
                )
            })
            .count()
    }

    /// 유니코드 이벤트를 이어 붙인 문자열
    pub fn typed_text(&self) -> String {
        let units: Vec<u16> = self
            .events
            .iter()
            .filter_map(|e| match e {
                SyntheticKey::Unicode(unit) => Some(*unit),
                SyntheticKey::Key { .. } => None,
            })
            .collect();
        String::from_utf16_lossy(&units)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    fn record(&mut self, key: SyntheticKey) -> Result<(), ReplayError> {
        if self.fail_after.is_some_and(|limit| self.events.len() >= limit) {
            return Err(ReplayError::Rejected(format!("{:?}", key)));
        }
        self.events.push(key);
        Ok(())
    }
}

impl KeySink for RecordingSink {
    fn post_key(&mut self, keycode: u16, key_down: bool) -> Result<(), ReplayError> {
        self.record(SyntheticKey::Key {
            keycode,
            down: key_down,
        })
    }

    fn post_unicode(&mut self, unit: u16) -> Result<(), ReplayError> {
        self.record(SyntheticKey::Unicode(unit))
    }
}
