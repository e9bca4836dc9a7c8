//! 단어 경계 사이의 입력을 모으는 버퍼

/// 기본 최대 단어 길이 (문자 수)
pub const DEFAULT_CAPACITY: usize = 100;

/// 마지막 경계 이후 입력된 문자 (추가만 가능)
///
/// 용량을 넘으면 더 받지 않고 초과 상태로 표시한다.
/// 앞부분이 잘린 단어는 담지 않는다.
#[derive(Debug, Clone)]
pub struct KeyStreamBuffer {
    buffer: String,
    chars: usize,
    capacity: usize,
    overflowed: bool,
}

impl Default for KeyStreamBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl KeyStreamBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
            chars: 0,
            capacity: capacity.max(1),
            overflowed: false,
        }
    }

    /// 문자열을 그대로 덧붙임. 용량을 넘으면 false
    pub fn push(&mut self, text: &str) -> bool {
        if self.overflowed {
            return false;
        }

        let incoming = text.chars().count();
        if self.chars + incoming > self.capacity {
            self.overflowed = true;
            return false;
        }

        self.buffer.push_str(text);
        self.chars += incoming;
        true
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.chars = 0;
        self.overflowed = false;
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// 버퍼에 든 문자 수
    pub fn char_count(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_buffer() {
        let mut buffer = KeyStreamBuffer::new(10);
        assert!(buffer.push("d"));
        assert!(buffer.push("k"));
        assert_eq!(buffer.as_str(), "dk");
        assert_eq!(buffer.char_count(), 2);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.char_count(), 0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let mut buffer = KeyStreamBuffer::new(10);
        buffer.push("한");
        buffer.push("a");
        assert_eq!(buffer.char_count(), 2);
    }

    #[test]
    fn test_key_buffer_overflow() {
        let mut buffer = KeyStreamBuffer::new(3);
        assert!(buffer.push("a"));
        assert!(buffer.push("b"));
        assert!(buffer.push("c"));
        assert!(!buffer.push("d"));
        assert!(buffer.is_overflowed());
        // 넘친 뒤로는 아무것도 받지 않음
        assert!(!buffer.push("e"));
        assert_eq!(buffer.as_str(), "abc");

        buffer.clear();
        assert!(!buffer.is_overflowed());
        assert!(buffer.push("x"));
    }
}
