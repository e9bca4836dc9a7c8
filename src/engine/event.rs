//! 키 이벤트 레코드와 경계 키 판정

/// Space 키코드
pub const SPACE_KEYCODE: u16 = 49;
/// Delete (Backspace) 키코드
pub const DELETE_KEYCODE: u16 = 51;

/// 단어를 끝내는 키
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// 판정을 실행
    Space,
    /// 사용자가 고치는 중: 버퍼를 버림
    Delete,
    /// Return, Tab, Escape, 방향키: Delete와 동일하게 버퍼를 버림
    Cancel,
}

impl Boundary {
    pub fn from_keycode(keycode: u16) -> Option<Self> {
        match keycode {
            SPACE_KEYCODE => Some(Boundary::Space),
            DELETE_KEYCODE => Some(Boundary::Delete),
            // 36 = Return, 48 = Tab, 53 = Escape, 76 = 키패드 Enter, 123..=126 = 방향키
            36 | 48 | 53 | 76 | 123..=126 => Some(Boundary::Cancel),
            _ => None,
        }
    }
}

/// 전역 키 입력 하나
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: u16,
    /// 키가 만들어 낸 문자 (없으면 빈 문자열)
    pub text: String,
    /// 이벤트를 만든 프로세스 ID
    pub pid: i64,
    pub boundary: Option<Boundary>,
}

impl KeyEvent {
    /// 경계 키가 아닌데 문자를 만들지 않는 키는 취소 경계로 본다
    pub fn new(keycode: u16, text: impl Into<String>, pid: i64) -> Self {
        let text = text.into();
        let boundary = Boundary::from_keycode(keycode)
            .or_else(|| text.is_empty().then_some(Boundary::Cancel));
        Self {
            keycode,
            text,
            pid,
            boundary,
        }
    }

    /// US 배열 기준으로 키코드에서 문자를 채움 (Shift 반영)
    pub fn from_keycode(keycode: u16, shift: bool, pid: i64) -> Self {
        let text = keycode_to_char(keycode, shift)
            .map(String::from)
            .unwrap_or_default();
        Self::new(keycode, text, pid)
    }

    /// 입력된 문자 하나를 키코드 없이 이벤트로 만듦 (테스트, 재생용)
    pub fn from_char(c: char, pid: i64) -> Self {
        let keycode = char_to_keycode(c).unwrap_or(u16::MAX);
        Self {
            keycode,
            text: c.to_string(),
            pid,
            boundary: None,
        }
    }

    pub fn space(pid: i64) -> Self {
        Self::new(SPACE_KEYCODE, " ", pid)
    }

    pub fn delete(pid: i64) -> Self {
        Self::new(DELETE_KEYCODE, "", pid)
    }

    /// 문자열을 문자 단위 이벤트 시퀀스로
    pub fn typed(text: &str, pid: i64) -> Vec<Self> {
        text.chars().map(|c| Self::from_char(c, pid)).collect()
    }
}

/// (키코드, 기본 문자, Shift 문자)
#[rustfmt::skip]
const US_KEYCODES: &[(u16, char, char)] = &[
    (0, 'a', 'A'), (1, 's', 'S'), (2, 'd', 'D'), (3, 'f', 'F'), (4, 'h', 'H'),
    (5, 'g', 'G'), (6, 'z', 'Z'), (7, 'x', 'X'), (8, 'c', 'C'), (9, 'v', 'V'),
    (10, '§', '±'), (11, 'b', 'B'), (12, 'q', 'Q'), (13, 'w', 'W'), (14, 'e', 'E'),
    (15, 'r', 'R'), (16, 'y', 'Y'), (17, 't', 'T'), (18, '1', '!'), (19, '2', '@'),
    (20, '3', '#'), (21, '4', '$'), (22, '6', '^'), (23, '5', '%'), (24, '=', '+'),
    (25, '9', '('), (26, '7', '&'), (27, '-', '_'), (28, '8', '*'), (29, '0', ')'),
    (30, ']', '}'), (31, 'o', 'O'), (32, 'u', 'U'), (33, '[', '{'), (34, 'i', 'I'),
    (35, 'p', 'P'), (37, 'l', 'L'), (38, 'j', 'J'), (39, '\'', '"'), (40, 'k', 'K'),
    (41, ';', ':'), (42, '\\', '|'), (43, ',', '<'), (44, '/', '?'), (45, 'n', 'N'),
    (46, 'm', 'M'), (47, '.', '>'), (50, '`', '~'),
    // 키패드
    (65, '.', '.'), (67, '*', '*'), (69, '+', '+'), (75, '/', '/'), (78, '-', '-'),
    (81, '=', '='), (82, '0', '0'), (83, '1', '1'), (84, '2', '2'), (85, '3', '3'),
    (86, '4', '4'), (87, '5', '5'), (88, '6', '6'), (89, '7', '7'), (91, '8', '8'),
    (92, '9', '9'),
];

/// macOS 키코드를 문자로 변환 (US 키보드 레이아웃 기준)
pub fn keycode_to_char(keycode: u16, shift: bool) -> Option<char> {
    US_KEYCODES
        .iter()
        .find(|(code, _, _)| *code == keycode)
        .map(|&(_, base, shifted)| if shift { shifted } else { base })
}

fn char_to_keycode(c: char) -> Option<u16> {
    US_KEYCODES
        .iter()
        .find(|(_, base, shifted)| *base == c || *shifted == c)
        .map(|&(code, _, _)| code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keycode_to_char() {
        assert_eq!(keycode_to_char(0, false), Some('a'));
        assert_eq!(keycode_to_char(0, true), Some('A'));
        assert_eq!(keycode_to_char(15, false), Some('r'));
        assert_eq!(keycode_to_char(15, true), Some('R'));
        assert_eq!(keycode_to_char(18, false), Some('1'));
        assert_eq!(keycode_to_char(18, true), Some('!'));
        assert_eq!(keycode_to_char(39, true), Some('"'));
        assert_eq!(keycode_to_char(83, true), Some('1')); // 키패드 1
        assert_eq!(keycode_to_char(SPACE_KEYCODE, false), None);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(Boundary::from_keycode(49), Some(Boundary::Space));
        assert_eq!(Boundary::from_keycode(51), Some(Boundary::Delete));
        for keycode in [36, 48, 53, 76, 123, 124, 125, 126] {
            assert_eq!(Boundary::from_keycode(keycode), Some(Boundary::Cancel));
        }
        assert_eq!(Boundary::from_keycode(0), None);
    }

    #[test]
    fn test_event_constructors() {
        let event = KeyEvent::from_keycode(2, false, 7);
        assert_eq!(event.text, "d");
        assert_eq!(event.boundary, None);
        assert_eq!(event.pid, 7);

        assert_eq!(KeyEvent::space(1).boundary, Some(Boundary::Space));
        assert_eq!(KeyEvent::delete(1).boundary, Some(Boundary::Delete));

        let typed = KeyEvent::typed("Rk", 1);
        assert_eq!(typed.len(), 2);
        assert_eq!(typed[0].keycode, 15);
        assert_eq!(typed[0].text, "R");
        assert!(typed.iter().all(|e| e.boundary.is_none()));
        assert_eq!(KeyEvent::from_char('!', 1).keycode, 18);
    }

    #[test]
    fn test_textless_key_is_cancel() {
        // 122 = F1: 문자를 만들지 않음
        let event = KeyEvent::from_keycode(122, false, 1);
        assert_eq!(event.text, "");
        assert_eq!(event.boundary, Some(Boundary::Cancel));

        let event = KeyEvent::from_keycode(18, true, 1);
        assert_eq!(event.text, "!");
        assert_eq!(event.boundary, None);

        // Delete는 문자가 없어도 Delete 경계
        assert_eq!(KeyEvent::delete(1).boundary, Some(Boundary::Delete));
    }
}
