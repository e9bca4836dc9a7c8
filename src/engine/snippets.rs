//! 스니펫 (단축어 -> 본문) 저장소
//!
//! 파일 형식: `[{"shortcut": "...", "text": "..."}]`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// 파일이 없을 때 만들어 두는 예시
const DEFAULT_SNIPPETS: &str = r#"[{"shortcut": "test", "text": "실행 테스트"}]"#;

#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("스니펫 파일 읽기 실패: {0}")]
    Io(#[from] io::Error),
    #[error("스니펫 파일 파싱 실패: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SnippetEntry {
    shortcut: String,
    text: String,
}

/// 단어 안에서 찾은 단축어 위치
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetMatch<'a> {
    /// 단축어가 시작하는 문자 위치
    pub start: usize,
    /// 단축어 길이 (문자 수)
    pub shortcut_len: usize,
    pub shortcut: &'a str,
    pub expansion: &'a str,
}

#[derive(Debug, Clone, Default)]
pub struct SnippetStore {
    snippets: HashMap<String, String>,
}

impl SnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 빈 단축어는 무시한다
    pub fn from_json(json: &str) -> Result<Self, SnippetError> {
        let entries: Vec<SnippetEntry> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for entry in entries {
            store.insert(entry.shortcut, entry.text);
        }
        Ok(store)
    }

    pub fn load(path: &Path) -> Result<Self, SnippetError> {
        let content = fs::read_to_string(path)?;
        let store = Self::from_json(&content)?;
        log::info!("스니펫 {}개 로드: {}", store.len(), path.display());
        Ok(store)
    }

    /// 파일이 없으면 예시 파일 생성
    pub fn ensure_file(path: &Path) -> Result<(), SnippetError> {
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_SNIPPETS)?;
        Ok(())
    }

    pub fn insert(&mut self, shortcut: impl Into<String>, text: impl Into<String>) {
        let shortcut = shortcut.into();
        if shortcut.is_empty() {
            return;
        }
        self.snippets.insert(shortcut, text.into());
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// 단어에 포함된 가장 긴 단축어 (길이가 같으면 더 오른쪽에 나온 것)
    pub fn find_in(&self, word: &str) -> Option<SnippetMatch<'_>> {
        let mut best: Option<SnippetMatch<'_>> = None;

        for (shortcut, text) in &self.snippets {
            let Some(byte_start) = word.rfind(shortcut.as_str()) else {
                continue;
            };
            let candidate = SnippetMatch {
                start: word[..byte_start].chars().count(),
                shortcut_len: shortcut.chars().count(),
                shortcut,
                expansion: text,
            };

            let better = match &best {
                None => true,
                Some(current) => {
                    (candidate.shortcut_len, candidate.start) > (current.shortcut_len, current.start)
                }
            };
            if better {
                best = Some(candidate);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let store = SnippetStore::from_json(
            r#"[{"shortcut": "addr", "text": "서울시"}, {"shortcut": "", "text": "무시"}]"#,
        )
        .unwrap();
        assert_eq!(store.len(), 1);
        assert!(SnippetStore::from_json("{not json").is_err());
    }

    #[test]
    fn test_find_in() {
        let mut store = SnippetStore::new();
        store.insert("sig", "서명");

        let found = store.find_in("mysigs").unwrap();
        assert_eq!(found.start, 2);
        assert_eq!(found.shortcut_len, 3);
        assert_eq!(found.expansion, "서명");

        assert!(store.find_in("hello").is_none());
    }

    #[test]
    fn test_longest_shortcut_wins() {
        let mut store = SnippetStore::new();
        store.insert("ab", "짧은");
        store.insert("abc", "긴");

        let found = store.find_in("xabc").unwrap();
        assert_eq!(found.shortcut, "abc");
    }

    #[test]
    fn test_rightmost_on_tie() {
        let mut store = SnippetStore::new();
        store.insert("ab", "1");
        store.insert("cd", "2");

        let found = store.find_in("cdab").unwrap();
        assert_eq!(found.shortcut, "ab");
        assert_eq!(found.start, 2);

        // 같은 단축어가 여러 번 나오면 마지막 위치
        let found = store.find_in("abxab").unwrap();
        assert_eq!(found.start, 3);
    }

    #[test]
    fn test_char_positions_for_non_ascii() {
        let mut store = SnippetStore::new();
        store.insert("ㄱㄴ", "가나");
        let found = store.find_in("한ㄱㄴ").unwrap();
        assert_eq!(found.start, 1);
        assert_eq!(found.shortcut_len, 2);
    }

    #[test]
    fn test_load_and_ensure_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets").join("snippets.json");

        assert!(matches!(SnippetStore::load(&path), Err(SnippetError::Io(_))));

        SnippetStore::ensure_file(&path).unwrap();
        let store = SnippetStore::load(&path).unwrap();
        assert_eq!(store.find_in("test").unwrap().expansion, "실행 테스트");

        // 이미 있는 파일은 덮어쓰지 않음
        fs::write(&path, r#"[{"shortcut": "hi", "text": "안녕"}]"#).unwrap();
        SnippetStore::ensure_file(&path).unwrap();
        let store = SnippetStore::load(&path).unwrap();
        assert!(store.find_in("test").is_none());
    }
}
