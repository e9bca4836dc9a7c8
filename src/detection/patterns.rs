//! 휴리스틱 분류기가 쓰는 영문/한글 패턴 데이터

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::keymap::{is_consonant_key, is_vowel_key};

/// 두벌식으로 치면 그럴듯한 한글이 되지만 영어 단어로 남겨야 하는 목록
#[rustfmt::skip]
const COMMON_ENGLISH: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was",
    "one", "our", "out", "has", "his", "how", "its", "let", "may", "new", "now", "old",
    "see", "two", "way", "who", "did", "get", "use", "man", "day", "too", "any", "put",
    "say", "she", "try", "set", "run", "end", "ask", "big", "buy", "far", "few", "got",
    "him", "job", "key", "low", "lot", "off", "pay", "per", "red", "sit", "top", "why",
    "yes", "yet", "app", "web", "api", "url", "dev",
    "that", "with", "have", "this", "will", "your", "from", "they", "been", "call",
    "come", "made", "find", "long", "down", "more", "each", "said", "time", "very",
    "when", "make", "only", "here", "must", "into", "year", "take", "them", "some",
    "then", "than", "look", "also", "well", "back", "over", "such", "good", "give",
    "just", "even", "work", "know", "life", "hand", "code", "file", "test", "data",
    "user", "type", "name", "list", "help", "want", "need", "open", "save", "edit",
    "view", "show", "read", "send", "copy", "move", "text", "link", "next", "home",
    "page", "true", "null", "void", "self", "main", "init", "size", "loop", "bool",
    "byte", "char", "case", "else", "enum", "none", "push", "pull", "sort", "stop",
    "hello", "world", "there", "which", "their", "would", "about", "these", "could",
    "other", "after", "first", "never", "where", "those", "being", "every", "under",
    "think", "still", "while", "great", "right", "place", "thing", "point", "string",
    "function", "return", "public", "private", "static", "class", "const", "import",
    "export", "default", "async", "await", "break", "catch", "print", "input", "output",
    "error", "value", "array", "index", "count", "start", "false", "check", "clear",
    "close", "build", "write", "event", "state", "style", "click", "fetch",
];

/// 영어에서 가장 흔한 바이그램 상위 50개
#[rustfmt::skip]
const ENGLISH_BIGRAM_LIST: [&str; 50] = [
    "th", "he", "in", "er", "an", "re", "on", "at", "en", "nd",
    "ti", "es", "or", "te", "of", "ed", "is", "it", "al", "ar",
    "st", "to", "nt", "ng", "se", "ha", "as", "ou", "io", "le",
    "ve", "co", "me", "de", "hi", "ri", "ro", "ic", "ne", "ea",
    "ra", "ce", "li", "ch", "ll", "be", "ma", "si", "om", "ur",
];

pub static COMMON_ENGLISH_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| COMMON_ENGLISH.iter().copied().collect());

pub static ENGLISH_BIGRAMS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_BIGRAM_LIST.iter().copied().collect());

/// 자음 키 뒤에 모음 키가 오는 조합 (예: rk = ㄱ+ㅏ)
pub fn is_hangul_bigram(first: char, second: char) -> bool {
    is_consonant_key(first) && is_vowel_key(second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hangul_bigrams() {
        assert!(is_hangul_bigram('r', 'k')); // ㄱㅏ
        assert!(is_hangul_bigram('g', 'k')); // ㅎㅏ
        // "th"는 영어에서 흔하지만 두벌식으로도 ㅅ+ㅗ
        assert!(is_hangul_bigram('t', 'h'));
        assert!(!is_hangul_bigram('k', 'r'));
        assert!(!is_hangul_bigram('1', 'k'));
    }

    #[test]
    fn test_english_bigrams() {
        assert!(ENGLISH_BIGRAMS.contains("th"));
        assert!(ENGLISH_BIGRAMS.contains("er"));
        assert!(!ENGLISH_BIGRAMS.contains("rk"));
    }

    #[test]
    fn test_common_english_words() {
        assert!(COMMON_ENGLISH_WORDS.contains("hello"));
        assert!(COMMON_ENGLISH_WORDS.contains("the"));
        assert!(!COMMON_ENGLISH_WORDS.contains("dkssud"));
    }
}
