//! 두벌식 자판 매핑과 한글 조합

pub mod composer;
pub mod converter;
pub mod keymap;
pub mod unicode;

pub use composer::{ComposerState, HangulComposer};
pub use converter::{convert, revert};
pub use keymap::{to_jamo, to_latin, Jamo};
