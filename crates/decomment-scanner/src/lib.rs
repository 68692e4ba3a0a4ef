//! Context-aware comment scanner for the decomment tool.
//!
//! This crate removes comments from source text while leaving every other
//! byte untouched:
//! - `Language` / `SyntaxProfile` - Which comment and literal forms apply
//! - `Scanner` - Single-pass lexical state machine yielding code and comment segments
//! - `strip` and friends - Whole-buffer and streaming comment removal
//! - `CommentRange` - Location and kind of every detected comment
//!
//! Scanning never fails: unterminated comments, strings, template literals,
//! and regular expressions are absorbed up to the end of the input.

// Byte classification helpers
pub mod char_codes;

// Comment ranges reported by the scanner
pub mod comments;
pub use comments::{CommentKind, CommentRange};

// Language syntax profiles
pub mod syntax;
pub use syntax::{BlockComment, Language, SyntaxProfile};

// The lexical state machine
pub mod scanner;
pub use scanner::{Mode, Scanner, Segment, TokenClass};

// Comment removal entry points
pub mod strip;
pub use strip::{Stripped, comment_ranges, strip, strip_language, strip_to, strip_with_stats};

#[cfg(test)]
#[path = "tests/char_codes_tests.rs"]
mod char_codes_tests;
#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod scanner_tests;
#[cfg(test)]
#[path = "tests/strip_tests.rs"]
mod strip_tests;
#[cfg(test)]
#[path = "tests/syntax_tests.rs"]
mod syntax_tests;
