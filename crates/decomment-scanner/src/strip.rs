//! Comment removal.
//!
//! All entry points drive the same `Scanner`; they only differ in what they
//! do with the segments. None of them can fail on malformed input.

use std::io;

use crate::comments::CommentRange;
use crate::scanner::{Scanner, Segment};
use crate::syntax::{Language, SyntaxProfile};

/// Result of stripping one buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stripped {
    pub text: String,
    pub comments_removed: usize,
    pub bytes_removed: usize,
}

/// Remove every comment from `text`, keeping all other bytes.
pub fn strip(text: &str, profile: &SyntaxProfile) -> String {
    strip_with_stats(text, profile).text
}

/// `strip` using the profile of a language family.
pub fn strip_language(text: &str, language: Language) -> String {
    strip(text, language.profile())
}

/// Remove every comment and report how much was removed.
#[tracing::instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn strip_with_stats(text: &str, profile: &SyntaxProfile) -> Stripped {
    let mut out = String::with_capacity(text.len());
    let mut comments_removed = 0;
    let mut bytes_removed = 0;

    for segment in Scanner::new(text, profile) {
        match segment {
            Segment::Code(range) => out.push_str(&text[range]),
            Segment::Comment(comment) => {
                comments_removed += 1;
                bytes_removed += comment.len();
            }
        }
    }

    tracing::trace!(comments_removed, bytes_removed, "stripped buffer");
    Stripped {
        text: out,
        comments_removed,
        bytes_removed,
    }
}

/// Stream the stripped text into `writer` span by span.
///
/// Produces exactly the bytes `strip` would return, without building the
/// output buffer. Only the writer can fail.
pub fn strip_to<W: io::Write>(text: &str, profile: &SyntaxProfile, writer: &mut W) -> io::Result<()> {
    for segment in Scanner::new(text, profile) {
        if let Segment::Code(range) = segment {
            writer.write_all(text[range].as_bytes())?;
        }
    }
    Ok(())
}

/// Every comment detected in `text`, in input order.
pub fn comment_ranges(text: &str, profile: &SyntaxProfile) -> Vec<CommentRange> {
    Scanner::new(text, profile)
        .filter_map(|segment| match segment {
            Segment::Comment(comment) => Some(comment),
            Segment::Code(_) => None,
        })
        .collect()
}
