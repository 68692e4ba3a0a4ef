//! Comment ranges.
//!
//! Every comment the scanner detects is reported as a `CommentRange` over the
//! scanned input. Stripping drops exactly these ranges.

use serde::Serialize;

/// Kind of comment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentKind {
    Line,   // // comment, # comment
    Block,  // /* comment */
    Markup, // <!-- comment -->
}

impl CommentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentKind::Line => "line",
            CommentKind::Block => "block",
            CommentKind::Markup => "markup",
        }
    }
}

/// A range representing a comment in the source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentRange {
    /// Start position (byte offset of the opening delimiter)
    pub pos: usize,
    /// End position (byte offset just past the close sequence, or the line
    /// terminator for line comments, which is not part of the comment)
    pub end: usize,
    pub kind: CommentKind,
    /// False when a block or markup comment ran to the end of input
    pub terminated: bool,
}

impl CommentRange {
    /// Create a new comment range.
    pub fn new(pos: usize, end: usize, kind: CommentKind, terminated: bool) -> Self {
        CommentRange {
            pos,
            end,
            kind,
            terminated,
        }
    }

    /// Get the comment text from source.
    pub fn get_text<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.pos..self.end).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.end - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == self.end
    }

    /// Whether the comment body spans more than one line.
    pub fn is_multi_line(&self, source: &str) -> bool {
        self.get_text(source)
            .bytes()
            .any(crate::char_codes::is_line_break)
    }
}
