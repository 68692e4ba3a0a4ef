//! Comment scanner state machine.
//!
//! The scanner makes a single forward pass over an immutable buffer with one
//! byte of lookahead. Exactly one `Mode` is active at every position. Verbatim
//! text is not copied byte by byte: the scanner tracks where the pending code
//! span started and yields it as one `Segment::Code` range when a comment
//! begins or the input ends.
//!
//! Regex-vs-division disambiguation uses the class of the last significant
//! token (`TokenClass`). Comments and whitespace never update it.
//!
//! Template interpolations (`${ ... }`) re-enter `Mode::Code`. Instead of
//! recursing, the scanner keeps an explicit stack with one frame per open
//! interpolation, recording how many plain `{` are still open inside it.

use memchr::{memchr, memchr2, memchr3, memmem};
use smallvec::SmallVec;
use std::ops::Range;

use crate::char_codes::{
    BACKSLASH, BACKTICK, CARRIAGE_RETURN, CLOSE_BRACE, CLOSE_BRACKET, CLOSE_PAREN, DOLLAR,
    LESS_THAN, LINE_FEED, OPEN_BRACE, OPEN_BRACKET, OPEN_PAREN, SLASH, is_identifier_part,
    is_regex_flag, is_regex_preceding_keyword, is_whitespace,
};
use crate::comments::{CommentKind, CommentRange};
use crate::syntax::{BlockComment, SyntaxProfile};

/// The scanner's current interpretation context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Code,
    LineComment,
    BlockComment(BlockComment),
    /// Inside a string opened by the given quote byte.
    StringLiteral(u8),
    TemplateLiteral,
    RegexLiteral {
        in_class: bool,
    },
}

/// Class of the most recent significant token in code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TokenClass {
    /// Nothing significant seen yet (start of input).
    #[default]
    None,
    Operator,
    /// A keyword after which an expression may start (`return`, `typeof`, ...).
    Keyword,
    Identifier,
    /// Number, string, template, or regex literal.
    Literal,
    OpenBracket,
    CloseBracket,
    /// `<`. In JSX this may begin a closing tag such as `</div>`.
    LessThan,
}

impl TokenClass {
    /// Whether a `/` after this token opens a regex literal.
    ///
    /// After a value (identifier, literal, closing bracket) a `/` is division,
    /// and after `<` it is the slash of a closing tag. Everywhere else it
    /// starts a regex.
    #[inline]
    pub fn allows_regex(self) -> bool {
        !matches!(
            self,
            TokenClass::Identifier
                | TokenClass::Literal
                | TokenClass::CloseBracket
                | TokenClass::LessThan
        )
    }
}

/// A piece of the input, in order. Code ranges and comment ranges together
/// cover the input exactly once, except that the line terminator ending a
/// line comment belongs to the following code range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// Text kept verbatim.
    Code(Range<usize>),
    Comment(CommentRange),
}

#[derive(Clone, Copy, Debug, Default)]
struct InterpolationFrame {
    /// Plain `{` opened inside the interpolation and not yet closed.
    brace_depth: u32,
}

/// Single-pass comment scanner over one input buffer.
///
/// Iterating yields `Segment`s in input order. The scanner owns no output;
/// callers decide whether to collect, stream, or inspect the segments.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    profile: &'a SyntaxProfile,
    pos: usize,
    /// Start of the code span not yet yielded.
    span_start: usize,
    /// Start of the comment being scanned (valid in comment modes).
    comment_start: usize,
    mode: Mode,
    last_token: TokenClass,
    interpolations: SmallVec<[InterpolationFrame; 4]>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, profile: &'a SyntaxProfile) -> Self {
        let bytes = text.as_bytes();
        let mut pos = 0;
        if profile.keeps_shebang && bytes.starts_with(b"#!") {
            pos = memchr2(LINE_FEED, CARRIAGE_RETURN, bytes).unwrap_or(bytes.len());
        }
        Scanner {
            bytes,
            profile,
            pos,
            span_start: 0,
            comment_start: 0,
            mode: Mode::Code,
            last_token: TokenClass::None,
            interpolations: SmallVec::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn last_token(&self) -> TokenClass {
        self.last_token
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of template interpolations currently open.
    pub fn interpolation_depth(&self) -> usize {
        self.interpolations.len()
    }

    /// Yield the pending code span up to `end`, if it is non-empty.
    fn flush_to(&mut self, end: usize) -> Option<Segment> {
        if self.span_start >= end {
            return None;
        }
        let range = self.span_start..end;
        self.span_start = end;
        Some(Segment::Code(range))
    }

    fn open_comment(&mut self, mode: Mode, open_len: usize) -> Option<Segment> {
        let code = self.flush_to(self.pos);
        self.comment_start = self.pos;
        self.pos += open_len;
        self.mode = mode;
        code
    }

    fn close_comment(&mut self, end: usize, kind: CommentKind, terminated: bool) -> Segment {
        let range = CommentRange::new(self.comment_start, end, kind, terminated);
        self.pos = end;
        self.span_start = end;
        self.mode = Mode::Code;
        Segment::Comment(range)
    }

    /// Skip past a backslash escape. The escaped byte is never a delimiter.
    #[inline]
    fn skip_escape(&mut self, backslash_at: usize) {
        self.pos = (backslash_at + 2).min(self.bytes.len());
    }

    // =========================================================================
    // Per-mode steps
    // =========================================================================

    fn step_code(&mut self) -> Option<Segment> {
        let pos = self.pos;
        if let Some(open_len) = self.profile.line_comment_at(self.bytes, pos) {
            return self.open_comment(Mode::LineComment, open_len);
        }
        if let Some(block) = self.profile.block_comment_at(&self.bytes[pos..]) {
            return self.open_comment(Mode::BlockComment(*block), block.open.len());
        }

        let byte = self.bytes[pos];
        if is_whitespace(byte) {
            self.pos += 1;
            return None;
        }
        if self.profile.is_quote(byte) {
            self.pos += 1;
            self.mode = if self.profile.opens_template(byte) {
                Mode::TemplateLiteral
            } else {
                Mode::StringLiteral(byte)
            };
            return None;
        }
        if byte == SLASH && self.profile.regex_literals && self.last_token.allows_regex() {
            self.pos += 1;
            self.mode = Mode::RegexLiteral { in_class: false };
            return None;
        }
        if is_identifier_part(byte) {
            self.scan_word();
            return None;
        }

        self.pos += 1;
        self.last_token = match byte {
            OPEN_PAREN | OPEN_BRACKET => TokenClass::OpenBracket,
            OPEN_BRACE => {
                if let Some(frame) = self.interpolations.last_mut() {
                    frame.brace_depth += 1;
                }
                TokenClass::OpenBracket
            }
            CLOSE_PAREN | CLOSE_BRACKET => TokenClass::CloseBracket,
            CLOSE_BRACE => {
                match self.interpolations.last().map(|frame| frame.brace_depth) {
                    Some(0) => {
                        // Closes `${`: back to the template text.
                        self.interpolations.pop();
                        self.mode = Mode::TemplateLiteral;
                        return None;
                    }
                    Some(_) => {
                        if let Some(frame) = self.interpolations.last_mut() {
                            frame.brace_depth -= 1;
                        }
                    }
                    None => {}
                }
                TokenClass::CloseBracket
            }
            LESS_THAN => TokenClass::LessThan,
            _ => TokenClass::Operator,
        };
        None
    }

    /// Consume an identifier, keyword, or number.
    fn scan_word(&mut self) {
        let start = self.pos;
        let end = self.bytes[start..]
            .iter()
            .position(|&b| !is_identifier_part(b))
            .map_or(self.bytes.len(), |offset| start + offset);
        self.pos = end;

        let word = &self.bytes[start..end];
        self.last_token = if word[0].is_ascii_digit() {
            TokenClass::Literal
        } else if is_regex_preceding_keyword(word) {
            TokenClass::Keyword
        } else {
            TokenClass::Identifier
        };
    }

    fn step_string(&mut self, quote: u8) {
        let rest = &self.bytes[self.pos..];
        match memchr2(quote, BACKSLASH, rest) {
            None => self.pos = self.bytes.len(),
            Some(offset) => {
                let at = self.pos + offset;
                if self.bytes[at] == BACKSLASH {
                    self.skip_escape(at);
                } else {
                    self.pos = at + 1;
                    self.mode = Mode::Code;
                    self.last_token = TokenClass::Literal;
                }
            }
        }
    }

    fn step_template(&mut self) {
        let rest = &self.bytes[self.pos..];
        let Some(offset) = memchr3(BACKTICK, BACKSLASH, DOLLAR, rest) else {
            self.pos = self.bytes.len();
            return;
        };
        let at = self.pos + offset;
        match self.bytes[at] {
            BACKSLASH => self.skip_escape(at),
            BACKTICK => {
                self.pos = at + 1;
                self.mode = Mode::Code;
                self.last_token = TokenClass::Literal;
            }
            _ => {
                if self.bytes.get(at + 1) == Some(&OPEN_BRACE) {
                    self.pos = at + 2;
                    self.interpolations.push(InterpolationFrame::default());
                    self.mode = Mode::Code;
                    self.last_token = TokenClass::OpenBracket;
                } else {
                    self.pos = at + 1;
                }
            }
        }
    }

    fn step_regex(&mut self, in_class: bool) {
        let rest = &self.bytes[self.pos..];
        let found = if in_class {
            memchr2(CLOSE_BRACKET, BACKSLASH, rest)
        } else {
            memchr3(SLASH, BACKSLASH, OPEN_BRACKET, rest)
        };
        let Some(offset) = found else {
            self.pos = self.bytes.len();
            return;
        };
        let at = self.pos + offset;
        match self.bytes[at] {
            BACKSLASH => self.skip_escape(at),
            OPEN_BRACKET => {
                self.pos = at + 1;
                self.mode = Mode::RegexLiteral { in_class: true };
            }
            CLOSE_BRACKET => {
                self.pos = at + 1;
                self.mode = Mode::RegexLiteral { in_class: false };
            }
            _ => {
                let flags = self.bytes[at + 1..]
                    .iter()
                    .take_while(|&&b| is_regex_flag(b))
                    .count();
                self.pos = at + 1 + flags;
                self.mode = Mode::Code;
                self.last_token = TokenClass::Literal;
            }
        }
    }

    fn finish_line_comment(&mut self) -> Segment {
        let rest = &self.bytes[self.pos..];
        let end = memchr2(LINE_FEED, CARRIAGE_RETURN, rest).map_or(self.bytes.len(), |i| self.pos + i);
        self.close_comment(end, CommentKind::Line, true)
    }

    fn finish_block_comment(&mut self, block: BlockComment) -> Segment {
        let rest = &self.bytes[self.pos..];
        let close = block.close.as_bytes();
        let found = if close.len() == 1 {
            memchr(close[0], rest)
        } else {
            memmem::find(rest, close)
        };
        match found {
            Some(offset) => self.close_comment(self.pos + offset + close.len(), block.kind, true),
            None => self.close_comment(self.bytes.len(), block.kind, false),
        }
    }
}

impl Iterator for Scanner<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        loop {
            let at_end = self.pos >= self.bytes.len();
            match self.mode {
                Mode::LineComment => return Some(self.finish_line_comment()),
                Mode::BlockComment(block) => return Some(self.finish_block_comment(block)),
                _ if at_end => return self.flush_to(self.bytes.len()),
                Mode::Code => {
                    if let Some(segment) = self.step_code() {
                        return Some(segment);
                    }
                }
                Mode::StringLiteral(quote) => self.step_string(quote),
                Mode::TemplateLiteral => self.step_template(),
                Mode::RegexLiteral { in_class } => self.step_regex(in_class),
            }
        }
    }
}
