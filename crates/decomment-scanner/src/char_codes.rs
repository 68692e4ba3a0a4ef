//! Byte classification for the comment scanner.
//!
//! Every delimiter the scanner recognizes is ASCII, so classification works
//! directly on UTF-8 bytes. Bytes at or above `0x80` belong to multi-byte
//! sequences; they are never delimiters and are treated as identifier parts.

pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const BACKSLASH: u8 = b'\\';
pub const SLASH: u8 = b'/';
pub const BACKTICK: u8 = b'`';
pub const DOLLAR: u8 = b'$';
pub const OPEN_BRACE: u8 = b'{';
pub const CLOSE_BRACE: u8 = b'}';
pub const OPEN_BRACKET: u8 = b'[';
pub const CLOSE_BRACKET: u8 = b']';
pub const OPEN_PAREN: u8 = b'(';
pub const CLOSE_PAREN: u8 = b')';
pub const LESS_THAN: u8 = b'<';

/// Check if a byte terminates a line (`\n`, or `\r` alone or before `\n`).
#[inline]
pub fn is_line_break(byte: u8) -> bool {
    byte == LINE_FEED || byte == CARRIAGE_RETURN
}

/// Check if a byte is ASCII whitespace, line breaks included.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\x0B' | b'\x0C') || is_line_break(byte)
}

/// Check if a byte can appear inside an identifier, keyword, or number.
#[inline]
pub fn is_identifier_part(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == DOLLAR || byte >= 0x80
}

/// Check if a byte is a regular-expression flag letter (`g`, `i`, `m`, ...).
#[inline]
pub fn is_regex_flag(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Keywords after which an expression (and so a regex literal) may start.
///
/// `x = typeof /re/` and `return /re/.test(s)` open regex literals even though
/// the previous token is a word.
pub fn is_regex_preceding_keyword(word: &[u8]) -> bool {
    matches!(
        word,
        b"return"
            | b"typeof"
            | b"instanceof"
            | b"in"
            | b"of"
            | b"new"
            | b"delete"
            | b"void"
            | b"throw"
            | b"case"
            | b"do"
            | b"else"
            | b"yield"
            | b"await"
    )
}
