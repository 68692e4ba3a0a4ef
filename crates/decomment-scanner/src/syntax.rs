//! Language syntax profiles.
//!
//! A `SyntaxProfile` describes which comment and literal forms the scanner
//! recognizes. Profiles are `'static` and read-only, so one profile is shared
//! by every scan (and every thread) that uses it. `Language` is the closed set
//! of profile families; file extensions map onto it, and anything unknown
//! falls back to the C-like family.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::char_codes::{is_whitespace, BACKTICK};
use crate::comments::CommentKind;

/// An open/close delimiter pair for a comment that may span lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockComment {
    pub open: &'static str,
    pub close: &'static str,
    pub kind: CommentKind,
}

/// The comment and literal forms recognized for one family of languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntaxProfile {
    /// Prefix of a comment that runs to the end of the line.
    pub line_comment: Option<&'static str>,
    /// When set, the line comment prefix only counts at the start of a word
    /// (buffer start or after whitespace), as in shell `$#` or `url#frag`.
    pub line_comment_at_word_start: bool,
    pub block_comments: &'static [BlockComment],
    /// Quote bytes that open string literals. A backtick opens a template
    /// literal instead when `template_literals` is set.
    pub string_quotes: &'static [u8],
    pub template_literals: bool,
    pub regex_literals: bool,
    /// Keep a leading `#!` line verbatim.
    pub keeps_shebang: bool,
}

const C_BLOCK: BlockComment = BlockComment {
    open: "/*",
    close: "*/",
    kind: CommentKind::Block,
};

const MARKUP_BLOCK: BlockComment = BlockComment {
    open: "<!--",
    close: "-->",
    kind: CommentKind::Markup,
};

/// `//` and `/* */` comments, single/double/backtick strings, regex literals.
pub static C_LIKE: SyntaxProfile = SyntaxProfile {
    line_comment: Some("//"),
    line_comment_at_word_start: false,
    block_comments: &[C_BLOCK],
    string_quotes: b"\"'`",
    template_literals: true,
    regex_literals: true,
    keeps_shebang: true,
};

/// `/* */` comments only; strings protect their contents.
pub static CSS: SyntaxProfile = SyntaxProfile {
    line_comment: None,
    line_comment_at_word_start: false,
    block_comments: &[C_BLOCK],
    string_quotes: b"\"'",
    template_literals: false,
    regex_literals: false,
    keeps_shebang: false,
};

/// `<!-- -->` comments only.
pub static MARKUP: SyntaxProfile = SyntaxProfile {
    line_comment: None,
    line_comment_at_word_start: false,
    block_comments: &[MARKUP_BLOCK],
    string_quotes: b"",
    template_literals: false,
    regex_literals: false,
    keeps_shebang: false,
};

/// `#` line comments at word start (shell, YAML, Perl, config files).
pub static HASH: SyntaxProfile = SyntaxProfile {
    line_comment: Some("#"),
    line_comment_at_word_start: true,
    block_comments: &[],
    string_quotes: b"\"'",
    template_literals: false,
    regex_literals: false,
    keeps_shebang: true,
};

/// `#` line comments anywhere outside a string (Python, Ruby, TOML, R).
pub static SCRIPT: SyntaxProfile = SyntaxProfile {
    line_comment: Some("#"),
    line_comment_at_word_start: false,
    block_comments: &[],
    string_quotes: b"\"'",
    template_literals: false,
    regex_literals: false,
    keeps_shebang: true,
};

impl SyntaxProfile {
    /// Length of the line comment prefix if one starts at `pos`.
    #[inline]
    pub fn line_comment_at(&self, bytes: &[u8], pos: usize) -> Option<usize> {
        let prefix = self.line_comment?.as_bytes();
        if !bytes[pos..].starts_with(prefix) {
            return None;
        }
        if self.line_comment_at_word_start && pos > 0 && !is_whitespace(bytes[pos - 1]) {
            return None;
        }
        Some(prefix.len())
    }

    /// The block comment form whose open sequence starts at `rest`.
    #[inline]
    pub fn block_comment_at(&self, rest: &[u8]) -> Option<&'static BlockComment> {
        self.block_comments
            .iter()
            .find(|block| rest.starts_with(block.open.as_bytes()))
    }

    #[inline]
    pub fn is_quote(&self, byte: u8) -> bool {
        self.string_quotes.contains(&byte)
    }

    #[inline]
    pub fn opens_template(&self, byte: u8) -> bool {
        byte == BACKTICK && self.template_literals
    }
}

/// Closed set of profile families.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    /// JavaScript, TypeScript, C, C++, Java, Go, Rust, ...
    #[default]
    #[serde(alias = "c", alias = "js", alias = "javascript", alias = "typescript")]
    CLike,
    Css,
    #[serde(alias = "html", alias = "xml")]
    Markup,
    #[serde(alias = "shell", alias = "sh", alias = "yaml")]
    Hash,
    #[serde(alias = "python", alias = "py", alias = "ruby", alias = "toml")]
    Script,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::CLike,
        Language::Css,
        Language::Markup,
        Language::Hash,
        Language::Script,
    ];

    pub fn profile(self) -> &'static SyntaxProfile {
        match self {
            Language::CLike => &C_LIKE,
            Language::Css => &CSS,
            Language::Markup => &MARKUP,
            Language::Hash => &HASH,
            Language::Script => &SCRIPT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::CLike => "c-like",
            Language::Css => "css",
            Language::Markup => "markup",
            Language::Hash => "hash",
            Language::Script => "script",
        }
    }

    /// Pick the profile family for a file extension.
    ///
    /// Matching is case-insensitive and tolerates a leading dot. Unknown
    /// extensions fall back to `CLike`.
    pub fn from_extension(extension: &str) -> Language {
        let extension = extension.trim_start_matches('.').to_ascii_lowercase();
        match extension.as_str() {
            "css" => Language::Css,
            "html" | "htm" | "xhtml" | "xml" | "svg" | "md" | "markdown" => Language::Markup,
            "sh" | "bash" | "zsh" | "fish" | "pl" | "pm" | "ps1" | "yaml" | "yml" | "conf"
            | "cfg" | "ini" | "mk" | "cmake" => Language::Hash,
            "py" | "pyw" | "rb" | "toml" | "r" => Language::Script,
            _ => Language::CLike,
        }
    }

    /// Pick the profile family for a path.
    ///
    /// A few well-known extensionless file names map to the `#` families.
    pub fn from_path(path: &Path) -> Language {
        if let Some(extension) = path.extension().and_then(|ext| ext.to_str()) {
            return Language::from_extension(extension);
        }
        match path.file_name().and_then(|name| name.to_str()) {
            Some("Dockerfile" | "Makefile" | "makefile") => Language::Hash,
            Some("Gemfile" | "Rakefile") => Language::Script,
            _ => Language::CLike,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
