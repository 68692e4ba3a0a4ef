use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use decomment_scanner::Language;

/// CLI arguments for the decomment binary.
#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    version,
    about = "A CLI tool to remove comments from source code files"
)]
pub struct CliArgs {
    // ==================== Output ====================
    /// Overwrite files in-place.
    #[arg(short = 'w', long, conflicts_with = "out")]
    pub write: bool,

    /// Write cleaned files to the specified directory.
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Print the comments that would be removed instead of stripping them.
    #[arg(long = "list-comments", alias = "listComments")]
    pub list_comments: bool,

    /// Emit `--list-comments` output as one JSON object per line.
    #[arg(long, requires = "list_comments")]
    pub json: bool,

    /// Enable colored status output (defaults to whether stderr is a terminal).
    #[arg(long)]
    pub pretty: Option<bool>,

    // ==================== Input ====================
    /// Treat every file as this language family instead of detecting it from the extension.
    #[arg(long, value_enum, ignore_case = true)]
    pub lang: Option<LangArg>,

    /// Path to a decomment.json config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of files processed in parallel (defaults to the number of CPUs).
    #[arg(short = 'j', long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Glob pattern(s) of files to decomment.
    #[arg(value_name = "GLOB", required = true)]
    pub patterns: Vec<String>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum LangArg {
    #[value(name = "c-like", alias = "c", alias = "js", alias = "ts")]
    CLike,
    Css,
    #[value(alias = "html", alias = "xml")]
    Markup,
    #[value(alias = "sh", alias = "shell", alias = "yaml")]
    Hash,
    #[value(alias = "py", alias = "python", alias = "rb", alias = "toml")]
    Script,
}

impl LangArg {
    pub fn to_language(self) -> Language {
        match self {
            LangArg::CLike => Language::CLike,
            LangArg::Css => Language::Css,
            LangArg::Markup => Language::Markup,
            LangArg::Hash => Language::Hash,
            LangArg::Script => Language::Script,
        }
    }
}
