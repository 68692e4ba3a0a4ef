//! Logging for the decomment binary.
//!
//! Logging is off unless `DECOMMENT_LOG` (or `RUST_LOG`) holds a filter
//! directive. `DECOMMENT_LOG_FORMAT` picks the layer:
//!
//! - `text` (default): one line per event
//! - `tree`: spans nested per file, tagged with the rayon worker thread
//! - `json`: newline-delimited objects for log tooling
//!
//! ```bash
//! DECOMMENT_LOG=debug decomment -w 'src/**/*.js'
//! DECOMMENT_LOG=decomment_scanner=trace DECOMMENT_LOG_FORMAT=tree decomment app.js
//! ```
//!
//! Every layer writes to stderr; stdout belongs to cleaned text and listings.

use std::io::IsTerminal;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "DECOMMENT_LOG";
const LOG_FORMAT_ENV: &str = "DECOMMENT_LOG_FORMAT";
const FALLBACK_LOG_ENV: &str = "RUST_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unrecognized values select `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// What the environment asks for, before any subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Read settings through `lookup`. `DECOMMENT_LOG` wins over `RUST_LOG`;
    /// `None` when neither is set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let directives = lookup(LOG_ENV).or_else(|| lookup(FALLBACK_LOG_ENV))?;
        let format = lookup(LOG_FORMAT_ENV).map_or(LogFormat::Text, |value| LogFormat::parse(&value));
        Some(LogSettings { directives, format })
    }

    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

/// Install the global subscriber if logging was requested.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let ansi = std::io::stderr().is_terminal();
    let filter = settings.filter();

    match settings.format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::new(2)
                .with_ansi(ansi)
                .with_indent_lines(true)
                .with_thread_ids(true)
                .with_bracketed_fields(true)
                .with_verbose_exit(false);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            let text_layer = fmt::layer()
                .with_ansi(ansi)
                .with_thread_ids(true)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).init();
        }
    }
}
