//! Expansion of command-line patterns into the list of files to process.
//!
//! A pattern without glob metacharacters names a single file. Anything else
//! is split into a literal base directory and a glob for the remainder; the
//! base is walked and every file whose path below it matches is kept.
//! Matching follows shell conventions: `*` and `?` never cross a `/`, only
//! `**` does, and hidden entries are not descended into.

use globset::GlobBuilder;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::ResolvedConfig;

/// Result of expanding every pattern.
#[derive(Debug, Default)]
pub struct Expansion {
    /// Matching files in first-seen order, without duplicates. Paths keep the
    /// form of the pattern that produced them (relative patterns yield paths
    /// relative to the working directory).
    pub files: Vec<PathBuf>,
    /// Patterns that could not be processed, with the reason.
    pub errors: Vec<PatternError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternError {
    pub pattern: String,
    pub message: String,
}

pub fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

fn normalize_pattern(pattern: &str) -> &str {
    let mut pattern = pattern;
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// Split a glob into its literal leading directories and the glob remainder.
fn split_base(pattern: &str) -> (PathBuf, String) {
    let parts: Vec<&str> = pattern.split('/').collect();
    let literal = parts[..parts.len() - 1]
        .iter()
        .take_while(|part| !has_glob_meta(part))
        .count();

    let mut base = parts[..literal].join("/");
    if base.is_empty() && pattern.starts_with('/') {
        base.push('/');
    }
    (PathBuf::from(base), parts[literal..].join("/"))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn resolve_in(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Expand one pattern into `files`.
fn expand_pattern(pattern: &str, cwd: &Path, files: &mut Vec<PathBuf>) -> Result<(), String> {
    let pattern = normalize_pattern(pattern);

    if !has_glob_meta(pattern) {
        let path = PathBuf::from(pattern);
        // A missing path matches nothing; directories are never returned.
        if resolve_in(cwd, &path).is_file() {
            files.push(path);
        }
        return Ok(());
    }

    let (base, remainder) = split_base(pattern);
    let matcher = GlobBuilder::new(&remainder)
        .literal_separator(true)
        .build()
        .map_err(|err| err.kind().to_string())?
        .compile_matcher();

    let root = resolve_in(cwd, &base);
    if !root.is_dir() {
        return Ok(());
    }

    let mut walker = WalkDir::new(&root).sort_by_file_name();
    if !remainder.contains("**") {
        walker = walker.max_depth(remainder.split('/').count());
    }

    for entry in walker.into_iter().filter_entry(|entry| !is_hidden(entry)) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(pattern, error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(&root) else {
            continue;
        };
        if matcher.is_match(relative) {
            files.push(base.join(relative));
        }
    }

    Ok(())
}

/// Expand every pattern, drop excluded files, and de-duplicate.
///
/// A pattern that fails to compile is reported in `errors` and contributes
/// no files; the remaining patterns are still expanded.
pub fn expand_patterns(patterns: &[String], cwd: &Path, config: &ResolvedConfig) -> Expansion {
    let mut seen = IndexSet::new();
    let mut errors = Vec::new();

    for pattern in patterns {
        let mut files = Vec::new();
        if let Err(message) = expand_pattern(pattern, cwd, &mut files) {
            tracing::warn!(pattern = pattern.as_str(), %message, "invalid pattern");
            errors.push(PatternError {
                pattern: pattern.clone(),
                message,
            });
            continue;
        }
        tracing::debug!(pattern = pattern.as_str(), matches = files.len(), "expanded pattern");
        seen.extend(files.into_iter().filter(|file| !config.is_excluded(file)));
    }

    Expansion {
        files: seen.into_iter().collect(),
        errors,
    }
}
