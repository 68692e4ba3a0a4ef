use colored::Colorize;
use serde::Serialize;
use std::path::Path;

use decomment_scanner::CommentRange;

/// Formats status lines and comment listings.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn processing(&self, count: usize) -> String {
        format!("Processing {count} file(s)...")
    }

    pub fn processed(&self, path: &Path) -> String {
        let mark = if self.color {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        };
        format!("{mark} Processed: {}", path.display())
    }

    pub fn failed(&self, path: &Path, reason: &str) -> String {
        let mark = if self.color {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        };
        format!("{mark} Error processing {}: {reason}", path.display())
    }

    pub fn completed(&self, processed: usize) -> String {
        format!("\nCompleted: {processed} files processed successfully")
    }

    pub fn errors(&self, failed: usize) -> String {
        let line = format!("Errors: {failed} files failed to process");
        if self.color {
            line.red().to_string()
        } else {
            line
        }
    }

    pub fn pattern_error(&self, pattern: &str, message: &str) -> String {
        format!("Error processing pattern \"{pattern}\": {message}")
    }

    pub fn no_files(&self) -> &'static str {
        "No files found matching the specified patterns."
    }

    /// One `path:line:col: kind` line per comment.
    pub fn render_comments(&self, path: &Path, source: &str, comments: &[CommentRange]) -> String {
        let line_map = LineMap::new(source);
        let mut out = String::new();
        for comment in comments {
            let (line, column) = line_map.position(source, comment.pos);
            let location = format!("{}:{line}:{column}", path.display());
            let location = if self.color {
                location.cyan().to_string()
            } else {
                location
            };
            out.push_str(&location);
            out.push_str(": ");
            out.push_str(comment.kind.as_str());
            if !comment.terminated {
                out.push_str(" (unterminated)");
            }
            out.push('\n');
        }
        out
    }

    /// One JSON object per comment, newline-delimited.
    pub fn render_comments_json(
        &self,
        path: &Path,
        source: &str,
        comments: &[CommentRange],
    ) -> serde_json::Result<String> {
        let line_map = LineMap::new(source);
        let mut out = String::new();
        for comment in comments {
            let (line, column) = line_map.position(source, comment.pos);
            let record = CommentRecord {
                path: path.to_string_lossy().into_owned(),
                line,
                column,
                range: comment,
            };
            out.push_str(&serde_json::to_string(&record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

#[derive(Serialize)]
struct CommentRecord<'a> {
    path: String,
    line: usize,
    column: usize,
    #[serde(flatten)]
    range: &'a CommentRange,
}

/// Byte offsets of line starts. `\n`, `\r\n`, and a lone `\r` each end a line.
struct LineMap {
    line_starts: Vec<usize>,
}

impl LineMap {
    fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        for (i, &byte) in bytes.iter().enumerate() {
            let ends_line = byte == b'\n' || (byte == b'\r' && bytes.get(i + 1) != Some(&b'\n'));
            if ends_line {
                line_starts.push(i + 1);
            }
        }
        LineMap { line_starts }
    }

    /// 1-based line and character column of byte offset `pos`.
    fn position(&self, source: &str, pos: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= pos);
        let line_start = self.line_starts[line - 1];
        let column = source
            .get(line_start..pos)
            .map_or(1, |prefix| prefix.chars().count() + 1);
        (line, column)
    }
}
