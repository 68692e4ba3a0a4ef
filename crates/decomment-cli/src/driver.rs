//! Run driver: expands patterns, strips every file in parallel, and routes
//! results to stdout, files in place, or an output directory.
//!
//! Files are independent, so each one is processed on the rayon pool with its
//! own scanner. Reports are collected in input order and written afterwards,
//! which keeps console output deterministic regardless of scheduling.

use anyhow::{Context, Result, anyhow};
use rayon::prelude::*;
use std::io::{IsTerminal, Write};
use std::path::{Component, Path, PathBuf};

use decomment_scanner::{comment_ranges, strip_with_stats};

use crate::args::{CliArgs, LangArg};
use crate::config::ResolvedConfig;
use crate::reporter::Reporter;
use crate::sources::expand_patterns;

/// Where cleaned text goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Concatenate cleaned text on stdout.
    Console,
    /// Overwrite each input file.
    InPlace,
    /// Write under this root, mirroring the input path.
    OutDir(PathBuf),
}

impl OutputMode {
    pub fn from_args(args: &CliArgs, cwd: &Path) -> Self {
        if args.write {
            OutputMode::InPlace
        } else if let Some(out) = &args.out {
            OutputMode::OutDir(resolve_in(cwd, out))
        } else {
            OutputMode::Console
        }
    }

    pub fn writes_files(&self) -> bool {
        !matches!(self, OutputMode::Console)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Processed {
        comments_removed: usize,
        bytes_removed: usize,
        /// File written, if any.
        target: Option<PathBuf>,
    },
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: FileOutcome,
    /// Text destined for stdout (console mode or comment listings).
    pub output: Option<String>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub processed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn exit_code(&self) -> i32 {
        if self.failed > 0 { 1 } else { 0 }
    }
}

#[derive(Debug, Clone)]
enum Action {
    Strip(OutputMode),
    ListComments { json: bool },
}

/// Shared, read-only state for the worker pool.
struct Job<'a> {
    cwd: &'a Path,
    config: &'a ResolvedConfig,
    reporter: &'a Reporter,
    action: &'a Action,
}

fn resolve_in(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Path of `path` below an output root: relative to `cwd` when the input
/// lives under it, otherwise just the file name.
pub fn mirrored_path(path: &Path, cwd: &Path) -> PathBuf {
    let absolute = resolve_in(cwd, path);
    if let Ok(relative) = absolute.strip_prefix(cwd) {
        let inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if inside && relative.components().next().is_some() {
            return relative.to_path_buf();
        }
    }
    absolute
        .file_name()
        .map_or_else(|| relative_fallback(path), PathBuf::from)
}

fn relative_fallback(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| matches!(component, Component::Normal(_)))
        .collect()
}

fn process_file(path: &Path, job: &Job<'_>) -> FileReport {
    match try_process_file(path, job) {
        Ok(report) => report,
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "file failed");
            FileReport {
                path: path.to_path_buf(),
                outcome: FileOutcome::Failed(format!("{err:#}")),
                output: None,
            }
        }
    }
}

fn try_process_file(path: &Path, job: &Job<'_>) -> Result<FileReport> {
    let full_path = resolve_in(job.cwd, path);
    let bytes = std::fs::read(&full_path).context("failed to read file")?;
    let source = String::from_utf8(bytes).map_err(|_| anyhow!("file is not valid UTF-8"))?;
    let language = job.config.language_for(path);
    let profile = language.profile();

    let mode = match job.action {
        Action::ListComments { json } => {
            let comments = comment_ranges(&source, profile);
            let output = if *json {
                job.reporter
                    .render_comments_json(path, &source, &comments)
                    .context("failed to serialize comments")?
            } else {
                job.reporter.render_comments(path, &source, &comments)
            };
            return Ok(FileReport {
                path: path.to_path_buf(),
                outcome: FileOutcome::Processed {
                    comments_removed: 0,
                    bytes_removed: 0,
                    target: None,
                },
                output: Some(output),
            });
        }
        Action::Strip(mode) => mode,
    };

    let stripped = strip_with_stats(&source, profile);
    tracing::debug!(
        path = %path.display(),
        %language,
        comments = stripped.comments_removed,
        bytes = stripped.bytes_removed,
        "stripped file"
    );

    let (target, output) = match mode {
        OutputMode::Console => (None, Some(stripped.text)),
        OutputMode::InPlace => {
            std::fs::write(&full_path, &stripped.text).context("failed to write file")?;
            (Some(full_path), None)
        }
        OutputMode::OutDir(root) => {
            let target = root.join(mirrored_path(path, job.cwd));
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create directory {}", parent.display()))?;
            }
            std::fs::write(&target, &stripped.text)
                .with_context(|| format!("failed to write {}", target.display()))?;
            (Some(target), None)
        }
    };

    Ok(FileReport {
        path: path.to_path_buf(),
        outcome: FileOutcome::Processed {
            comments_removed: stripped.comments_removed,
            bytes_removed: stripped.bytes_removed,
            target,
        },
        output,
    })
}

fn process_files(files: &[PathBuf], job: &Job<'_>, jobs: Option<usize>) -> Result<Vec<FileReport>> {
    let process = || {
        files
            .par_iter()
            .map(|path| process_file(path, job))
            .collect::<Vec<_>>()
    };

    match jobs {
        Some(jobs) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(jobs)
                .build()
                .context("failed to build worker pool")?;
            Ok(pool.install(process))
        }
        None => Ok(process()),
    }
}

/// Execute one invocation.
///
/// Per-file failures are reported and counted, never propagated; the
/// returned error is reserved for configuration problems and failures to
/// write to `stdout`/`stderr`.
pub fn run(
    args: &CliArgs,
    cwd: &Path,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> Result<RunSummary> {
    let forced_language = args.lang.map(LangArg::to_language);
    let config = ResolvedConfig::load(cwd, args.config.as_deref(), forced_language)?;
    let color = args
        .pretty
        .unwrap_or_else(|| std::io::stderr().is_terminal());
    let reporter = Reporter::new(color);

    let expansion = expand_patterns(&args.patterns, cwd, &config);
    for error in &expansion.errors {
        writeln!(stderr, "{}", reporter.pattern_error(&error.pattern, &error.message))?;
    }

    if expansion.files.is_empty() {
        writeln!(stdout, "{}", reporter.no_files())?;
        return Ok(RunSummary::default());
    }

    let action = if args.list_comments {
        Action::ListComments { json: args.json }
    } else {
        Action::Strip(OutputMode::from_args(args, cwd))
    };
    // Status lines share stdout only when stdout carries no file contents.
    let status_to_stdout = matches!(&action, Action::Strip(mode) if mode.writes_files());

    let processing = reporter.processing(expansion.files.len());
    if status_to_stdout {
        writeln!(stdout, "{processing}")?;
    } else {
        writeln!(stderr, "{processing}")?;
    }

    let job = Job {
        cwd,
        config: &config,
        reporter: &reporter,
        action: &action,
    };
    let reports = process_files(&expansion.files, &job, args.jobs)?;

    let mut summary = RunSummary {
        files: reports.len(),
        ..RunSummary::default()
    };
    for report in &reports {
        match &report.outcome {
            FileOutcome::Processed { .. } => {
                summary.processed += 1;
                if let Some(output) = &report.output {
                    stdout.write_all(output.as_bytes())?;
                }
                if status_to_stdout {
                    writeln!(stdout, "{}", reporter.processed(&report.path))?;
                }
            }
            FileOutcome::Failed(reason) => {
                summary.failed += 1;
                writeln!(stderr, "{}", reporter.failed(&report.path, reason))?;
            }
        }
    }

    if status_to_stdout {
        writeln!(stdout, "{}", reporter.completed(summary.processed))?;
        if summary.failed > 0 {
            writeln!(stdout, "{}", reporter.errors(summary.failed))?;
        }
    }
    stdout.flush()?;

    tracing::info!(
        files = summary.files,
        processed = summary.processed,
        failed = summary.failed,
        "run finished"
    );
    Ok(summary)
}
