use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use decomment_scanner::Language;

pub const CONFIG_FILE_NAME: &str = "decomment.json";

/// Contents of a `decomment.json` file.
///
/// ```json
/// {
///   "extensions": { "vue": "markup", "jsonc": "c-like" },
///   "exclude": ["**/node_modules/**"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DecommentConfig {
    /// Extension (without the dot) to language family overrides.
    #[serde(default)]
    pub extensions: FxHashMap<String, Language>,
    /// Globs of files to skip, matched against the path as expanded.
    #[serde(default)]
    pub exclude: Vec<String>,
}

pub fn parse_config(source: &str) -> Result<DecommentConfig> {
    let config = serde_json::from_str(source)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<DecommentConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

pub(crate) fn find_config(cwd: &Path) -> Option<PathBuf> {
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Locate the config file: an explicit `--config` path (a file, or a
/// directory containing `decomment.json`), else `decomment.json` in `cwd`.
pub fn resolve_config_path(cwd: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(explicit) = explicit else {
        return Ok(find_config(cwd));
    };

    let mut candidate = if explicit.is_absolute() {
        explicit.to_path_buf()
    } else {
        cwd.join(explicit)
    };

    if candidate.is_dir() {
        candidate = candidate.join(CONFIG_FILE_NAME);
    }

    if !candidate.is_file() {
        bail!("config not found at {}", candidate.display());
    }

    Ok(Some(candidate))
}

/// Configuration after merging the config file with command-line overrides.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// `--lang`: applies to every file.
    pub forced_language: Option<Language>,
    /// Lowercased extension overrides.
    pub extensions: FxHashMap<String, Language>,
    pub exclude: GlobSet,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        ResolvedConfig {
            forced_language: None,
            extensions: FxHashMap::default(),
            exclude: GlobSet::empty(),
        }
    }
}

impl ResolvedConfig {
    pub fn resolve(config: DecommentConfig, forced_language: Option<Language>) -> Result<Self> {
        let extensions = config
            .extensions
            .into_iter()
            .map(|(extension, language)| {
                (
                    extension.trim_start_matches('.').to_ascii_lowercase(),
                    language,
                )
            })
            .collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern)
                .with_context(|| format!("invalid exclude pattern \"{pattern}\""))?;
            builder.add(glob);
        }
        let exclude = builder.build().context("failed to compile exclude patterns")?;

        Ok(ResolvedConfig {
            forced_language,
            extensions,
            exclude,
        })
    }

    /// Load the config file (if any) and merge the `--lang` override.
    pub fn load(cwd: &Path, explicit: Option<&Path>, forced_language: Option<Language>) -> Result<Self> {
        let config = match resolve_config_path(cwd, explicit)? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                load_config(&path)?
            }
            None => DecommentConfig::default(),
        };
        ResolvedConfig::resolve(config, forced_language)
    }

    /// The language family used to scan `path`.
    pub fn language_for(&self, path: &Path) -> Language {
        if let Some(language) = self.forced_language {
            return language;
        }
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        if let Some(language) = extension.and_then(|ext| self.extensions.get(&ext).copied()) {
            return language;
        }
        Language::from_path(path)
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        self.exclude.is_match(path)
    }
}
