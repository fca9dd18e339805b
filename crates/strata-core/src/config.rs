//! Pipeline configuration.
//!
//! Every path is supplied by the caller. A YAML file may carry any subset of
//! the fields; command-line overrides are layered on top with
//! [`ConfigFile::merge`] before [`ConfigFile::resolve`] validates the result.

use crate::error::{StrataError, StrataResult};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Extension scanned when none is configured.
pub const DEFAULT_EXTENSION: &str = "py";
pub const DEFAULT_TOP_N: usize = 20;

/// Fully resolved settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub corpus_root: PathBuf,
    pub output: PathBuf,
    /// Extension filter without the leading dot.
    pub extension: String,
    pub top_n: usize,
    /// Embed a `generated_at` timestamp in the report.
    pub stamp: bool,
}

impl AnalyzerConfig {
    /// Defaults for everything except the two paths.
    pub fn new(corpus_root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            corpus_root: corpus_root.into(),
            output: output.into(),
            extension: DEFAULT_EXTENSION.into(),
            top_n: DEFAULT_TOP_N,
            stamp: false,
        }
    }

    /// Leading dot and surrounding whitespace are dropped.
    pub fn with_extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = normalize_extension(extension.as_ref());
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_stamp(mut self, stamp: bool) -> Self {
        self.stamp = stamp;
        self
    }

    /// Reject an empty extension or a `top_n` of zero.
    ///
    /// [`run_pipeline`](crate::run_pipeline) calls this again, so configs
    /// built by hand are checked as well as those from [`ConfigFile::resolve`].
    pub fn validate(&self) -> StrataResult<()> {
        if self.extension.is_empty() {
            return Err(StrataError::config("extension must not be empty"));
        }
        if self.top_n == 0 {
            return Err(StrataError::config("top_n must be at least 1"));
        }
        Ok(())
    }
}

/// Partial configuration as read from disk or assembled from flags.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub corpus_root: Option<PathBuf>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub extension: Option<String>,
    #[serde(default)]
    pub top_n: Option<usize>,
    #[serde(default)]
    pub stamp: Option<bool>,
}

impl ConfigFile {
    /// Read and parse a YAML file. Any failure is a config error naming the path.
    pub fn load(path: &Path) -> StrataResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StrataError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
            .map_err(|e| StrataError::config(format!("invalid config {}: {e}", path.display())))
    }

    /// Blank input is an empty config.
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Fields set in `overrides` win.
    pub fn merge(self, overrides: ConfigFile) -> Self {
        Self {
            corpus_root: overrides.corpus_root.or(self.corpus_root),
            output: overrides.output.or(self.output),
            extension: overrides.extension.or(self.extension),
            top_n: overrides.top_n.or(self.top_n),
            stamp: overrides.stamp.or(self.stamp),
        }
    }

    /// Apply defaults, require both paths and validate.
    pub fn resolve(self) -> StrataResult<AnalyzerConfig> {
        let corpus_root = self
            .corpus_root
            .ok_or_else(|| StrataError::config("corpus root is required (--corpus)"))?;
        let output = self
            .output
            .ok_or_else(|| StrataError::config("output path is required (--output)"))?;

        let mut cfg = AnalyzerConfig::new(corpus_root, output);
        if let Some(ext) = self.extension {
            cfg = cfg.with_extension(ext);
        }
        if let Some(n) = self.top_n {
            cfg = cfg.with_top_n(n);
        }
        if let Some(stamp) = self.stamp {
            cfg = cfg.with_stamp(stamp);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

pub(crate) fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_string()
}
