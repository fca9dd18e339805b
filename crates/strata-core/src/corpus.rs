//! Corpus scanning.
//!
//! A corpus is every regular file with the configured extension directly
//! under one root directory. Entries are ordered by file name so repeated
//! scans of an unchanged directory yield the same sequence.
//!
//! Errors split three ways. A missing root is [`StrataError::CorpusNotFound`],
//! a root that exists but cannot be listed is
//! [`StrataError::CorpusUnreadable`], and a single file that cannot be read
//! is logged at `warn` and counted in [`Corpus::skipped`] without failing
//! the scan.

use crate::config::normalize_extension;
use crate::error::{StrataError, StrataResult};
use std::path::{Path, PathBuf};

/// One scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// File stem; the identifier used in every report bucket.
    pub name: String,
    pub path: PathBuf,
    /// Full UTF-8 text of the file.
    pub content: String,
}

/// Scanned corpus. Immutable once built; every stage of a run reads from
/// the same instance.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    root: PathBuf,
    entries: Vec<CorpusEntry>,
    skipped: usize,
}

impl Corpus {
    /// Scan `root` for files ending in `.{extension}`.
    ///
    /// Files that cannot be read as UTF-8 text are logged and left out.
    pub fn scan(root: &Path, extension: &str) -> StrataResult<Self> {
        let meta = std::fs::metadata(root).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StrataError::CorpusNotFound {
                path: root.to_path_buf(),
            },
            _ => StrataError::CorpusUnreadable {
                path: root.to_path_buf(),
                source: e,
            },
        })?;
        if !meta.is_dir() {
            return Err(StrataError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        let unreadable = |source| StrataError::CorpusUnreadable {
            path: root.to_path_buf(),
            source,
        };

        let extension = normalize_extension(extension);
        let mut paths = Vec::new();
        for dirent in std::fs::read_dir(root).map_err(unreadable)? {
            let dirent = dirent.map_err(unreadable)?;
            let path = dirent.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some(extension.as_str()) {
                paths.push(path);
            }
        }
        paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

        let mut entries = Vec::with_capacity(paths.len());
        let mut skipped = 0;
        for path in paths {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                tracing::warn!(path = %path.display(), "skipping file with non UTF-8 name");
                skipped += 1;
                continue;
            };
            match std::fs::read_to_string(&path) {
                Ok(content) => {
                    tracing::debug!(name = %name, bytes = content.len(), "scanned");
                    entries.push(CorpusEntry {
                        name,
                        path,
                        content,
                    });
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            root = %root.display(),
            files = entries.len(),
            skipped,
            "corpus scanned"
        );

        Ok(Self {
            root: root.to_path_buf(),
            entries,
            skipped,
        })
    }

    /// Build an in-memory corpus from bare names with empty content.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .map(|n| {
                let name = n.into();
                CorpusEntry {
                    path: PathBuf::from(&name),
                    name,
                    content: String::new(),
                }
            })
            .collect();
        Self {
            root: PathBuf::new(),
            entries,
            skipped: 0,
        }
    }

    /// Directory the corpus was scanned from; empty for in-memory corpora.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Entries in file-name order.
    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Identifiers in corpus order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of matching files left out because they could not be read.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Corpus identifier for a file name: the name with a trailing
/// `.{extension}` removed. Any other dot is part of the identifier, so
/// `v1.2_dawn` stays `v1.2_dawn`.
pub fn identifier<'a>(file_name: &'a str, extension: &str) -> &'a str {
    let extension = normalize_extension(extension);
    if extension.is_empty() {
        return file_name;
    }
    match file_name.strip_suffix(extension.as_str()) {
        Some(rest) if rest.len() > 1 && rest.ends_with('.') => &rest[..rest.len() - 1],
        _ => file_name,
    }
}

/// Read one file from the corpus root.
///
/// An exact file name is tried first; otherwise `.{extension}` is appended
/// to the identifier.
pub fn read_sample(root: &Path, file_name: &str, extension: &str) -> StrataResult<String> {
    let extension = normalize_extension(extension);
    let exact = root.join(file_name);
    let path = if exact.is_file() {
        exact
    } else {
        root.join(format!("{}.{extension}", identifier(file_name, &extension)))
    };
    std::fs::read_to_string(&path).map_err(|source| StrataError::SampleNotFound { path, source })
}
