//! Error types for the analysis pipeline.

use std::path::PathBuf;

/// Pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum StrataError {
    /// Corpus root does not exist.
    #[error("corpus not found: {}", path.display())]
    CorpusNotFound { path: PathBuf },

    /// Corpus root exists but is not a directory.
    #[error("corpus root is not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Corpus root could not be listed.
    #[error("failed to read corpus directory {}: {source}", path.display())]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single sample file could not be read.
    #[error("sample not readable: {}: {source}", path.display())]
    SampleNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be written.
    #[error("failed to write report to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be encoded.
    #[error("failed to encode report: {message}")]
    Encode { message: String },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl StrataError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config { .. } | Self::Encode { .. } => 2,

            Self::CorpusNotFound { .. }
            | Self::NotADirectory { .. }
            | Self::CorpusUnreadable { .. }
            | Self::SampleNotFound { .. } => 3,

            Self::Write { .. } => 4,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for StrataError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for StrataError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Encode {
            message: err.to_string(),
        }
    }
}

/// Result type for pipeline operations.
pub type StrataResult<T> = Result<T, StrataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_taxonomy() {
        let nf = StrataError::CorpusNotFound {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(nf.exit_code(), 3);

        let w = StrataError::Write {
            path: PathBuf::from("/ro/out.json"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert_eq!(w.exit_code(), 4);
        assert!(w.to_string().contains("/ro/out.json"));

        assert_eq!(StrataError::config("x").exit_code(), 2);
    }
}
