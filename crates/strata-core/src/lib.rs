//! Pattern analysis over a directory of legacy text files.
//!
//! `strata-core` implements one batch pipeline:
//!
//! - [`Corpus::scan`] lists files with the configured extension
//! - [`categorize`] buckets file names by keyword membership
//! - [`FrequencyTable`] counts `_`-delimited name tokens
//! - [`write_report`] serializes the [`AnalysisReport`] as JSON or YAML
//!
//! # Quick Start
//!
//! ```no_run
//! use strata_core::{run_pipeline, AnalyzerConfig};
//!
//! # fn example() -> strata_core::StrataResult<()> {
//! let cfg = AnalyzerConfig::new("./past_works", "past_patterns.json").with_top_n(10);
//! let outcome = run_pipeline(&cfg)?;
//! println!("{} files", outcome.report.total_files);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every fallible call returns [`StrataResult`]. [`StrataError::exit_code`]
//! maps each variant to the process exit code the CLI uses.

pub mod analyzer;
pub mod categorize;
pub mod config;
pub mod corpus;
pub mod emoji;
mod error;
pub mod frequency;
pub mod report;
pub mod rules;
pub mod theme;

// Convenience re-exports
pub use analyzer::{run_pipeline, PatternAnalyzer, PipelineOutcome};
pub use categorize::CategoryBucket;
pub use config::{AnalyzerConfig, ConfigFile};
pub use corpus::{read_sample, Corpus, CorpusEntry};
pub use error::{StrataError, StrataResult};
pub use frequency::{FrequencyTable, KeywordCount};
pub use report::{write_report, AnalysisReport, ReportFormat};
pub use rules::KeywordRule;
pub use theme::{dominant_emotion, Emotion};
