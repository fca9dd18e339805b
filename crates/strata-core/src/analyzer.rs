//! Scan → categorize → aggregate → serialize.
//!
//! [`PatternAnalyzer`] answers each report question separately so callers
//! can ask for one bucket without building the whole report.
//! [`run_pipeline`] is the batch entry point used by `strata analyze`.

use crate::categorize::{self, CategoryBucket};
use crate::config::AnalyzerConfig;
use crate::corpus::Corpus;
use crate::error::StrataResult;
use crate::frequency::{FrequencyTable, KeywordCount};
use crate::report::{self, AnalysisReport};
use crate::rules::{ARTISTIC_THEMES, BINARY, EMOTION, RELATIONSHIP, TIME_THEMES};

/// Pattern queries over one scanned corpus.
#[derive(Debug, Clone)]
pub struct PatternAnalyzer {
    corpus: Corpus,
}

impl PatternAnalyzer {
    /// Wrap an already scanned corpus.
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Token counts over every name, unranked.
    pub fn filename_keywords(&self) -> FrequencyTable {
        FrequencyTable::from_names(self.corpus.names())
    }

    /// Names containing any emotion keyword.
    pub fn emotion_files(&self) -> Vec<String> {
        categorize::collect(&self.corpus, &EMOTION).members
    }

    /// One bucket per time keyword, in declared order. Empty buckets are kept.
    pub fn time_themes(&self) -> Vec<CategoryBucket> {
        categorize::categorize(&self.corpus, TIME_THEMES)
    }

    pub fn binary_files(&self) -> Vec<String> {
        categorize::collect(&self.corpus, &BINARY).members
    }

    pub fn relationship_files(&self) -> Vec<String> {
        categorize::collect(&self.corpus, &RELATIONSHIP).members
    }

    /// One bucket per artistic keyword, in declared order.
    pub fn artistic_themes(&self) -> Vec<CategoryBucket> {
        categorize::categorize(&self.corpus, ARTISTIC_THEMES)
    }

    /// Full report with the `top_n` most frequent tokens.
    ///
    /// `generated_at` is left unset; see [`AnalysisReport::stamped`].
    pub fn analyze_all(&self, top_n: usize) -> AnalysisReport {
        let keywords: Vec<KeywordCount> = self.filename_keywords().top(top_n);
        let report = AnalysisReport {
            total_files: self.corpus.len(),
            filename_keywords: keywords,
            emotion_files: self.emotion_files(),
            time_themes: self.time_themes(),
            binary_files: self.binary_files(),
            relationship_files: self.relationship_files(),
            artistic_themes: self.artistic_themes(),
            generated_at: None,
        };
        tracing::info!(
            total = report.total_files,
            emotion = report.emotion_files.len(),
            binary = report.binary_files.len(),
            relationship = report.relationship_files.len(),
            "analysis complete"
        );
        report
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub analyzer: PatternAnalyzer,
    pub report: AnalysisReport,
}

/// Run the whole pipeline and write the report to `cfg.output`.
///
/// The analyzer is returned alongside the report so the caller can render
/// a summary from the same corpus without scanning twice.
pub fn run_pipeline(cfg: &AnalyzerConfig) -> StrataResult<PipelineOutcome> {
    cfg.validate()?;
    let corpus = Corpus::scan(&cfg.corpus_root, &cfg.extension)?;
    let analyzer = PatternAnalyzer::new(corpus);

    let mut report = analyzer.analyze_all(cfg.top_n);
    if cfg.stamp {
        report = report.stamped();
    }
    report::write_report(&report, &cfg.output)?;

    Ok(PipelineOutcome { analyzer, report })
}
