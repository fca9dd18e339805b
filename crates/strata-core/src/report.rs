//! Analysis report and its on-disk form.
//!
//! Field order is part of the output contract:
//! `total_files`, `filename_keywords`, `emotion_files`, `time_themes`,
//! `binary_files`, `relationship_files`, `artistic_themes`, and
//! `generated_at` only when stamping was requested. Keyword and theme
//! objects keep rank and declaration order respectively.

use crate::categorize::CategoryBucket;
use crate::error::{StrataError, StrataResult};
use crate::frequency::KeywordCount;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::path::Path;

/// Aggregate of one run. Written once; only `generated_at` varies between
/// runs over the same corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub total_files: usize,
    #[serde(serialize_with = "keyword_map")]
    pub filename_keywords: Vec<KeywordCount>,
    pub emotion_files: Vec<String>,
    #[serde(serialize_with = "bucket_map")]
    pub time_themes: Vec<CategoryBucket>,
    pub binary_files: Vec<String>,
    pub relationship_files: Vec<String>,
    #[serde(serialize_with = "bucket_map")]
    pub artistic_themes: Vec<CategoryBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
}

impl AnalysisReport {
    /// Set `generated_at` to the current UTC time (RFC 3339).
    pub fn stamped(mut self) -> Self {
        self.generated_at = Some(chrono::Utc::now().to_rfc3339());
        self
    }

    pub fn time_theme(&self, category: &str) -> Option<&CategoryBucket> {
        self.time_themes.iter().find(|b| b.category == category)
    }

    pub fn artistic_theme(&self, category: &str) -> Option<&CategoryBucket> {
        self.artistic_themes.iter().find(|b| b.category == category)
    }
}

// `keyword: count` entries in rank order.
fn keyword_map<S: Serializer>(table: &[KeywordCount], s: S) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(table.len()))?;
    for kc in table {
        map.serialize_entry(&kc.keyword, &kc.count)?;
    }
    map.end()
}

fn bucket_map<S: Serializer>(buckets: &[CategoryBucket], s: S) -> Result<S::Ok, S::Error> {
    let mut map = s.serialize_map(Some(buckets.len()))?;
    for b in buckets {
        map.serialize_entry(&b.category, &b.members)?;
    }
    map.end()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Yaml,
}

impl ReportFormat {
    /// YAML for `.yaml`/`.yml`, JSON otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Encode without touching the filesystem.
pub fn render(report: &AnalysisReport, format: ReportFormat) -> StrataResult<String> {
    Ok(match format {
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
        ReportFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

/// Write `report` to `path`, replacing any existing file.
pub fn write_report(report: &AnalysisReport, path: &Path) -> StrataResult<()> {
    let content = render(report, ReportFormat::from_path(path))?;
    std::fs::write(path, content).map_err(|source| StrataError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AnalysisReport {
        AnalysisReport {
            total_files: 2,
            filename_keywords: vec![
                KeywordCount {
                    keyword: "binary".into(),
                    count: 2,
                },
                KeywordCount {
                    keyword: "aurora".into(),
                    count: 1,
                },
            ],
            emotion_files: vec!["binary_emotion_echo".into()],
            time_themes: vec![
                CategoryBucket {
                    category: "dawn".into(),
                    members: vec![],
                },
                CategoryBucket {
                    category: "aurora".into(),
                    members: vec!["binary_aurora".into()],
                },
            ],
            binary_files: vec!["binary_emotion_echo".into(), "binary_aurora".into()],
            relationship_files: vec![],
            artistic_themes: vec![],
            generated_at: None,
        }
    }

    #[test]
    fn json_keeps_declared_order() {
        let json = render(&sample(), ReportFormat::Json).unwrap();
        let pos = |needle: &str| json.find(needle).unwrap();
        assert!(pos("\"total_files\"") < pos("\"filename_keywords\""));
        assert!(pos("\"binary\": 2") < pos("\"aurora\": 1"));
        assert!(pos("\"dawn\": []") < pos("\"aurora\": [\n"));
        assert!(pos("\"relationship_files\"") < pos("\"artistic_themes\": {}"));
        assert!(!json.contains("generated_at"));
    }

    #[test]
    fn stamp_adds_timestamp() {
        let json = render(&sample().stamped(), ReportFormat::Json).unwrap();
        assert!(json.contains("\"generated_at\""));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ReportFormat::from_path(Path::new("r.yml")), ReportFormat::Yaml);
        assert_eq!(ReportFormat::from_path(Path::new("r.YAML")), ReportFormat::Yaml);
        assert_eq!(ReportFormat::from_path(Path::new("r.json")), ReportFormat::Json);
        assert_eq!(ReportFormat::from_path(Path::new("report")), ReportFormat::Json);

        let yaml = render(&sample(), ReportFormat::Yaml).unwrap();
        assert!(yaml.starts_with("total_files: 2\n"));
    }

    #[test]
    fn write_into_missing_directory_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("no/such/dir/report.json");
        let err = write_report(&sample(), &target).unwrap_err();
        assert!(matches!(err, StrataError::Write { .. }));
        assert!(err.to_string().contains("report.json"));
    }
}
