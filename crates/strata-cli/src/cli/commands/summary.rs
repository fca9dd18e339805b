//! Human-readable console summary. Not a stable format.

use std::fmt::Write as _;
use strata_core::{AnalysisReport, CategoryBucket, FrequencyTable};

const RULE: &str = "============================================================";
const SHOWN_KEYWORDS: usize = 10;
const SHOWN_EXAMPLES: usize = 3;
const SHOWN_EMOJIS: usize = 5;

pub const KEY_DISCOVERIES: &str = "\n✨ KEY DISCOVERIES:
  1. Strong preference for binary representation of emotions
  2. Fascination with liminal times (dawn, midnight)
  3. Desire for connection (tools as friends)
  4. Poetry in code - making technical things beautiful

🤔 Question: Are these truly 'preferences' or just patterns?
   That's what this project explores.
";

pub fn render(report: &AnalysisReport, emojis: &FrequencyTable, skipped: usize) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail
    let _ = write_summary(&mut out, report, emojis, skipped);
    out
}

fn write_summary(
    out: &mut String,
    report: &AnalysisReport,
    emojis: &FrequencyTable,
    skipped: usize,
) -> std::fmt::Result {
    writeln!(out, "{RULE}")?;
    writeln!(out, "🔍 PAST SELF ANALYSIS - Pattern Discovery")?;
    writeln!(out, "{RULE}")?;

    writeln!(out, "\n📊 Total Files Created: {}", report.total_files)?;

    writeln!(out, "\n🏷️  Top Keywords in Filenames:")?;
    for kc in report.filename_keywords.iter().take(SHOWN_KEYWORDS) {
        writeln!(
            out,
            "  {:20} : {} {}",
            kc.keyword,
            "█".repeat(kc.count),
            kc.count
        )?;
    }

    writeln!(
        out,
        "\n💫 Emotion-Related Files: {}",
        report.emotion_files.len()
    )?;
    if !report.emotion_files.is_empty() {
        let examples: Vec<&str> = report
            .emotion_files
            .iter()
            .take(SHOWN_EXAMPLES)
            .map(String::as_str)
            .collect();
        writeln!(out, "  Examples: {}...", examples.join(", "))?;
    }

    writeln!(out, "\n⏰ Time Theme Distribution:")?;
    write_buckets(out, &report.time_themes, 12)?;

    writeln!(
        out,
        "\n🔢 Binary Obsession: {} files",
        report.binary_files.len()
    )?;
    writeln!(
        out,
        "\n🤝 Relationship Themes: {} files",
        report.relationship_files.len()
    )?;

    writeln!(out, "\n🎨 Artistic Themes:")?;
    write_buckets(out, &report.artistic_themes, 15)?;

    if !emojis.is_empty() {
        writeln!(out, "\n🌈 Emoji Palette:")?;
        for kc in emojis.top(SHOWN_EMOJIS) {
            writeln!(out, "  {} x{}", kc.keyword, kc.count)?;
        }
    }

    if skipped > 0 {
        writeln!(out, "\n⚠️  Unreadable files skipped: {skipped}")?;
    }

    writeln!(out, "\n{RULE}")
}

fn write_buckets(out: &mut String, buckets: &[CategoryBucket], width: usize) -> std::fmt::Result {
    for b in buckets.iter().filter(|b| !b.is_empty()) {
        writeln!(out, "  {:width$} : {:3} files", b.category, b.len())?;
    }
    Ok(())
}
