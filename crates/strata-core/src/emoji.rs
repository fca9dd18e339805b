//! Emoji extraction from file contents.
//!
//! Emojis feed the console summary and the `sample` command only. The
//! report layout has no field for them.

use crate::corpus::Corpus;
use crate::frequency::FrequencyTable;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Emoticons, pictographs, transport, flags, dingbats and enclosed
    /// alphanumeric supplements. Consecutive symbols form one run.
    static ref EMOJI_RUN: Regex = Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F1E0}-\x{1F1FF}",
        r"\x{2702}-\x{27B0}",
        r"\x{24C2}",
        r"\x{1F170}-\x{1F251}",
        "]+"
    ))
    .unwrap();
}

/// Emoji runs in `text`, in order of appearance.
pub fn extract_emojis(text: &str) -> Vec<String> {
    EMOJI_RUN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Emoji run frequencies across every file's content.
pub fn tally(corpus: &Corpus) -> FrequencyTable {
    let mut table = FrequencyTable::default();
    for entry in corpus.entries() {
        for run in extract_emojis(&entry.content) {
            table.add_token(&run);
        }
    }
    table
}
