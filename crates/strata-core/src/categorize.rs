//! Keyword categorization of corpus filenames.
//!
//! A name belongs to a category when its lowercased form contains any of
//! the category's keywords as a substring. Categories overlap freely, so
//! `midnight_code_garden` lands in both `night` and `midnight`.

use crate::corpus::Corpus;
use crate::rules::KeywordRule;

/// Files claimed by one category, in corpus order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryBucket {
    pub category: String,
    pub members: Vec<String>,
}

impl CategoryBucket {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Files matching any keyword of `rule`. Each file appears at most once.
pub fn collect(corpus: &Corpus, rule: &KeywordRule) -> CategoryBucket {
    CategoryBucket {
        category: rule.category.to_string(),
        members: corpus
            .names()
            .filter(|name| rule.matches(name))
            .map(str::to_string)
            .collect(),
    }
}

/// One bucket per rule, in rule order. A file may land in several buckets.
pub fn categorize(corpus: &Corpus, rules: &[KeywordRule]) -> Vec<CategoryBucket> {
    let mut buckets: Vec<CategoryBucket> = rules
        .iter()
        .map(|r| CategoryBucket {
            category: r.category.to_string(),
            members: Vec::new(),
        })
        .collect();

    for name in corpus.names() {
        let lower = name.to_lowercase();
        for (rule, bucket) in rules.iter().zip(buckets.iter_mut()) {
            if rule.matches_lowercase(&lower) {
                bucket.members.push(name.to_string());
            }
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ARTISTIC_THEMES, EMOTION, TIME_THEMES};

    #[test]
    fn overlapping_categories_share_files() {
        let corpus = Corpus::from_names(["midnight_code_garden", "dawn_binary_whisper"]);
        let buckets = categorize(&corpus, TIME_THEMES);

        let by_name = |c: &str| buckets.iter().find(|b| b.category == c).unwrap();
        assert_eq!(by_name("dawn").members, vec!["dawn_binary_whisper"]);
        // "midnight" contains "night"
        assert_eq!(by_name("night").members, vec!["midnight_code_garden"]);
        assert_eq!(by_name("midnight").members, vec!["midnight_code_garden"]);
        assert!(by_name("aurora").is_empty());
        assert_eq!(buckets.len(), TIME_THEMES.len());
    }

    #[test]
    fn file_counted_once_even_with_multiple_hits() {
        // both "heart" and "love" hit the emotion list
        let corpus = Corpus::from_names(["heart_love_song"]);
        let bucket = collect(&corpus, &EMOTION);
        assert_eq!(bucket.members, vec!["heart_love_song"]);
    }

    #[test]
    fn bucket_order_follows_rule_order() {
        let corpus = Corpus::from_names(["pattern_breath"]);
        let cats: Vec<_> = categorize(&corpus, ARTISTIC_THEMES)
            .into_iter()
            .map(|b| b.category)
            .collect();
        assert_eq!(cats.first().map(String::as_str), Some("poetry"));
        assert_eq!(cats.last().map(String::as_str), Some("pattern"));
    }
}
