//! Filename token frequencies.
//!
//! Tokens keep their original case. Ranking is by descending count; equal
//! counts keep the order in which tokens were first seen.

use std::collections::HashMap;

/// Separator between name tokens.
pub const TOKEN_DELIMITER: char = '_';

/// One ranked token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: usize,
}

/// Token counts in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: Vec<KeywordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Count the tokens of every name in iteration order.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = Self::default();
        for name in names {
            table.add_name(name);
        }
        table
    }

    /// Split `name` on [`TOKEN_DELIMITER`] and count each piece. Empty
    /// pieces from doubled delimiters are counted too.
    pub fn add_name(&mut self, name: &str) {
        for token in name.split(TOKEN_DELIMITER) {
            self.add_token(token);
        }
    }

    /// Bump `token`, appending it if unseen.
    pub fn add_token(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&i) => self.counts[i].count += 1,
            None => {
                self.index.insert(token.to_string(), self.counts.len());
                self.counts.push(KeywordCount {
                    keyword: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Occurrences of `token`; zero if unseen.
    pub fn count(&self, token: &str) -> usize {
        self.index.get(token).map_or(0, |&i| self.counts[i].count)
    }

    /// Distinct tokens seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Up to `n` tokens, highest count first.
    pub fn top(&self, n: usize) -> Vec<KeywordCount> {
        let mut ranked = self.counts.clone();
        // sort_by is stable, so ties stay in first-seen order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}
