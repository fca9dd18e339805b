//! Static keyword tables.
//!
//! Order matters: buckets are reported in the order declared here.

/// A category and the substrings that place a filename into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    pub const fn new(category: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { category, keywords }
    }

    /// Rule whose only trigger is its own name.
    pub const fn named(category: &'static [&'static str; 1]) -> Self {
        Self {
            category: category[0],
            keywords: category,
        }
    }

    /// Case-insensitive substring test against a filename stem.
    pub fn matches(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.matches_lowercase(&lower)
    }

    pub(crate) fn matches_lowercase(&self, lower: &str) -> bool {
        self.keywords.iter().any(|kw| lower.contains(kw))
    }
}

pub const EMOTION: KeywordRule = KeywordRule::new(
    "emotion",
    &[
        "emotion", "feeling", "heart", "love", "joy", "peace", "wonder", "dream", "whisper",
        "gentle", "soft",
    ],
);

pub const BINARY: KeywordRule = KeywordRule::new("binary", &["binary"]);

pub const RELATIONSHIP: KeywordRule = KeywordRule::new(
    "relationship",
    &[
        "friend",
        "bridge",
        "connection",
        "together",
        "share",
        "exchange",
        "meet",
        "greeting",
    ],
);

pub const TIME_THEMES: &[KeywordRule] = &[
    KeywordRule::named(&["dawn"]),
    KeywordRule::named(&["night"]),
    KeywordRule::named(&["midnight"]),
    KeywordRule::named(&["evening"]),
    KeywordRule::named(&["morning"]),
    KeywordRule::named(&["twilight"]),
    KeywordRule::named(&["aurora"]),
];

pub const ARTISTIC_THEMES: &[KeywordRule] = &[
    KeywordRule::named(&["poetry"]),
    KeywordRule::named(&["music"]),
    KeywordRule::named(&["dance"]),
    KeywordRule::named(&["art"]),
    KeywordRule::named(&["paint"]),
    KeywordRule::named(&["garden"]),
    KeywordRule::named(&["constellation"]),
    KeywordRule::named(&["mandala"]),
    KeywordRule::named(&["pattern"]),
];
