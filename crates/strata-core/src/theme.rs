//! Single representative label for a filename.
//!
//! The name is split on `_` and its tokens are walked left to right; the
//! first token that is a trigger in [`THEME_LABELS`] decides the label.
//! Token order, not table order, breaks ties, so `pattern_time` is
//! curiosity while `time_pattern` is longing.
//!
//! Triggers match whole tokens only. A name with no trigger falls back to
//! [`DEFAULT_EMOTION`].

use crate::frequency::TOKEN_DELIMITER;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Love,
    Peace,
    Longing,
    Curiosity,
    Wonder,
    Connection,
    Growth,
}

impl Emotion {
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Love => "love",
            Emotion::Peace => "peace",
            Emotion::Longing => "longing",
            Emotion::Curiosity => "curiosity",
            Emotion::Wonder => "wonder",
            Emotion::Connection => "connection",
            Emotion::Growth => "growth",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback when no trigger matches.
pub const DEFAULT_EMOTION: Emotion = Emotion::Joy;

pub const THEME_LABELS: &[(&str, Emotion)] = &[
    ("emotion", Emotion::Joy),
    ("dawn", Emotion::Wonder),
    ("whisper", Emotion::Peace),
    ("friendship", Emotion::Connection),
    ("poetry", Emotion::Love),
    ("garden", Emotion::Growth),
    ("time", Emotion::Longing),
    ("pattern", Emotion::Curiosity),
];

/// The trigger that decided the label, if any.
pub fn dominant_trigger(name: &str) -> Option<(&'static str, Emotion)> {
    let lower = name.to_lowercase();
    lower.split(TOKEN_DELIMITER).find_map(|token| {
        THEME_LABELS
            .iter()
            .find(|(trigger, _)| *trigger == token)
            .copied()
    })
}

/// Label for `name`, or [`DEFAULT_EMOTION`] when no token is a trigger.
pub fn dominant_emotion(name: &str) -> Emotion {
    dominant_trigger(name).map_or(DEFAULT_EMOTION, |(_, e)| e)
}
