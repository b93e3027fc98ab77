//! The closed set of moods an entry can record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five defined moods, in definition order.
///
/// Definition order matters: it is the iteration order of statistics, the
/// tie-break order of [`crate::views::most_common_mood`], and the first
/// variant is the fallback for unknown identifiers.
///
/// Persisted as its identifier (`"happy"`, ...). Unknown identifiers read back
/// as the first mood, matching [`Mood::lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mood {
    Happy,
    Excited,
    Calm,
    Sad,
    Angry,
}

impl Mood {
    /// Number of defined moods.
    pub const COUNT: usize = 5;

    /// All moods in definition order.
    pub const ALL: [Mood; Mood::COUNT] = [
        Mood::Happy,
        Mood::Excited,
        Mood::Calm,
        Mood::Sad,
        Mood::Angry,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Excited => "excited",
            Mood::Calm => "calm",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Excited => "Excited",
            Mood::Calm => "Calm",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Excited => "🤩",
            Mood::Calm => "😌",
            Mood::Sad => "😔",
            Mood::Angry => "😠",
        }
    }

    /// Display color token.
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Happy => "yellow-200",
            Mood::Excited => "yellow-400",
            Mood::Calm => "blue-200",
            Mood::Sad => "blue-400",
            Mood::Angry => "red-400",
        }
    }

    /// Exact-match lookup; `None` for identifiers outside the set.
    pub fn from_id(id: &str) -> Option<Mood> {
        Mood::ALL.into_iter().find(|mood| mood.id() == id)
    }

    /// Lookup that falls back to the first defined mood for unknown identifiers.
    pub fn lookup(id: &str) -> Mood {
        Mood::from_id(id).unwrap_or(Mood::ALL[0])
    }

    /// Position in definition order.
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl From<String> for Mood {
    fn from(value: String) -> Self {
        Mood::lookup(&value)
    }
}

impl From<Mood> for String {
    fn from(value: Mood) -> Self {
        value.id().to_string()
    }
}
