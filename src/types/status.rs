//! Word status as seen from the current step

use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};

/// Where a word stands relative to the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WordStatus {
    /// Never marked familiar
    Unseen,
    /// Marked, waiting for its gap to elapse
    Cooling,
    /// Marked, gap elapsed
    Due,
}

impl WordStatus {
    /// Paint a label in this status' color
    pub fn paint(&self, text: &str) -> ColoredString {
        match self {
            WordStatus::Unseen => text.bright_white(),
            WordStatus::Cooling => text.cyan(),
            WordStatus::Due => text.yellow(),
        }
    }

    /// Get emoji for status
    pub fn emoji(&self) -> &'static str {
        match self {
            WordStatus::Unseen => "🆕",
            WordStatus::Cooling => "❄️",
            WordStatus::Due => "🔁",
        }
    }
}

impl std::fmt::Display for WordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WordStatus::Unseen => "UNSEEN",
            WordStatus::Cooling => "COOLING",
            WordStatus::Due => "DUE",
        };
        write!(f, "{}", name)
    }
}
