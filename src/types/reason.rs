//! Reason codes for scheduling decisions

use serde::{Deserialize, Serialize};

/// Why the cursor ended up where it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum ReasonCode {
    // =========================================================================
    // R100: Advance
    // =========================================================================
    /// Word list is empty, nothing moved
    R100_EMPTY_LIST,
    /// Picked a word that has never been marked
    R101_PICKED_UNSEEN,
    /// Picked a marked word whose cooldown has elapsed
    R102_PICKED_DUE,
    /// Every word was cooling; took the neighbour anyway
    R103_FALLBACK_ALL_COOLING,

    // =========================================================================
    // R200: Other moves
    // =========================================================================
    /// Stepped back one word, timeline untouched
    R200_RETREAT,
    /// Session opened or restored
    R201_SESSION_START,
    /// Detail view toggled on the current word
    R202_DETAILS_TOGGLED,
}

impl ReasonCode {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R100_EMPTY_LIST => "R100_EMPTY_LIST",
            Self::R101_PICKED_UNSEEN => "R101_PICKED_UNSEEN",
            Self::R102_PICKED_DUE => "R102_PICKED_DUE",
            Self::R103_FALLBACK_ALL_COOLING => "R103_FALLBACK_ALL_COOLING",
            Self::R200_RETREAT => "R200_RETREAT",
            Self::R201_SESSION_START => "R201_SESSION_START",
            Self::R202_DETAILS_TOGGLED => "R202_DETAILS_TOGGLED",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R100_EMPTY_LIST => "No words available",
            Self::R101_PICKED_UNSEEN => "Next unmarked word",
            Self::R102_PICKED_DUE => "Familiar word due again",
            Self::R103_FALLBACK_ALL_COOLING => "All words cooling, showing neighbour",
            Self::R200_RETREAT => "Previous word",
            Self::R201_SESSION_START => "Session started",
            Self::R202_DETAILS_TOGGLED => "Details toggled",
        }
    }

    /// Did this decision bypass a cooldown?
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::R103_FALLBACK_ALL_COOLING)
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}
