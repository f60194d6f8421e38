//! Wordwatch: vocabulary flashcards driven by a step-based spacing engine
//!
//! Words are shown in list order; marking one "familiar" pushes its next
//! appearance further along the timeline, doubling the gap each time.

pub mod core;
pub mod types;

// =============================================================================
// SPACING [C] - gap = total * 0.02 * 2^(k-1), capped at total * 0.6
// =============================================================================

/// Fraction of the list length used as the first familiar gap
pub const GAP_BASE_RATIO: f64 = 0.02;

/// Upper bound on any gap, as a fraction of the list length.
/// Keeps a word inside two passes of the list however often it was marked.
pub const GAP_CAP_RATIO: f64 = 0.6;

/// A gap is never shorter than this, so a marked word cannot be picked again
/// on the very next step
pub const GAP_MIN_STEPS: u64 = 1;

// =============================================================================
// PRESENTATION
// =============================================================================

/// Pause between "familiar" feedback and moving to the next card (milliseconds)
pub const FEEDBACK_DELAY_MS: u64 = 400;

// =============================================================================
// STORAGE
// =============================================================================

/// Version written into progress files
pub const PROGRESS_FORMAT_VERSION: u32 = 1;

/// Word list loaded when `--words` is not given
pub const DEFAULT_WORDS_PATH: &str = "data/words.json";

/// Progress file used when `--progress` is not given
pub const DEFAULT_PROGRESS_PATH: &str = "progress.json";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "0.1.0";
