//! Core modules for Wordwatch

pub mod spacing;
pub mod scheduler;
pub mod repository;
pub mod progress;
pub mod session;

pub use spacing::{compute_gap, is_eligible};
pub use scheduler::{advance, retreat, mark_familiar, Advance};
pub use repository::{load_words, parse_words, sanitize_json};
pub use progress::{save_progress, load_progress, load_progress_if_exists, list_fingerprint};
pub use session::PracticeSession;
