//! Core types for Wordwatch

mod word;
mod progress;
mod status;
mod output;
mod reason;
mod error;

pub use word::{Word, WordList};
pub use progress::{ProgressRecord, ProgressStore, ProgressFile, Cursor};
pub use status::WordStatus;
pub use output::{CardView, SessionStats};
pub use reason::ReasonCode;
pub use error::StoreError;
