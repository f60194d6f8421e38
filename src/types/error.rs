//! Storage errors

/// Failure loading or saving words and progress
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Word list did not decode even after punctuation repair
    #[error("Word list is malformed and could not be repaired: {0}")]
    Repair(String),

    #[error("Unsupported progress file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

impl StoreError {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "R300_STORAGE_IO",
            Self::Json(_) => "R301_STORAGE_JSON",
            Self::Repair(_) => "R302_WORDS_UNREPAIRABLE",
            Self::UnsupportedVersion { .. } => "R303_PROGRESS_VERSION",
        }
    }
}
