//! Progress persistence
//!
//! A progress file carries a fingerprint of the word list it was written
//! against, so a cursor is never restored onto a different list.

use std::path::Path;

use log::info;
use sha2::{Digest, Sha256};

use crate::PROGRESS_FORMAT_VERSION;
use crate::types::{ProgressFile, StoreError, Word};

/// Save progress to a JSON file, creating parent directories
pub fn save_progress(file: &ProgressFile, path: impl AsRef<Path>) -> Result<(), StoreError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(file)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, json)?;

    info!(
        "saved progress for {} words at step {} to {}",
        file.records.len(),
        file.current_step,
        path.display()
    );
    Ok(())
}

/// Load progress from a JSON file
pub fn load_progress(path: impl AsRef<Path>) -> Result<ProgressFile, StoreError> {
    let json = std::fs::read_to_string(path)?;
    let file: ProgressFile = serde_json::from_str(&json)?;

    if file.version != PROGRESS_FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: file.version,
            expected: PROGRESS_FORMAT_VERSION,
        });
    }
    Ok(file)
}

/// Load progress if the file exists
pub fn load_progress_if_exists(path: impl AsRef<Path>) -> Result<Option<ProgressFile>, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    load_progress(path).map(Some)
}

/// Hex SHA-256 over the ordered word ids
pub fn list_fingerprint(words: &[Word]) -> String {
    let mut hasher = Sha256::new();
    for word in words {
        hasher.update(word.id.as_bytes());
        // Separator so ["ab","c"] and ["a","bc"] differ
        hasher.update([0u8]);
    }
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
