//! Persistence gate
//!
//! Loads the store document from its slot at start-up and overwrites the
//! slot with the full document on every save (last writer wins).

use shared::{AppError, AppResult, ErrorCode, StoreDocument};
use std::sync::Arc;

use crate::storage::SlotStorage;

/// Why `load` fell back to the demo seed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed the persisted document
    Persisted,
    /// Slot was empty
    SeededEmpty,
    /// Slot held something that is not a store document
    SeededCorrupt,
    /// Document parsed but had no branches
    SeededNoBranches,
}

impl LoadSource {
    /// The error behind a reseed that discarded stored data
    pub fn error(&self) -> Option<AppError> {
        match self {
            LoadSource::SeededCorrupt => Some(AppError::new(ErrorCode::StorageCorrupted)),
            _ => None,
        }
    }
}

pub struct PersistenceGate {
    slots: Arc<dyn SlotStorage>,
    key: String,
}

impl PersistenceGate {
    pub fn new(slots: Arc<dyn SlotStorage>, key: impl Into<String>) -> Self {
        Self {
            slots,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Current document, seeding (and persisting the seed) when needed.
    ///
    /// A corrupt blob is not an error: it is logged and replaced by the seed.
    /// Only slot I/O failures propagate.
    pub fn load(&self) -> AppResult<(StoreDocument, LoadSource)> {
        let source = match self.slots.read(&self.key)? {
            None => LoadSource::SeededEmpty,
            Some(raw) => match StoreDocument::from_json(&raw) {
                Ok(mut doc) if !doc.branches.is_empty() => {
                    let shared = doc.intern_images();
                    tracing::info!(
                        key = %self.key,
                        branches = doc.branches.len(),
                        shared_images = shared,
                        "Store loaded"
                    );
                    return Ok((doc, LoadSource::Persisted));
                }
                Ok(_) => LoadSource::SeededNoBranches,
                Err(e) => {
                    let err = AppError::new(ErrorCode::StorageCorrupted);
                    tracing::error!(
                        key = %self.key,
                        code = %err.code,
                        error = %e,
                        "{}, resetting to demo data",
                        err.message
                    );
                    LoadSource::SeededCorrupt
                }
            },
        };

        let seed = StoreDocument::demo();
        self.save(&seed)?;
        tracing::info!(key = %self.key, source = ?source, "Store seeded with demo data");
        Ok((seed, source))
    }

    /// Serialize the whole document and overwrite the slot
    pub fn save(&self, doc: &StoreDocument) -> AppResult<()> {
        let bytes = doc
            .to_json()
            .map_err(|e| AppError::internal(e.to_string()))?;
        self.slots.write(&self.key, &bytes)?;
        tracing::debug!(key = %self.key, bytes = bytes.len(), "Store saved");
        Ok(())
    }
}
