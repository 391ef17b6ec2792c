//! Key-value slot storage
//!
//! The whole store document lives in a single slot. Two backends:
//!
//! | Backend | Use |
//! |---------|-----|
//! | [`RedbSlots`] | on-disk (or in-memory) redb table |
//! | [`MemorySlots`] | plain map, for tests and fault injection |

mod memory;
mod redb_slots;

pub use memory::MemorySlots;
pub use redb_slots::RedbSlots;

use shared::AppError;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Slot unavailable: {0}")]
    Unavailable(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::storage(err.to_string())
    }
}

/// A key-value slot holding opaque bytes
///
/// Writes replace the whole value; there is no partial update.
pub trait SlotStorage: Send + Sync {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()>;
}
