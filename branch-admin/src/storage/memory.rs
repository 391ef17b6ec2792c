use parking_lot::Mutex;
use std::collections::HashMap;

use super::{SlotStorage, StorageError, StorageResult};

/// In-memory slots
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, Vec<u8>>>,
    /// When set, every write fails
    read_only: Mutex<bool>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot (e.g. with a corrupt blob)
    pub fn with_slot(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        let slots = Self::new();
        slots.slots.lock().insert(key.into(), value.into());
        slots
    }

    /// Make subsequent writes fail with [`StorageError::Unavailable`]
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.lock() = read_only;
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.lock().is_empty()
    }
}

impl SlotStorage for MemorySlots {
    fn read(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> StorageResult<()> {
        if *self.read_only.lock() {
            return Err(StorageError::Unavailable(format!("slot '{key}' is read-only")));
        }
        self.slots.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_read() {
        let slots = MemorySlots::new();
        assert!(slots.read("k").unwrap().is_none());
        slots.write("k", b"v1").unwrap();
        slots.write("k", b"v2").unwrap();
        assert_eq!(slots.read("k").unwrap().as_deref(), Some(&b"v2"[..]));
        assert_eq!(slots.len(), 1);
    }

    #[test]
    fn test_read_only_rejects_writes() {
        let slots = MemorySlots::with_slot("k", b"v1".to_vec());
        slots.set_read_only(true);
        assert!(matches!(
            slots.write("k", b"v2"),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(slots.read("k").unwrap().as_deref(), Some(&b"v1"[..]));
    }
}
