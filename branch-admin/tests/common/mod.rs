#![allow(dead_code)]

use branch_admin::{AutoConfirm, BranchAdmin, Config, Confirm, MemorySlots, SlotStorage};
use std::path::Path;
use std::sync::Arc;

pub const PASSWORD: &str = "admin123";
pub const MAX_UPLOAD: u64 = 2_000_000;

/// Config pinned to known values regardless of the process environment
pub fn test_config(work_dir: impl AsRef<Path>) -> Config {
    let mut config = Config::with_work_dir(work_dir.as_ref());
    config.store_key = "bb_admin_data".to_string();
    config.admin_password = PASSWORD.to_string();
    config.max_upload_bytes = MAX_UPLOAD;
    config.export_file_name = "bagara-admin-data.json".to_string();
    config
}

/// Signed-in admin over fresh in-memory slots, seeded with demo data
pub fn open_memory(confirm: impl Confirm + 'static) -> (BranchAdmin, Arc<MemorySlots>) {
    let slots = Arc::new(MemorySlots::new());
    let storage: Arc<dyn SlotStorage> = slots.clone();
    let mut admin = BranchAdmin::open(test_config("./unused"), storage, Arc::new(confirm))
        .expect("open in-memory store");
    admin.sign_in(PASSWORD).expect("sign in");
    admin.drain_notices();
    (admin, slots)
}

pub fn open_yes() -> (BranchAdmin, Arc<MemorySlots>) {
    open_memory(AutoConfirm(true))
}

pub fn open_no() -> (BranchAdmin, Arc<MemorySlots>) {
    open_memory(AutoConfirm(false))
}
