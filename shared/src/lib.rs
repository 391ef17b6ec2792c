//! Shared types for the branch directory
//!
//! Document model (branches, menu items, gallery images), id/time helpers,
//! and the structured error type used by `branch-admin` and any front end
//! that reads the persisted JSON document.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{Branch, GalleryImage, ImageData, MenuItem, StoreDocument};
pub use serde::{Deserialize, Serialize};
