//! Data models
//!
//! The persisted document and its parts. Field names match the JSON
//! document written by the browser admin, so exports from either side
//! import into the other.

pub mod branch;
pub mod document;
pub mod gallery_image;
pub mod image_data;
pub mod menu_item;
pub mod serde_helpers;

// Re-exports
pub use branch::*;
pub use document::*;
pub use gallery_image::*;
pub use image_data::*;
pub use menu_item::*;
