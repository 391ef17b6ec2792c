//! Gallery Image Model

use serde::{Deserialize, Serialize};

use super::ImageData;
use super::serde_helpers::null_as_default;

/// Uploaded photo, owned by exactly one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: String,
    /// Original file name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Serialized as `dataUrl`
    #[serde(rename = "dataUrl")]
    pub data: ImageData,
    /// Unix milliseconds
    pub uploaded_at: i64,
}
