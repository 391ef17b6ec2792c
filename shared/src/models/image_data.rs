//! Gallery image payload
//!
//! Bytes live in memory as a shared, content-addressed blob. The
//! `data:<mime>;base64,<payload>` form only exists at the serde boundary.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Data URL parse errors
#[derive(Debug, Error)]
pub enum DataUrlError {
    #[error("data URL must start with 'data:'")]
    MissingScheme,

    #[error("data URL has no ',' separator")]
    MissingSeparator,

    #[error("only base64 data URLs are supported")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Inline image bytes addressed by their SHA-256 digest
#[derive(Clone)]
pub struct ImageData {
    mime: String,
    /// Lowercase hex SHA-256 of `bytes`
    digest: String,
    bytes: Arc<[u8]>,
}

impl ImageData {
    pub fn from_bytes(mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let bytes = bytes.into();
        Self {
            mime: mime.into(),
            digest: content_digest(&bytes),
            bytes,
        }
    }

    /// Same blob, possibly labelled with another MIME type
    pub fn with_mime(&self, mime: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            digest: self.digest.clone(),
            bytes: Arc::clone(&self.bytes),
        }
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether two payloads share one allocation
    pub fn shares_blob_with(&self, other: &ImageData) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }

    pub(crate) fn shared_bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }

    pub(crate) fn replace_bytes(&mut self, bytes: Arc<[u8]>) {
        self.bytes = bytes;
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }

    pub fn parse_data_url(url: &str) -> Result<Self, DataUrlError> {
        let rest = url.strip_prefix("data:").ok_or(DataUrlError::MissingScheme)?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or(DataUrlError::MissingSeparator)?;
        let mime = meta.strip_suffix(";base64").ok_or(DataUrlError::NotBase64)?;
        let bytes = STANDARD.decode(payload.trim())?;
        Ok(Self::from_bytes(mime, bytes))
    }
}

/// Lowercase hex SHA-256
pub fn content_digest(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        self.mime == other.mime && self.digest == other.digest
    }
}

impl Eq for ImageData {}

impl fmt::Debug for ImageData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageData")
            .field("mime", &self.mime)
            .field("digest", &self.digest)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Serialize for ImageData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_data_url())
    }
}

impl<'de> Deserialize<'de> for ImageData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let url = String::deserialize(deserializer)?;
        Self::parse_data_url(&url).map_err(serde::de::Error::custom)
    }
}
