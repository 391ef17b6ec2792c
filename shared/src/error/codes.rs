//! Unified error codes for the branch directory
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Session errors
//! - 2xxx: Branch errors
//! - 3xxx: Menu errors
//! - 4xxx: Gallery errors
//! - 5xxx: Import / export errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they survive a trip
/// through JSON unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,

    // ==================== 1xxx: Session ====================
    /// Admin session is not open
    NotAuthenticated = 1001,
    /// Wrong admin password
    InvalidCredentials = 1002,

    // ==================== 2xxx: Branch ====================
    /// Branch not found
    BranchNotFound = 2001,
    /// Slug does not match `[a-z0-9-]+`
    InvalidSlug = 2002,
    /// No branch is selected
    NoActiveBranch = 2003,
    /// Slug already used by another branch
    SlugTaken = 2004,

    // ==================== 3xxx: Menu ====================
    /// Menu item not found
    MenuItemNotFound = 3001,
    /// Menu item name is empty
    MenuItemNameRequired = 3002,

    // ==================== 4xxx: Gallery ====================
    /// Gallery image not found
    GalleryImageNotFound = 4001,
    /// Upload exceeds the size limit
    UploadTooLarge = 4002,
    /// Upload could not be read
    UploadReadFailed = 4003,

    // ==================== 5xxx: Transfer ====================
    /// Import payload is not a valid store document
    ImportInvalid = 5001,
    /// Export could not be written
    ExportFailed = 5002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Slot storage error
    StorageError = 9002,
    /// Persisted document could not be decoded
    StorageCorrupted = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationFailed => "Validation failed",

            ErrorCode::NotAuthenticated => "Sign in or enable demo mode first",
            ErrorCode::InvalidCredentials => "Wrong password",

            ErrorCode::BranchNotFound => "Branch not found",
            ErrorCode::InvalidSlug => "Slug must be lowercase letters, numbers, hyphens only",
            ErrorCode::NoActiveBranch => "Select a branch first",
            ErrorCode::SlugTaken => "Slug already in use",

            ErrorCode::MenuItemNotFound => "Menu item not found",
            ErrorCode::MenuItemNameRequired => "Item name required",

            ErrorCode::GalleryImageNotFound => "Gallery image not found",
            ErrorCode::UploadTooLarge => "File too large",
            ErrorCode::UploadReadFailed => "File could not be read",

            ErrorCode::ImportInvalid => "Invalid JSON file",
            ErrorCode::ExportFailed => "Export failed",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::StorageCorrupted => "Stored data is corrupted",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ErrorCode::ValidationFailed),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),

            2001 => Ok(ErrorCode::BranchNotFound),
            2002 => Ok(ErrorCode::InvalidSlug),
            2003 => Ok(ErrorCode::NoActiveBranch),
            2004 => Ok(ErrorCode::SlugTaken),

            3001 => Ok(ErrorCode::MenuItemNotFound),
            3002 => Ok(ErrorCode::MenuItemNameRequired),

            4001 => Ok(ErrorCode::GalleryImageNotFound),
            4002 => Ok(ErrorCode::UploadTooLarge),
            4003 => Ok(ErrorCode::UploadReadFailed),

            5001 => Ok(ErrorCode::ImportInvalid),
            5002 => Ok(ErrorCode::ExportFailed),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9003 => Ok(ErrorCode::StorageCorrupted),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
