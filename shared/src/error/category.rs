//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Session gate errors (1xxx)
    Session,
    /// Branch errors (2xxx)
    Branch,
    /// Menu item errors (3xxx)
    Menu,
    /// Gallery errors (4xxx)
    Gallery,
    /// Import / export errors (5xxx)
    Transfer,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Session,
            2000..3000 => Self::Branch,
            3000..4000 => Self::Menu,
            4000..5000 => Self::Gallery,
            5000..6000 => Self::Transfer,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Session => "session",
            Self::Branch => "branch",
            Self::Menu => "menu",
            Self::Gallery => "gallery",
            Self::Transfer => "transfer",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
