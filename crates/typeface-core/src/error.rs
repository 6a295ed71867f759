// this_file: crates/typeface-core/src/error.rs

//! Error types for typeface loading

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TypefaceError>;

/// Main error type returned by the typeface cache
#[derive(Debug, Error)]
pub enum TypefaceError {
    /// No variant of the name resolved to a readable, parseable asset
    #[error("Font not found: {family} ({reason})")]
    FontNotFound { family: String, reason: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl TypefaceError {
    /// Shorthand for building a [`TypefaceError::FontNotFound`]
    pub fn not_found(family: impl Into<String>, reason: impl Into<String>) -> Self {
        TypefaceError::FontNotFound {
            family: family.into(),
            reason: reason.into(),
        }
    }

    /// True when a caller should fall back to a default family
    pub fn is_not_found(&self) -> bool {
        matches!(self, TypefaceError::FontNotFound { .. })
    }
}

/// Errors raised while turning asset bytes into a typeface
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Invalid font data: {0}")]
    InvalidData(String),

    #[error("Font asset too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
