//! # Validation errors for words
//!
//! These are the concrete causes behind an `ErrorKind::InvalidInput`. They are
//! attached as the source of the unified [`Error`](wordtrie_error::Error).

use std::str::Utf8Error;
use thiserror::Error;

/// Why a word argument was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("word is absent")]
    Absent,

    #[error("expected a string, found {found}")]
    NotText { found: &'static str },

    #[error("word is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}

impl WordError {
    /// Short machine-readable reason, used as error context
    pub fn reason(&self) -> &'static str {
        match self {
            WordError::Absent => "absent",
            WordError::NotText { .. } => "not_text",
            WordError::InvalidUtf8(_) => "invalid_utf8",
        }
    }
}
