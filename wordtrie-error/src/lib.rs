//! # wordtrie-error
//!
//! Unified error handling for the wordtrie workspace.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong (e.g. `InvalidInput`)
//! - **Error Context**: operation name plus key-value pairs for locating the cause
//! - **Error Source**: the underlying cause, wrapped without leaking its type
//!
//! ## Usage
//!
//! ```rust
//! use wordtrie_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::InvalidInput, "word is absent")
//!         .with_operation("trie::add")
//!         .with_context("reason", "absent"))
//! }
//!
//! assert_eq!(example().unwrap_err().kind(), ErrorKind::InvalidInput);
//! ```
//!
//! ## Principles
//!
//! - Fallible functions return `Result<T, wordtrie_error::Error>`
//! - Underlying causes are attached with `set_source(err)`
//! - Routine absence (a word not found) is a return value, never an error

mod error;
mod kind;

pub use error::Error;
pub use kind::ErrorKind;

/// Result type alias using the wordtrie Error
pub type Result<T> = std::result::Result<T, Error>;
