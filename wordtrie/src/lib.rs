//! # Word Trie
//!
//! A prefix tree of words.
//!
//! Supports:
//! - Adding words, including the empty word
//! - Exact membership lookup (a stored prefix is not a match)
//! - Removal that prunes branches no longer leading to any word
//! - Enumeration in ascending character order
//!
//! ```rust
//! use wordtrie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.add("dog")?;
//! trie.add("cat")?;
//! trie.add("ant")?;
//!
//! assert!(trie.contains("cat")?);
//! assert_eq!(trie.sorted_words(), vec!["ant", "cat", "dog"]);
//! # Ok::<(), wordtrie::Error>(())
//! ```

pub mod error;
pub mod node;
pub mod trie;
pub mod word;

#[cfg(test)]
mod proptests;

pub use error::WordError;
pub use node::Node;
pub use trie::{Trie, Words};
pub use word::Word;
pub use wordtrie_error::{Error, ErrorKind, Result};
