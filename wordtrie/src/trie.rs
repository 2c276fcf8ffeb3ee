//! # Word Trie
//!
//! The main trie data structure with add, contains, remove, and ordered
//! enumeration.

use std::fmt;
use std::iter::FusedIterator;

use serde_json::Value;
use tracing::{debug, trace, warn};
use wordtrie_error::{Error, Result};

use crate::node::Node;
use crate::word::{json_type, Word};

/// Prefix tree of words
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Trie {
    /// Root node, the empty prefix. Never pruned.
    pub(crate) root: Node,
    /// Number of stored words
    len: usize,
}

/// Result of removing a word below one node
#[derive(Debug, Clone, Copy)]
struct Removal {
    /// The node just visited is now childless and not a word
    prunable: bool,
    /// Edges detached so far
    pruned: usize,
}

/// Validate a word argument, tagging failures with the calling operation
fn validate<'w, W>(word: W, operation: &'static str) -> Result<Word<'w>>
where
    W: TryInto<Word<'w>, Error = Error>,
{
    word.try_into().map_err(|err| {
        let err = err.with_operation(operation);
        warn!(error = %err, "rejected word");
        err
    })
}

impl Trie {
    /// Create new empty trie
    pub fn new() -> Self {
        Trie {
            root: Node::new(),
            len: 0,
        }
    }

    /// Build a trie from a JSON array of strings.
    ///
    /// Fails with `InvalidInput` if the value is not an array or any element
    /// is not a string.
    pub fn from_json(value: &Value) -> Result<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(Error::invalid_input(format!(
                    "expected an array of words, found {}",
                    json_type(other)
                ))
                .with_operation("trie::from_json"));
            }
        };

        let mut trie = Trie::new();
        for (index, item) in items.iter().enumerate() {
            let word = validate(item, "trie::from_json")
                .map_err(|err| err.with_context("index", index.to_string()))?;
            trie.insert(word);
        }
        Ok(trie)
    }

    /// Number of stored words
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if trie holds no words
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    /// Remove every word
    pub fn clear(&mut self) {
        self.root = Node::new();
        self.len = 0;
    }

    /// Add a word. Returns `true` if it was not already stored.
    ///
    /// Adding the empty word marks the root itself.
    pub fn add<'w, W>(&mut self, word: W) -> Result<bool>
    where
        W: TryInto<Word<'w>, Error = Error>,
    {
        let word = validate(word, "trie::add")?;
        Ok(self.insert(word))
    }

    fn insert(&mut self, word: Word<'_>) -> bool {
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.child_or_insert(c);
        }

        let inserted = !current.set_word(true);
        if inserted {
            self.len += 1;
        }
        trace!(word = word.as_str(), inserted, "add");
        inserted
    }

    /// Check whether `word` is stored.
    ///
    /// A path that exists only as the prefix of longer words does not count.
    pub fn contains<'w, W>(&self, word: W) -> Result<bool>
    where
        W: TryInto<Word<'w>, Error = Error>,
    {
        let word = validate(word, "trie::contains")?;
        Ok(self.find(word).is_some_and(Node::is_word))
    }

    /// Node at the end of `word`'s path, if the whole path exists
    fn find(&self, word: Word<'_>) -> Option<&Node> {
        let mut current = &self.root;
        for c in word.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }

    /// Remove a word, pruning branches that no longer lead to any word.
    ///
    /// Removing a word that is not stored is a no-op. Returns `true` if the
    /// word was stored.
    pub fn remove<'w, W>(&mut self, word: W) -> Result<bool>
    where
        W: TryInto<Word<'w>, Error = Error>,
    {
        let word = validate(word, "trie::remove")?;

        if !self.find(word).is_some_and(Node::is_word) {
            trace!(word = word.as_str(), removed = false, "remove");
            return Ok(false);
        }

        let chars: Vec<char> = word.chars().collect();
        let removal = remove_below(&mut self.root, &chars);
        self.len -= 1;

        trace!(word = word.as_str(), removed = true, "remove");
        debug!(word = word.as_str(), pruned = removal.pruned, "pruned nodes");
        Ok(true)
    }

    /// All stored words in ascending character order
    pub fn sorted_words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut path = String::new();
        collect(&self.root, &mut path, &mut words);
        words
    }

    /// Lazy iterator over stored words, in the same order as `sorted_words`
    pub fn words(&self) -> Words<'_> {
        Words {
            stack: vec![(String::new(), &self.root)],
            remaining: self.len,
        }
    }
}

/// Clear the word flag at the end of `rest`, then detach every edge on the
/// way back up whose child no longer leads anywhere.
///
/// The caller guarantees the word is stored, so every edge on its path exists.
fn remove_below(node: &mut Node, rest: &[char]) -> Removal {
    let Some((&c, tail)) = rest.split_first() else {
        node.set_word(false);
        return Removal {
            prunable: node.is_leaf(),
            pruned: 0,
        };
    };

    let Some(child) = node.child_mut(c) else {
        unreachable!("corrupted trie: missing edge {:?} on the path of a stored word", c);
    };

    let below = remove_below(child, tail);
    if !below.prunable {
        return Removal {
            prunable: false,
            pruned: below.pruned,
        };
    }

    node.detach(c);
    Removal {
        prunable: node.is_prunable(),
        pruned: below.pruned + 1,
    }
}

/// Depth-first collection; a node's own word precedes its descendants
fn collect(node: &Node, path: &mut String, words: &mut Vec<String>) {
    if node.is_word() {
        words.push(path.clone());
    }
    for (c, child) in node.children() {
        path.push(c);
        collect(child, path, words);
        path.pop();
    }
}

/// Iterator over a trie's words in ascending order
pub struct Words<'t> {
    /// Pending nodes with their paths; the smallest sits on top
    stack: Vec<(String, &'t Node)>,
    remaining: usize,
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        while let Some((path, node)) = self.stack.pop() {
            for (c, child) in node.children().rev() {
                let mut child_path = String::with_capacity(path.len() + c.len_utf8());
                child_path.push_str(&path);
                child_path.push(c);
                self.stack.push((child_path, child));
            }

            if node.is_word() {
                self.remaining -= 1;
                return Some(path);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Words<'_> {}

impl FusedIterator for Words<'_> {}

impl<'a> FromIterator<&'a str> for Trie {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a> Extend<&'a str> for Trie {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            self.insert(Word::new(word));
        }
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.words()).finish()
    }
}
