//! # Trie nodes
//!
//! A node stands for one prefix. It owns its children outright, keyed by the
//! next character, and carries a flag saying whether the prefix itself is a
//! stored word.

use std::collections::BTreeMap;

/// One position in the prefix space
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Child edges, ordered by character code
    children: BTreeMap<char, Node>,
    /// The path from the root to here is a stored word
    is_word: bool,
}

impl Node {
    /// Create a node with no children that is not a word
    pub fn new() -> Self {
        Node::default()
    }

    /// Check if the path to this node is a stored word
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Child reached by `c`, if the edge exists
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }

    /// Children in ascending character order
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &Node)> {
        self.children.iter().map(|(c, child)| (*c, child))
    }

    /// Check if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A childless non-word node carries no information and must not be kept
    pub fn is_prunable(&self) -> bool {
        self.is_leaf() && !self.is_word
    }

    /// Number of nodes in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.values().map(Node::count).sum::<usize>()
    }

    pub(crate) fn child_mut(&mut self, c: char) -> Option<&mut Node> {
        self.children.get_mut(&c)
    }

    /// Child reached by `c`, created empty if missing
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut Node {
        self.children.entry(c).or_default()
    }

    /// Drop the edge for `c` together with its subtree
    pub(crate) fn detach(&mut self, c: char) -> Option<Node> {
        self.children.remove(&c)
    }

    /// Set the word flag, returning its previous value
    pub(crate) fn set_word(&mut self, is_word: bool) -> bool {
        std::mem::replace(&mut self.is_word, is_word)
    }
}
