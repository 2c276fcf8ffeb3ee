//! # Word Trie Demo
//!
//! Walks through the trie operations. Set `RUST_LOG=trace` to see every
//! add and remove.

use serde_json::json;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use wordtrie::{Result, Trie};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // =========================================
    // Empty trie
    // =========================================
    let mut trie = Trie::new();
    info!(words = trie.len(), nodes = trie.node_count(), "empty trie");

    // =========================================
    // Insertion and ordered enumeration
    // =========================================
    for word in ["dog", "cat", "ant", "car", "cart"] {
        trie.add(word)?;
    }
    info!(words = ?trie.sorted_words(), nodes = trie.node_count(), "after adding");

    for word in ["car", "ca", "cart", "horse"] {
        let present = trie.contains(word)?;
        info!(word, present, "lookup");
    }

    // =========================================
    // Deletion with pruning
    // =========================================
    trie.remove("car")?;
    info!(words = ?trie.sorted_words(), nodes = trie.node_count(), "removed 'car'");

    trie.remove("cart")?;
    info!(words = ?trie.sorted_words(), nodes = trie.node_count(), "removed 'cart'");

    let removed = trie.remove("missing")?;
    info!(removed, "removing an absent word is a no-op");

    // =========================================
    // Empty word
    // =========================================
    trie.add("")?;
    info!(words = ?trie.sorted_words(), "added the empty word");

    // =========================================
    // Dynamic input
    // =========================================
    let loaded = Trie::from_json(&json!(["zebra", "yak", "xerus"]))?;
    info!(words = ?loaded, "loaded from JSON");

    for value in [json!(null), json!(42)] {
        if let Err(err) = trie.add(&value) {
            error!(%err, "rejected");
        }
    }

    info!(words = trie.len(), nodes = trie.node_count(), "done");
    Ok(())
}
