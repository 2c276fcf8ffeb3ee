use super::*;

use proptest::prelude::*;
use std::collections::BTreeSet;

/// Walk the whole tree checking its shape against the trie's bookkeeping
fn validate_tree(t: &Trie) {
    let mut stack: Vec<(&Node, bool)> = vec![(&t.root, true)];
    let mut word_count = 0usize;

    while let Some((node, is_root)) = stack.pop() {
        if !is_root {
            assert!(!node.is_prunable(), "childless non-word node survived");
        }
        if node.is_word() {
            word_count += 1;
        }
        stack.extend(node.children().map(|(_, child)| (child, false)));
    }

    assert_eq!(word_count, t.len(), "word flags must match Trie::len");
}

#[derive(Clone, Debug)]
enum Op {
    Add(String),
    Remove(String),
    Contains(String),
}

fn word_strategy() -> impl Strategy<Value = String> + Clone {
    // A small alphabet so words share prefixes and removals hit real paths
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'é', '日']), 0..=6)
        .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>())
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let word = word_strategy();
    let op = prop_oneof![
        50 => word.clone().prop_map(Op::Add),
        30 => word.clone().prop_map(Op::Remove),
        20 => word.clone().prop_map(Op::Contains),
    ];
    prop::collection::vec(op, 0..=300)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in ops_strategy()) {
        let mut t = Trie::new();
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Add(word) => {
                    let added = t.add(word.as_str()).unwrap();
                    prop_assert_eq!(added, m.insert(word.clone()));
                    prop_assert!(t.contains(word.as_str()).unwrap());
                }
                Op::Remove(word) => {
                    let removed = t.remove(word.as_str()).unwrap();
                    prop_assert_eq!(removed, m.remove(&word));
                    prop_assert!(!t.contains(word.as_str()).unwrap());
                }
                Op::Contains(word) => {
                    prop_assert_eq!(t.contains(word.as_str()).unwrap(), m.contains(&word));
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_tree(&t);
        let expected: Vec<String> = m.iter().cloned().collect();
        prop_assert_eq!(t.sorted_words(), expected.clone());
        prop_assert_eq!(t.words().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_add_then_remove_restores_empty(words in prop::collection::vec(word_strategy(), 0..=50)) {
        let mut t = Trie::new();
        for word in &words {
            t.add(word).unwrap();
        }
        for word in &words {
            t.remove(word).unwrap();
        }

        prop_assert!(t.is_empty());
        prop_assert_eq!(t.node_count(), 1);
        prop_assert_eq!(t, Trie::new());
    }

    #[test]
    fn prop_insertion_order_is_irrelevant(words in prop::collection::vec(word_strategy(), 0..=50)) {
        let forward: Trie = words.iter().map(String::as_str).collect();
        let backward: Trie = words.iter().rev().map(String::as_str).collect();

        validate_tree(&forward);
        prop_assert_eq!(forward, backward);
    }
}
