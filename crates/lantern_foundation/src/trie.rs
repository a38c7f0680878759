//! Prefix completion index.
//!
//! A trie over literal strings (command verbs and fixed phrases). Children
//! are kept in a `BTreeMap` so enumeration order is deterministic.
//!
//! Nodes are pruned eagerly on deletion: apart from the root, no node exists
//! that has no children and does not end a stored word.

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_end: bool,
    /// The full string spelled by the path from the root to this node.
    prefix: String,
}

impl TrieNode {
    fn with_prefix(prefix: String) -> Self {
        Self {
            children: BTreeMap::new(),
            is_end: false,
            prefix,
        }
    }

    fn is_prunable(&self) -> bool {
        self.children.is_empty() && !self.is_end
    }

    /// Unmarks the word spelled by `rest` below this node.
    ///
    /// Returns true if a stored word was removed.
    fn remove(&mut self, mut rest: std::str::Chars<'_>) -> bool {
        let Some(c) = rest.next() else {
            let was_end = self.is_end;
            self.is_end = false;
            return was_end;
        };
        let Some(child) = self.children.get_mut(&c) else {
            return false;
        };
        let removed = child.remove(rest);
        if removed && child.is_prunable() {
            self.children.remove(&c);
        }
        removed
    }

    /// Appends every word stored strictly below this node, in pre-order.
    fn collect_descendants(&self, out: &mut Vec<String>) {
        for child in self.children.values() {
            if child.is_end {
                out.push(child.prefix.clone());
            }
            child.collect_descendants(out);
        }
    }
}

/// A set of words supporting prefix enumeration.
#[derive(Clone, Debug, Default)]
pub struct CompletionTrie {
    root: TrieNode,
    len: usize,
}

impl CompletionTrie {
    /// Creates an empty trie.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no words are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a word. Inserting an existing word is a no-op.
    ///
    /// Returns true if the word was not already stored.
    pub fn insert(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for (offset, c) in word.char_indices() {
            let end = offset + c.len_utf8();
            node = node
                .children
                .entry(c)
                .or_insert_with(|| TrieNode::with_prefix(word[..end].to_string()));
        }
        let added = !node.is_end;
        node.is_end = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Inserts every word in `words`.
    pub fn insert_all<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.insert(word);
        }
    }

    /// Removes a word, pruning nodes that no longer lead to any word.
    ///
    /// Words that extend `word` are kept. Returns true if `word` was stored.
    pub fn delete(&mut self, word: &str) -> bool {
        let removed = self.root.remove(word.chars());
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Returns true if `word` is stored.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|node| node.is_end)
    }

    /// Returns every stored word starting with `prefix`.
    ///
    /// `prefix` itself comes first when stored, followed by its extensions in
    /// depth-first order with children visited in ascending character order.
    #[must_use]
    pub fn search(&self, prefix: &str) -> Vec<String> {
        let Some(node) = self.find(prefix) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        if node.is_end {
            out.push(node.prefix.clone());
        }
        node.collect_descendants(&mut out);
        out
    }

    fn find(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }
}
