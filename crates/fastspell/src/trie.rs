// Prefix tree holding the dictionary vocabulary

use fastspell_core::character::lower_word;

/// Default number of words returned by [`PrefixTree::words_with_prefix`].
pub const DEFAULT_PREFIX_LIMIT: usize = 5;

/// One character position in the tree.
///
/// Children are kept in the order they were first created. That order is
/// what [`PrefixTree::words_with_prefix`] walks, so enumeration follows
/// dictionary insertion order rather than alphabetical order.
#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: Vec<(char, TrieNode)>,
    terminal: bool,
}

impl TrieNode {
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .iter()
            .find(|(key, _)| *key == c)
            .map(|(_, node)| node)
    }

    fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        let index = match self.children.iter().position(|(key, _)| *key == c) {
            Some(index) => index,
            None => {
                self.children.push((c, TrieNode::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }
}

/// Lower-cased word store with exact lookup and prefix enumeration.
#[derive(Debug, Default, Clone)]
pub struct PrefixTree {
    root: TrieNode,
    word_count: usize,
}

impl PrefixTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word (lower-cased). Returns `true` if it was not present yet.
    ///
    /// Empty words are ignored.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = &mut self.root;
        for c in lower_word(word).chars() {
            node = node.child_or_insert(c);
        }
        if node.terminal {
            return false;
        }
        node.terminal = true;
        self.word_count += 1;
        true
    }

    /// Whether the lower-cased `word` is a stored word.
    pub fn contains(&self, word: &str) -> bool {
        self.contains_exact(&lower_word(word))
    }

    /// Whether `word` is stored exactly as given, without case folding.
    pub fn contains_exact(&self, word: &str) -> bool {
        !word.is_empty() && self.find_node(word).is_some_and(|node| node.terminal)
    }

    /// Up to `limit` stored words starting with the lower-cased `prefix`.
    ///
    /// Depth-first in child insertion order; the prefix itself comes first
    /// when it is a word. Returns nothing if no word has this prefix.
    pub fn words_with_prefix(&self, prefix: &str, limit: usize) -> Vec<String> {
        let mut results = Vec::new();
        if limit == 0 {
            return results;
        }
        let mut buffer = lower_word(prefix);
        if let Some(node) = self.find_node(&buffer) {
            collect_words(node, &mut buffer, limit, &mut results);
        }
        results
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }
}

fn collect_words(node: &TrieNode, buffer: &mut String, limit: usize, out: &mut Vec<String>) {
    if node.terminal {
        out.push(buffer.clone());
    }
    for (c, child) in &node.children {
        if out.len() >= limit {
            return;
        }
        buffer.push(*c);
        collect_words(child, buffer, limit, out);
        buffer.pop();
    }
}
