//! Byte-indexed trie stored as a node arena.
//!
//! Children are `u32` handles into `nodes`; [`ABSENT`] marks a missing edge.
//! No failure links are built, so a scan restarts from the root at every
//! text offset.

use super::counters::Counters;

/// Sentinel child handle for "no edge".
pub const ABSENT: u32 = u32::MAX;

const ROOT: usize = 0;

#[derive(Debug, Clone)]
pub struct TrieNode {
    pub next: [u32; 256],
    pub terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            next: [ABSENT; 256],
            terminal: false,
        }
    }

    #[inline]
    pub fn child(&self, byte: u8) -> Option<usize> {
        match self.next[byte as usize] {
            ABSENT => None,
            idx => Some(idx as usize),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// A trie holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
        }
    }

    #[cfg(test)]
    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no pattern has been inserted.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Insert `pattern`, sharing existing prefixes. Empty patterns are ignored.
    pub fn insert(&mut self, pattern: &[u8]) {
        if pattern.is_empty() {
            return;
        }
        let mut node = ROOT;
        for &byte in pattern {
            node = match self.nodes[node].child(byte) {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes[node].next[byte as usize] = next as u32;
                    self.nodes.push(TrieNode::new());
                    next
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// Test whether any inserted pattern occurs in `text`.
    ///
    /// Every attempted transition counts one comparison, including the one
    /// that finds no edge.
    pub fn contains(&self, text: &[u8], counters: &mut Counters) -> bool {
        for start in 0..text.len() {
            let mut node = ROOT;
            for &byte in &text[start..] {
                counters.char_comparisons += 1;
                let Some(next) = self.nodes[node].child(byte) else {
                    break;
                };
                node = next;
                if self.nodes[node].terminal {
                    return true;
                }
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(patterns: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for p in patterns {
            trie.insert(p.as_bytes());
        }
        trie
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = trie_of(&["CAT", "CAR"]);
        // root, C, A, T, R
        assert_eq!(trie.len(), 5);
        let c = trie.nodes()[0].child(b'C').unwrap();
        let a = trie.nodes()[c].child(b'A').unwrap();
        assert!(trie.nodes()[a].child(b'T').is_some());
        assert!(trie.nodes()[a].child(b'R').is_some());
        assert!(!trie.nodes()[a].terminal);
    }

    #[test]
    fn child_handles_are_valid_or_absent() {
        let trie = trie_of(&["ABC", "ABD", "XY", "A"]);
        for node in trie.nodes() {
            for &handle in &node.next {
                assert!(handle == ABSENT || (handle as usize) < trie.len());
            }
        }
    }

    #[test]
    fn empty_pattern_is_ignored() {
        let trie = trie_of(&[""]);
        assert!(trie.is_empty());
        assert!(!trie.nodes()[0].terminal);
    }

    #[test]
    fn matches_from_a_later_offset() {
        let trie = trie_of(&["CAT", "CAR"]);
        let mut counters = Counters::new();
        assert!(trie.contains(b"SCARF", &mut counters));
        // offset 0: 'S' fails (1); offset 1: C, A, R (3)
        assert_eq!(counters.char_comparisons, 4);
    }

    #[test]
    fn prefix_is_reported_before_longer_pattern() {
        let trie = trie_of(&["AB", "ABCD"]);
        let mut counters = Counters::new();
        assert!(trie.contains(b"ABX", &mut counters));
        assert_eq!(counters.char_comparisons, 2);
    }

    #[test]
    fn restarts_at_every_offset() {
        let trie = trie_of(&["AAB"]);
        let mut counters = Counters::new();
        assert!(!trie.contains(b"AAAA", &mut counters));
        // offsets 0 and 1 walk A, A then fail on A (3 each);
        // offset 2 walks A, A then runs out of text (2); offset 3 walks A (1)
        assert_eq!(counters.char_comparisons, 3 + 3 + 2 + 1);
    }

    #[test]
    fn empty_trie_never_matches() {
        let trie = Trie::new();
        let mut counters = Counters::new();
        assert!(!trie.contains(b"ANYTHING", &mut counters));
    }
}
