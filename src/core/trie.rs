// --- File: src/core/trie.rs
use crate::core::tables::PhoneticUnit;
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<u8, usize>,
    /// Index into `outputs` when a phonetic unit ends here.
    unit: Option<usize>,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: HashMap::new(), unit: None }
    }
}

/// Byte trie over phonetic unit patterns, answering longest-prefix queries.
///
/// Walking the trie and remembering the deepest terminal node gives the same
/// answer as trying every pattern longest-first.
#[derive(Clone, Debug)]
pub struct PhoneticTrie {
    nodes: Vec<TrieNode>,
    outputs: Vec<String>,
}

/// A successful match at some input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitMatch<'a> {
    pub pattern_len: usize,
    pub output: &'a str,
}

impl PhoneticTrie {
    pub fn new() -> Self {
        Self { nodes: vec![TrieNode::new()], outputs: Vec::new() }
    }

    pub fn from_units(units: &[PhoneticUnit]) -> Self {
        let mut trie = Self::new();
        for unit in units {
            trie.insert(&unit.pattern, &unit.output);
        }
        trie
    }

    /// Inserts a pattern. A later insert of the same pattern replaces the output.
    /// O(k) where k is the pattern length.
    pub fn insert(&mut self, pattern: &str, output: &str) {
        if pattern.is_empty() {
            return;
        }
        let mut node_idx = 0;
        for &byte in pattern.as_bytes() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }

        match self.nodes[node_idx].unit {
            Some(existing) => self.outputs[existing] = output.to_string(),
            None => {
                self.outputs.push(output.to_string());
                self.nodes[node_idx].unit = Some(self.outputs.len() - 1);
            }
        }
    }

    /// Longest pattern that is a prefix of `input`.
    pub fn longest_match(&self, input: &str) -> Option<UnitMatch<'_>> {
        let mut node_idx = 0;
        let mut best = None;
        for (depth, &byte) in input.as_bytes().iter().enumerate() {
            match self.nodes[node_idx].children.get(&byte) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(unit) = self.nodes[node_idx].unit {
                best = Some(UnitMatch { pattern_len: depth + 1, output: &self.outputs[unit] });
            }
        }
        best
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }
}

impl Default for PhoneticTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(pattern: &str, output: &str) -> PhoneticUnit {
        PhoneticUnit { pattern: pattern.to_string(), output: output.to_string() }
    }

    #[test]
    fn test_longest_match_wins() {
        let trie = PhoneticTrie::from_units(&[unit("s", "स"), unit("sh", "श"), unit("ksh", "क्ष"), unit("k", "क")]);
        assert_eq!(trie.longest_match("shiva").map(|m| m.output), Some("श"));
        assert_eq!(trie.longest_match("shiva").map(|m| m.pattern_len), Some(2));
        assert_eq!(trie.longest_match("kshama").map(|m| m.output), Some("क्ष"));
        assert_eq!(trie.longest_match("ksa").map(|m| m.output), Some("क"));
        assert_eq!(trie.longest_match("xyz"), None);
        assert_eq!(trie.longest_match(""), None);
    }

    #[test]
    fn test_empty_output_still_matches() {
        let trie = PhoneticTrie::from_units(&[unit("a", ""), unit("aa", "ा")]);
        let m = trie.longest_match("ab").unwrap();
        assert_eq!(m.pattern_len, 1);
        assert_eq!(m.output, "");
        assert_eq!(trie.longest_match("aab").unwrap().output, "ा");
    }

    #[test]
    fn test_reinsert_replaces_output() {
        let mut trie = PhoneticTrie::new();
        trie.insert("w", "व");
        trie.insert("w", "व़");
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.longest_match("w").unwrap().output, "व़");
    }

    #[test]
    fn test_non_ascii_input_has_no_match() {
        let trie = PhoneticTrie::from_units(&[unit("a", "")]);
        assert_eq!(trie.longest_match("é"), None);
    }
}
