use crate::core::tables::{self, TableSet};
use crate::core::trie::PhoneticTrie;
use crate::core::types::{Method, Transliteration, INHERENT_VOWEL_UNIT, VIRAMA};
use std::sync::Arc;
use tracing::{debug, trace};

/// Latin phonetic spelling to Devanagari converter.
///
/// Holds no per-call state; one instance can serve any number of threads.
#[derive(Clone, Debug)]
pub struct Transliterator {
    tables: Arc<TableSet>,
    trie: PhoneticTrie,
}

impl Transliterator {
    pub fn new(tables: Arc<TableSet>) -> Self {
        let trie = PhoneticTrie::from_units(&tables.phonetic_units);
        Self { tables, trie }
    }

    /// Transliterates a full phrase, preferring the override dictionary.
    pub fn transliterate(&self, text: &str) -> Transliteration {
        let lower = tables::normalize(text);

        if let Some(symbolic) = self.tables.lookup_override(&lower) {
            debug!(input = %lower, "override dictionary hit");
            return Transliteration { symbolic: symbolic.to_string(), method: Method::Dictionary };
        }

        let symbolic = self.transliterate_heuristic(&lower);
        debug!(input = %lower, output = %symbolic, "heuristic transliteration");
        Transliteration { symbolic, method: Method::Heuristic }
    }

    /// Greedy longest-match scan with consonant tracking. Expects normalized input.
    fn transliterate_heuristic(&self, lower: &str) -> String {
        let mut result = String::new();
        let mut prev_was_consonant = false;
        let mut i = 0;

        while i < lower.len() {
            let rest = &lower[i..];
            let Some(unit) = self.trie.longest_match(rest) else {
                // Unknown character: drop it.
                let skipped = rest.chars().next().map_or(1, char::len_utf8);
                trace!(position = i, "skipping unrecognized character");
                i += skipped;
                continue;
            };

            let token = unit.output;
            let is_consonant = self.tables.is_plain_consonant(token);

            if is_consonant && prev_was_consonant {
                result.push(VIRAMA);
            }
            result.push_str(token);

            let pattern = &rest[..unit.pattern_len];
            prev_was_consonant = if pattern == INHERENT_VOWEL_UNIT
                || tables::has_vowel_sign(token)
                || tables::is_nasalization_mark(token)
            {
                false
            } else {
                is_consonant
            };

            i += unit.pattern_len;
        }

        // Final schwa deletion.
        if prev_was_consonant {
            result.push(VIRAMA);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transliterator() -> Transliterator {
        Transliterator::new(TableSet::shared_builtin())
    }

    #[test]
    fn test_override_dictionary() {
        let t = transliterator();
        let out = t.transliterate("bjp");
        assert_eq!(out.symbolic, "भाजपा");
        assert_eq!(out.method, Method::Dictionary);

        let padded = t.transliterate("  General Electric \n");
        assert_eq!(padded.symbolic, "जेनेरल् एलेकट्रिक्");
        assert_eq!(padded.method, Method::Dictionary);
    }

    #[test]
    fn test_final_schwa_deletion() {
        let out = transliterator().transliterate("kamal");
        assert_eq!(out.method, Method::Heuristic);
        assert_eq!(out.symbolic, "कमल्");
    }

    #[test]
    fn test_virama_between_consonants() {
        let t = transliterator();
        assert_eq!(t.transliterate("krishna").symbolic, "क्रिश्न");
        assert_eq!(t.transliterate("ram").symbolic, "रम्");
        assert_eq!(t.transliterate("satya").symbolic, "सत्य");
    }

    #[test]
    fn test_vowel_signs_and_longest_units() {
        let t = transliterator();
        assert_eq!(t.transliterate("shiva").symbolic, "शिव");
        assert_eq!(t.transliterate("geeta").symbolic, "गीत");
        assert_eq!(t.transliterate("raama").symbolic, "राम");
        assert_eq!(t.transliterate("bhoomi").symbolic, "भूमि");
    }

    #[test]
    fn test_atomic_units_reset_consonant_state() {
        let t = transliterator();
        assert_eq!(t.transliterate("kshama").symbolic, "क्षम");
        assert_eq!(t.transliterate("mitra").symbolic, "मित्र");
        assert_eq!(t.transliterate("gang").symbolic, "गं");
    }

    #[test]
    fn test_unrecognized_characters_dropped() {
        let t = transliterator();
        assert_eq!(t.transliterate("k1a2m!").symbolic, "कम्");
        let out = t.transliterate("123 ?!");
        assert_eq!(out.symbolic, "");
        assert_eq!(out.method, Method::Heuristic);
        assert_eq!(t.transliterate("").symbolic, "");
        assert_eq!(t.transliterate("नमस्ते").symbolic, "");
    }
}
