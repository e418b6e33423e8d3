// src/core/tables.rs
use crate::core::types::{ANUSVARA, VIRAMA};
use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Dependent vowel signs occupy this block, from AA up to AU.
const VOWEL_SIGN_FIRST: char = '\u{093e}';
const VOWEL_SIGN_LAST: char = '\u{094c}';

/// One entry of the phonetic unit table: Latin spelling and its symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneticUnit {
    pub pattern: String,
    pub output: String,
}

/// The static data both the transliterator and the decoder read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSet {
    pub consonant_digits: HashMap<String, u8>,
    /// Multi-letter conjuncts with their own digit. They are never plain consonants.
    pub atomic_conjuncts: Vec<String>,
    pub vowels: HashSet<String>,
    pub phonetic_units: Vec<PhoneticUnit>,
    pub overrides: HashMap<String, String>,
}

const CONSONANT_DIGITS: &[(&str, u8)] = &[
    ("क", 1), ("ख", 2), ("ग", 3), ("घ", 4), ("ङ", 5),
    ("च", 6), ("छ", 7), ("ज", 8), ("झ", 9), ("ञ", 0),
    ("ट", 1), ("ठ", 2), ("ड", 3), ("ढ", 4), ("ण", 5),
    ("त", 6), ("थ", 7), ("द", 8), ("ध", 9), ("न", 0),
    ("प", 1), ("फ", 2), ("ब", 3), ("भ", 4), ("म", 5),
    ("य", 1), ("र", 2), ("ल", 3), ("व", 4), ("श", 5), ("ष", 6), ("स", 7), ("ह", 8),
    ("क्ष", 6), ("ज्ञ", 0),
];

const ATOMIC_CONJUNCTS: &[&str] = &["क्ष", "ज्ञ"];

const VOWELS: &[&str] = &[
    "अ", "आ", "इ", "ई", "उ", "ऊ", "ए", "ऐ", "ओ", "औ", "अं", "अः", "ऋ",
];

const PHONETIC_UNITS: &[(&str, &str)] = &[
    ("aa", "ा"), ("ai", "ै"), ("au", "ौ"), ("a", ""), ("i", "ि"),
    ("ee", "ी"), ("u", "ु"), ("oo", "ू"), ("e", "े"), ("o", "ो"),
    ("ksh", "क्ष"), ("tra", "त्र"), ("gy", "ज्ञ"), ("jny", "ज्ञ"), ("ng", "ं"),
    ("sh", "श"), ("ch", "च"), ("th", "थ"), ("ph", "फ"), ("gh", "घ"),
    ("jh", "झ"), ("dh", "ध"), ("bh", "भ"), ("kh", "ख"),
    ("k", "क"), ("g", "ग"), ("j", "ज"), ("t", "त"), ("d", "द"),
    ("n", "न"), ("p", "प"), ("f", "फ"), ("b", "ब"), ("m", "म"),
    ("y", "य"), ("r", "र"), ("l", "ल"), ("v", "व"), ("w", "व"),
    ("s", "स"), ("h", "ह"),
];

const OVERRIDES: &[(&str, &str)] = &[
    ("microsoft", "माइक्रोसॉफ्ट्"),
    ("congress", "काँग्रेस"),
    ("bjp", "भाजपा"),
    ("inc", "इंडियन नेशनल काँग्रेस"),
    ("general electric", "जेनेरल् एलेकट्रिक्"),
];

lazy_static::lazy_static! {
    static ref BUILTIN: Arc<TableSet> = Arc::new(TableSet::builtin());
}

impl TableSet {
    /// The default tables shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            consonant_digits: CONSONANT_DIGITS
                .iter()
                .map(|&(s, d)| (s.to_string(), d))
                .collect(),
            atomic_conjuncts: ATOMIC_CONJUNCTS.iter().map(|s| s.to_string()).collect(),
            vowels: VOWELS.iter().map(|s| s.to_string()).collect(),
            phonetic_units: PHONETIC_UNITS
                .iter()
                .map(|&(pattern, output)| PhoneticUnit {
                    pattern: pattern.to_string(),
                    output: output.to_string(),
                })
                .collect(),
            overrides: OVERRIDES
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Shared handle to the built-in tables, initialised on first use.
    pub fn shared_builtin() -> Arc<TableSet> {
        Arc::clone(&BUILTIN)
    }

    pub fn validate(&self) -> Result<(), TableError> {
        for (symbol, &digit) in &self.consonant_digits {
            if digit > 9 {
                return Err(TableError::InvalidDigit { symbol: symbol.clone(), digit });
            }
        }
        for unit in &self.phonetic_units {
            if unit.pattern.is_empty() {
                return Err(TableError::EmptyPattern { output: unit.output.clone() });
            }
        }
        for conjunct in &self.atomic_conjuncts {
            if !self.consonant_digits.contains_key(conjunct) {
                return Err(TableError::UnknownConjunct(conjunct.clone()));
            }
        }
        for key in self.overrides.keys() {
            if *key != normalize(key) {
                return Err(TableError::UnnormalizedOverride(key.clone()));
            }
        }
        Ok(())
    }

    pub fn digit(&self, symbol: &str) -> Option<u8> {
        self.consonant_digits.get(symbol).copied()
    }

    pub fn is_consonant(&self, symbol: &str) -> bool {
        self.consonant_digits.contains_key(symbol)
    }

    /// A consonant from the digit table that is not one of the atomic conjuncts.
    pub fn is_plain_consonant(&self, symbol: &str) -> bool {
        self.is_consonant(symbol) && !self.atomic_conjuncts.iter().any(|c| c == symbol)
    }

    pub fn is_vowel(&self, symbol: &str) -> bool {
        self.vowels.contains(symbol)
    }

    pub fn lookup_override(&self, normalized: &str) -> Option<&str> {
        self.overrides.get(normalized).map(String::as_str)
    }

    /// Symbols spelled with more than one code point, longest first.
    /// The decoder groups these before classifying.
    pub fn compound_symbols(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = self
            .consonant_digits
            .keys()
            .chain(self.vowels.iter())
            .map(String::as_str)
            .filter(|s| s.chars().count() > 1)
            .collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        symbols.dedup();
        symbols
    }
}

/// Trim and lower-case, the form override keys are stored in.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether the symbol carries a dependent vowel sign.
pub fn has_vowel_sign(symbol: &str) -> bool {
    symbol
        .chars()
        .any(|c| (VOWEL_SIGN_FIRST..=VOWEL_SIGN_LAST).contains(&c))
}

pub fn is_nasalization_mark(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    chars.next() == Some(ANUSVARA) && chars.next().is_none()
}

pub fn is_virama(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    chars.next() == Some(VIRAMA) && chars.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        let tables = TableSet::builtin();
        assert!(tables.validate().is_ok());
        assert_eq!(tables.consonant_digits.len(), 35);
        assert_eq!(tables.vowels.len(), 13);
    }

    #[test]
    fn test_atomic_conjuncts_are_not_plain() {
        let tables = TableSet::builtin();
        assert!(tables.is_consonant("क्ष"));
        assert!(!tables.is_plain_consonant("क्ष"));
        assert!(!tables.is_plain_consonant("ज्ञ"));
        assert!(tables.is_plain_consonant("क"));
        assert_eq!(tables.digit("क्ष"), Some(6));
        assert_eq!(tables.digit("ज्ञ"), Some(0));
    }

    #[test]
    fn test_compound_symbols_longest_first() {
        let tables = TableSet::builtin();
        let compounds = tables.compound_symbols();
        assert!(compounds.contains(&"क्ष"));
        assert!(compounds.contains(&"अं"));
        assert!(compounds.windows(2).all(|w| w[0].len() >= w[1].len()));
        assert!(!compounds.contains(&"क"));
    }

    #[test]
    fn test_mark_classification() {
        assert!(has_vowel_sign("ा"));
        assert!(has_vowel_sign("ौ"));
        assert!(has_vowel_sign("ृ"));
        assert!(!has_vowel_sign("ं"));
        assert!(!has_vowel_sign("त्र"));
        assert!(is_nasalization_mark("ं"));
        assert!(is_virama("्"));
        assert!(!is_virama("क्"));
    }

    #[test]
    fn test_validate_rejects_bad_digit() {
        let mut tables = TableSet::builtin();
        tables.consonant_digits.insert("क".to_string(), 12);
        assert!(matches!(
            tables.validate(),
            Err(TableError::InvalidDigit { digit: 12, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_unnormalized_override() {
        let mut tables = TableSet::builtin();
        tables.overrides.insert(" BJP".to_string(), "भाजपा".to_string());
        assert!(matches!(tables.validate(), Err(TableError::UnnormalizedOverride(_))));
    }

    #[test]
    fn test_validate_rejects_missing_conjunct() {
        let mut tables = TableSet::builtin();
        tables.consonant_digits.remove("ज्ञ");
        assert!(matches!(tables.validate(), Err(TableError::UnknownConjunct(_))));
    }
}
