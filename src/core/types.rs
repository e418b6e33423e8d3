// src/core/types.rs
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suppresses the inherent vowel of the consonant before it.
pub const VIRAMA: char = '\u{094d}';
/// The vocalic-R vowel sign. A consonant carrying it always reads as 2.
pub const RI_SIGN: char = '\u{0943}';
/// Anusvara, the nasalization mark.
pub const ANUSVARA: char = '\u{0902}';
/// The phonetic unit spelling the bare inherent vowel.
pub const INHERENT_VOWEL_UNIT: &str = "a";

/// Which path produced a transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Whole-phrase override lookup.
    Dictionary,
    /// Greedy phonetic tokenizer.
    Heuristic,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Dictionary => f.write_str("dictionary"),
            Method::Heuristic => f.write_str("heuristic"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transliteration {
    pub symbolic: String,
    pub method: Method,
}

/// What the decoder did with one symbol group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DigitStatus {
    Kept,
    /// Kept, but the digit comes from a fixed convention rather than the table.
    Warned,
    /// Dead consonant, contributes no digit.
    Dropped,
}

impl DigitStatus {
    /// Whether an entry with this status contributes to the digit sequence.
    pub fn counts(self) -> bool {
        !matches!(self, DigitStatus::Dropped)
    }
}

impl fmt::Display for DigitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitStatus::Kept => f.write_str("kept"),
            DigitStatus::Warned => f.write_str("warned"),
            DigitStatus::Dropped => f.write_str("dropped"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitLogEntry {
    /// The symbol text this entry covers, e.g. "क्" or "कृ".
    pub text: String,
    pub value: Option<u8>,
    pub status: DigitStatus,
}

impl DigitLogEntry {
    pub fn kept(text: impl Into<String>, value: u8) -> Self {
        Self { text: text.into(), value: Some(value), status: DigitStatus::Kept }
    }

    pub fn warned(text: impl Into<String>, value: u8) -> Self {
        Self { text: text.into(), value: Some(value), status: DigitStatus::Warned }
    }

    pub fn dropped(text: impl Into<String>) -> Self {
        Self { text: text.into(), value: None, status: DigitStatus::Dropped }
    }
}

/// Outcome of decoding one symbolic string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralResult {
    pub symbolic: String,
    pub log: Vec<DigitLogEntry>,
    /// Digits in reading order, i.e. the encounter order reversed.
    pub reversed: Vec<u8>,
    /// The reversed digits read as one decimal number, exact at any length.
    pub sum: BigUint,
    /// Always in 1..=12.
    pub rashi: u8,
}

/// Transliteration and decoding of the same phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub input: String,
    pub transliteration: Transliteration,
    pub numeral: NumeralResult,
}
