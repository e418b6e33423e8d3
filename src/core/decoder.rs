// File: src/core/decoder.rs
use crate::core::tables::{self, TableSet};
use crate::core::types::{DigitLogEntry, NumeralResult, RI_SIGN, VIRAMA};
use num_bigint::BigUint;
use std::sync::Arc;
use tracing::{debug, trace};

/// Katapayadi digit extraction over Devanagari text.
#[derive(Clone, Debug)]
pub struct NumeralDecoder {
    tables: Arc<TableSet>,
    /// Multi-code-point symbols (atomic conjuncts, अं, अः), longest first.
    compounds: Vec<String>,
}

impl NumeralDecoder {
    pub fn new(tables: Arc<TableSet>) -> Self {
        let compounds = tables.compound_symbols().into_iter().map(str::to_string).collect();
        Self { tables, compounds }
    }

    /// Splits text into symbols. Decomposed spellings of the atomic conjuncts
    /// become one symbol so they are classified with their own digit.
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut symbols = Vec::new();
        let mut i = 0;
        while i < text.len() {
            let rest = &text[i..];
            let len = self
                .compounds
                .iter()
                .find(|c| rest.starts_with(c.as_str()))
                .map(String::len)
                .or_else(|| rest.chars().next().map(char::len_utf8))
                .unwrap_or(1);
            symbols.push(&rest[..len]);
            i += len;
        }
        symbols
    }

    /// Decodes a symbolic string into its digit log, numeral and rashi.
    /// Unrecognized symbols are ignored; this never fails.
    pub fn calculate(&self, symbolic: &str) -> NumeralResult {
        let symbols = self.segment(symbolic);
        let log = self.scan(&symbols);

        let mut reversed: Vec<u8> = log.iter().filter_map(|entry| entry.value).collect();
        reversed.reverse();

        let sum = assemble(&reversed);
        let rashi = rashi_of(&sum);
        debug!(input = %symbolic, sum = %sum, rashi, "decoded numeral");

        NumeralResult { symbolic: symbolic.to_string(), log, reversed, sum, rashi }
    }

    fn scan(&self, symbols: &[&str]) -> Vec<DigitLogEntry> {
        let tables = &self.tables;
        let mut log = Vec::new();
        let mut i = 0;

        while i < symbols.len() {
            let c = symbols[i];
            let n = symbols.get(i + 1).copied();

            if tables.is_vowel(c) {
                log.push(DigitLogEntry::kept(c, 0));
                i += 1;
                continue;
            }

            let Some(digit) = tables.digit(c) else {
                trace!(symbol = c, "ignoring symbol without digit");
                i += 1;
                continue;
            };

            match n {
                Some(n) if is_mark(n, RI_SIGN) => {
                    log.push(DigitLogEntry::warned(format!("{c}{n}"), 2));
                    i += 2;
                }
                Some(n) if tables::is_virama(n) => {
                    let continues = symbols
                        .get(i + 2)
                        .is_some_and(|nn| tables.is_consonant(nn) || tables.is_vowel(nn));
                    if continues {
                        log.push(DigitLogEntry::kept(format!("{c}{VIRAMA}"), digit));
                        i += 2;
                        // Only the first consonant of a cluster counts.
                        if symbols.get(i).is_some_and(|s| tables.is_plain_consonant(s)) {
                            trace!(symbol = symbols[i], "merged into cluster");
                            i += 1;
                        }
                    } else {
                        trace!(symbol = c, "dead consonant");
                        log.push(DigitLogEntry::dropped(format!("{c}{VIRAMA}")));
                        i += 2;
                    }
                }
                _ => {
                    log.push(DigitLogEntry::kept(c, digit));
                    i += 1;
                    while i < symbols.len()
                        && !tables.is_consonant(symbols[i])
                        && !tables.is_vowel(symbols[i])
                    {
                        i += 1;
                    }
                }
            }
        }

        log
    }
}

fn is_mark(symbol: &str, mark: char) -> bool {
    let mut chars = symbol.chars();
    chars.next() == Some(mark) && chars.next().is_none()
}

/// Reads the digits as one decimal number. No digits reads as 0.
pub fn assemble(digits: &[u8]) -> BigUint {
    let text: Vec<u8> = digits.iter().map(|d| b'0' + d % 10).collect();
    BigUint::parse_bytes(&text, 10).unwrap_or_default()
}

/// `sum mod 12`, with 0 mapped to 12.
pub fn rashi_of(sum: &BigUint) -> u8 {
    let rem = (sum % 12u32).to_u32_digits().first().copied().unwrap_or(0) as u8;
    match rem {
        0 => 12,
        r => r,
    }
}
