// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::engine::KatapayadiEngine;
pub use crate::core::tables::TableSet;
pub use crate::core::types::{
    DigitLogEntry, DigitStatus, Evaluation, Method, NumeralResult, Transliteration,
};
pub use crate::error::TableError;

lazy_static::lazy_static! {
    static ref DEFAULT_ENGINE: KatapayadiEngine = KatapayadiEngine::new();
}

/// Transliterates a phrase with the built-in tables.
pub fn transliterate(text: &str) -> Transliteration {
    DEFAULT_ENGINE.transliterate(text)
}

/// Decodes a symbolic string with the built-in tables.
pub fn calculate(symbolic: &str) -> NumeralResult {
    DEFAULT_ENGINE.calculate(symbolic)
}
