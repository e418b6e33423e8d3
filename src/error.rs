// src/error.rs

/// Failures while loading, validating or saving a table set.
///
/// The transliterator and decoder themselves never fail; only the
/// configuration layer reports errors.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("i/o error on table file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON table file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid binary table snapshot: {0}")]
    Bincode(#[from] bincode::Error),
    #[error("failed to persist table file: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("digit for consonant {symbol:?} must be 0-9, got {digit}")]
    InvalidDigit { symbol: String, digit: u8 },
    #[error("phonetic unit producing {output:?} has an empty pattern")]
    EmptyPattern { output: String },
    #[error("atomic conjunct {0:?} has no digit in the consonant table")]
    UnknownConjunct(String),
    #[error("override key {0:?} is not trimmed and lower-cased")]
    UnnormalizedOverride(String),
}
