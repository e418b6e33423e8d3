use crate::core::{converter::Transliterator, decoder::NumeralDecoder, tables::TableSet};
use crate::core::types::{Evaluation, NumeralResult, Transliteration};
use crate::error::TableError;
use crate::persistence::load_tables;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

// The engine pairs a transliterator and a decoder over one shared table set.
#[derive(Clone, Debug)]
pub struct KatapayadiEngine {
    tables: Arc<TableSet>,
    transliterator: Transliterator,
    decoder: NumeralDecoder,
}

impl KatapayadiEngine {
    /// Engine over the built-in tables.
    pub fn new() -> Self {
        Self::from_shared(TableSet::shared_builtin())
    }

    /// Engine over custom tables. They are validated first.
    pub fn with_tables(tables: TableSet) -> Result<Self, TableError> {
        tables.validate()?;
        Ok(Self::from_shared(Arc::new(tables)))
    }

    fn from_shared(tables: Arc<TableSet>) -> Self {
        Self {
            transliterator: Transliterator::new(Arc::clone(&tables)),
            decoder: NumeralDecoder::new(Arc::clone(&tables)),
            tables,
        }
    }

    /// Loads tables from `path`, falling back to the built-in set on any error.
    pub fn from_file_or_default(path: &Path) -> Self {
        match load_tables(path) {
            Ok(tables) => {
                info!(path = %path.display(), "loaded katapayadi tables");
                Self::from_shared(Arc::new(tables))
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to built-in tables");
                Self::new()
            }
        }
    }

    pub fn tables(&self) -> &TableSet {
        &self.tables
    }

    pub fn transliterate(&self, text: &str) -> Transliteration {
        self.transliterator.transliterate(text)
    }

    pub fn calculate(&self, symbolic: &str) -> NumeralResult {
        self.decoder.calculate(symbolic)
    }

    /// Transliterates a phrase and decodes the result.
    pub fn evaluate(&self, text: &str) -> Evaluation {
        let transliteration = self.transliterate(text);
        let numeral = self.calculate(&transliteration.symbolic);
        Evaluation { input: text.to_string(), transliteration, numeral }
    }
}

impl Default for KatapayadiEngine {
    fn default() -> Self {
        Self::new()
    }
}
