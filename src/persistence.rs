// File: src/persistence.rs
use crate::core::tables::TableSet;
use crate::error::TableError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableFormat {
    Json,
    Bincode,
}

fn format_for(path: &Path) -> TableFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
        _ => TableFormat::Bincode,
    }
}

/// Writes a table set atomically. `.json` paths get JSON, anything else a
/// bincode snapshot.
pub fn save_tables(tables: &TableSet, path: &Path) -> Result<(), TableError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match format_for(path) {
            TableFormat::Json => serde_json::to_writer_pretty(&mut writer, tables)?,
            TableFormat::Bincode => bincode::serialize_into(&mut writer, tables)?,
        }
        writer.flush()?;
    }

    temp_file.persist(path)?;
    Ok(())
}

/// Reads and validates a table set.
pub fn load_tables(path: &Path) -> Result<TableSet, TableError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let tables: TableSet = match format_for(path) {
        TableFormat::Json => serde_json::from_reader(reader)?,
        TableFormat::Bincode => bincode::deserialize_from(reader)?,
    };
    tables.validate()?;
    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.json");
        let tables = TableSet::builtin();
        save_tables(&tables, &path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"consonant_digits\""));
        assert_eq!(load_tables(&path).unwrap(), tables);
    }

    #[test]
    fn test_bincode_round_trip_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tables.bin");
        let mut tables = TableSet::builtin();
        tables.overrides.insert("isro".to_string(), "इसरो".to_string());
        save_tables(&tables, &path).unwrap();
        assert_eq!(load_tables(&path).unwrap(), tables);
    }

    #[test]
    fn test_load_rejects_invalid_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let mut tables = TableSet::builtin();
        tables.consonant_digits.insert("क".to_string(), 10);
        save_tables(&tables, &path).unwrap();
        assert!(matches!(load_tables(&path), Err(TableError::InvalidDigit { .. })));
    }

    #[test]
    fn test_load_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_tables(&path), Err(TableError::Json(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(load_tables(&path), Err(TableError::Io(_))));
    }
}
