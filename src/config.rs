// src/config.rs
use std::path::{Path, PathBuf};

/// Environment variable naming a table file.
pub const TABLES_ENV: &str = "KATAPAYADI_TABLES";

const CONFIG_SUBDIR: &str = "katapayadi";
const TABLES_FILE: &str = "tables.json";

/// Finds the table file to load.
///
/// Search order:
/// 1. `explicit` argument (if provided)
/// 2. `KATAPAYADI_TABLES` environment variable
/// 3. `<config dir>/katapayadi/tables.json`, if it exists
///
/// `None` means the built-in tables should be used.
pub fn resolve_table_path(explicit: Option<&Path>) -> Option<PathBuf> {
    resolve_with(explicit, std::env::var_os(TABLES_ENV).map(PathBuf::from), dirs::config_dir())
}

fn resolve_with(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = from_env.filter(|p| !p.as_os_str().is_empty()) {
        return Some(path);
    }
    config_dir
        .map(|dir| dir.join(CONFIG_SUBDIR).join(TABLES_FILE))
        .filter(|path| path.is_file())
}
