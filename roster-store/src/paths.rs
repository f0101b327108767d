//! Data file location.
//!
//! ```text
//! ~/.roster/
//!   company.jsonl     (one JSON employee per line)
//! ```

use std::path::{Path, PathBuf};

use crate::error::StoreError;

pub const DATA_DIR: &str = ".roster";
pub const DATA_FILE: &str = "company.jsonl";

/// `<home>/.roster/company.jsonl` — pure, no I/O.
pub fn data_path_at(home: &Path) -> PathBuf {
    home.join(DATA_DIR).join(DATA_FILE)
}

/// `data_path_at` convenience wrapper using `dirs::home_dir()`.
pub fn data_path() -> Result<PathBuf, StoreError> {
    let home = dirs::home_dir().ok_or(StoreError::HomeNotFound)?;
    Ok(data_path_at(&home))
}
