//! Whole-file save and restore.
//!
//! Save writes every employee, one JSON object per line in id order, to a
//! `.tmp` sibling and renames it over the target. Restore decodes the whole
//! file before touching the company, so no lock is held during I/O.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use roster_core::{Company, Employee, SharedCompany};

use crate::codec;
use crate::error::{io_err, StoreError};

/// Atomically overwrite `path` with `employees`, one per line.
///
/// Parent directories are created as needed.
pub fn save_at<'a, I>(path: &Path, employees: I) -> Result<usize, StoreError>
where
    I: IntoIterator<Item = &'a Employee>,
{
    let mut contents = String::new();
    let mut count = 0;
    for employee in employees {
        contents.push_str(&codec::encode(employee)?);
        contents.push('\n');
        count += 1;
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }

    let tmp = tmp_path(path);
    std::fs::write(&tmp, &contents).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    tracing::info!(path = %path.display(), employees = count, "company saved");
    Ok(count)
}

/// Snapshot `company` under its read lock, then save without holding it.
pub fn save_shared_at(path: &Path, company: &SharedCompany) -> Result<usize, StoreError> {
    let snapshot: Vec<Arc<Employee>> = company.snapshot();
    save_at(path, snapshot.iter().map(Arc::as_ref))
}

/// Decode every employee stored at `path`.
///
/// A missing file yields no employees.
pub fn load_at(path: &Path) -> Result<Vec<Employee>, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no data file, nothing to restore");
            return Ok(Vec::new());
        }
        Err(e) => return Err(io_err(path, e)),
    };
    codec::decode_document(&contents)
}

/// Load `path` and add every employee to `company`.
///
/// Existing employees are kept. An id collision stops the restore with
/// `StoreError::Company(CompanyError::DuplicateKey)`; employees added before
/// it stay. Returns the number added.
pub fn restore_at(path: &Path, company: &mut Company) -> Result<usize, StoreError> {
    let employees = load_at(path)?;
    let added = company.add_all(employees)?;
    tracing::info!(path = %path.display(), employees = added, "company restored");
    Ok(added)
}

/// [`restore_at`] for a [`SharedCompany`]: decode first, then insert under a
/// single write guard.
pub fn restore_shared_at(path: &Path, company: &SharedCompany) -> Result<usize, StoreError> {
    let employees = load_at(path)?;
    let added = company.add_all(employees)?;
    tracing::info!(path = %path.display(), employees = added, "company restored");
    Ok(added)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
