pub mod add;
pub mod query;
pub mod remove;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use roster_core::Company;
use roster_store::file;

/// Load the company stored at `path` (empty if the file does not exist).
pub(crate) fn load(path: &Path) -> Result<Company> {
    let mut company = Company::new();
    file::restore_at(path, &mut company)
        .with_context(|| format!("failed to load roster from {}", path.display()))?;
    Ok(company)
}

/// Overwrite `path` with the current contents of `company`.
pub(crate) fn save(path: &Path, company: &Company) -> Result<()> {
    file::save_at(path, company.iter().map(Arc::as_ref))
        .with_context(|| format!("failed to save roster to {}", path.display()))?;
    Ok(())
}
