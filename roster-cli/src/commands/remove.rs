//! `roster remove <id>` and `roster prune --salary-above <n>`

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use roster_core::EmployeeId;

/// Arguments for `roster remove`.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Id of the employee to remove.
    pub id: i64,
}

impl RemoveArgs {
    pub fn run(self, path: &Path) -> Result<()> {
        let mut company = super::load(path)?;
        let removed = company
            .remove_employee(EmployeeId(self.id))
            .with_context(|| format!("cannot remove employee {}", self.id))?;
        super::save(path, &company)?;

        println!(
            "{} Removed employee {} from '{}'",
            "✓".green(),
            removed.id,
            removed.department
        );
        Ok(())
    }
}

/// Arguments for `roster prune`.
#[derive(Args, Debug)]
pub struct PruneArgs {
    /// Remove every employee whose salary is strictly greater than this.
    #[arg(long, value_name = "N")]
    pub salary_above: i64,

    /// Show who would be removed without saving.
    #[arg(long)]
    pub dry_run: bool,
}

impl PruneArgs {
    pub fn run(self, path: &Path) -> Result<()> {
        let mut company = super::load(path)?;
        let prefix = if self.dry_run { "[dry-run] " } else { "" };

        let mut removed = Vec::new();
        let mut cursor = company.cursor();
        while cursor.has_next() {
            let employee = cursor.advance()?;
            if employee.compute_salary() > self.salary_above {
                cursor.remove_current()?;
                removed.push(employee);
            }
        }

        if !self.dry_run && !removed.is_empty() {
            super::save(path, &company)?;
        }

        println!(
            "{prefix}{} Pruned {} employee(s) with salary above {}",
            "✓".green(),
            removed.len(),
            self.salary_above
        );
        for e in &removed {
            println!("  -  {} ({}, {})", e.id, e.department, e.compute_salary());
        }
        Ok(())
    }
}
