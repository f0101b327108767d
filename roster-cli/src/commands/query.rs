//! Read-only commands: `get`, `list`, `budget`, `departments`, `top-managers`.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

use roster_core::{Employee, EmployeeId, EmployeeKind};
use roster_store::codec;

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "id")]
    id: i64,
    #[tabled(rename = "kind")]
    kind: &'static str,
    #[tabled(rename = "department")]
    department: String,
    #[tabled(rename = "salary")]
    salary: i64,
    #[tabled(rename = "factor")]
    factor: String,
}

impl From<&Employee> for EmployeeRow {
    fn from(e: &Employee) -> Self {
        let factor = match e.kind {
            EmployeeKind::Lead { score } => score.to_string(),
            _ => "-".to_string(),
        };
        Self {
            id: e.id.0,
            kind: e.kind.label(),
            department: e.department.to_string(),
            salary: e.compute_salary(),
            factor,
        }
    }
}

fn print_table<'a>(employees: impl IntoIterator<Item = &'a Employee>) {
    let rows: Vec<EmployeeRow> = employees.into_iter().map(EmployeeRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn print_json<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Result<()> {
    for e in employees {
        println!("{}", codec::encode(e)?);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// get
// ---------------------------------------------------------------------------

/// Arguments for `roster get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Employee id.
    pub id: i64,

    /// Emit the stored JSON object instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl GetArgs {
    pub fn run(self, path: &Path) -> Result<()> {
        let company = super::load(path)?;
        let Some(employee) = company.get_employee(EmployeeId(self.id)) else {
            bail!("employee {} not found", self.id);
        };
        if self.json {
            print_json([&*employee])
        } else {
            print_table([&*employee]);
            Ok(())
        }
    }
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

/// Arguments for `roster list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit one JSON object per line instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    pub fn run(self, path: &Path) -> Result<()> {
        let company = super::load(path)?;
        if self.json {
            return print_json(company.iter().map(|e| &**e));
        }
        if company.is_empty() {
            println!("No employees registered.");
            println!("Run: roster add base --id <id> --salary <n> --department <name>");
            return Ok(());
        }
        print_table(company.iter().map(|e| &**e));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// budget / departments / top-managers
// ---------------------------------------------------------------------------

/// Arguments for `roster budget`.
#[derive(Args, Debug)]
pub struct BudgetArgs {
    /// Department name.
    pub department: String,
}

impl BudgetArgs {
    pub fn run(self, path: &Path) -> Result<()> {
        let company = super::load(path)?;
        println!("{}", company.department_budget(&self.department));
        Ok(())
    }
}

pub fn departments(path: &Path) -> Result<()> {
    let company = super::load(path)?;
    for department in company.departments() {
        println!("{department}");
    }
    Ok(())
}

pub fn top_managers(path: &Path) -> Result<()> {
    let company = super::load(path)?;
    let managers = company.managers_with_most_factor();
    if managers.is_empty() {
        println!("No managers registered.");
        return Ok(());
    }
    print_table(managers.iter().map(|e| &**e));
    Ok(())
}
