//! `roster add base|hourly|sales|lead`

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;

use roster_core::Employee;

/// Fields shared by every employee variant.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Unique employee id.
    #[arg(long)]
    pub id: i64,

    /// Basic monthly salary.
    #[arg(long)]
    pub salary: i64,

    /// Department the employee belongs to.
    #[arg(long, short = 'd')]
    pub department: String,
}

#[derive(Args, Debug)]
pub struct HourlyArgs {
    /// Pay per hour.
    #[arg(long)]
    pub rate: i64,

    /// Hours worked.
    #[arg(long)]
    pub hours: i64,
}

#[derive(Subcommand, Debug)]
pub enum AddCommand {
    /// Employee paid the basic salary only.
    Base {
        #[command(flatten)]
        common: CommonArgs,
    },

    /// Basic salary plus hourly pay.
    Hourly {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        hourly: HourlyArgs,
    },

    /// Hourly employee with a sales commission.
    Sales {
        #[command(flatten)]
        common: CommonArgs,
        #[command(flatten)]
        hourly: HourlyArgs,
        /// Commission in percent of sales volume.
        #[arg(long)]
        commission_percent: f64,
        /// Sales volume the commission applies to.
        #[arg(long)]
        sales_volume: i64,
    },

    /// Manager with a factor; the highest factor is reported by `top-managers`.
    Lead {
        #[command(flatten)]
        common: CommonArgs,
        /// Manager factor.
        #[arg(long)]
        score: f64,
    },
}

impl AddCommand {
    fn into_employee(self) -> Employee {
        match self {
            AddCommand::Base { common } => Employee::base(common.id, common.salary, common.department),
            AddCommand::Hourly { common, hourly } => Employee::hourly(
                common.id,
                common.salary,
                common.department,
                hourly.rate,
                hourly.hours,
            ),
            AddCommand::Sales {
                common,
                hourly,
                commission_percent,
                sales_volume,
            } => Employee::sales_agent(
                common.id,
                common.salary,
                common.department,
                hourly.rate,
                hourly.hours,
                commission_percent,
                sales_volume,
            ),
            AddCommand::Lead { common, score } => {
                Employee::lead(common.id, common.salary, common.department, score)
            }
        }
    }
}

pub fn run(path: &Path, command: AddCommand) -> Result<()> {
    let employee = command.into_employee();
    let id = employee.id;
    let salary = employee.compute_salary();

    let mut company = super::load(path)?;
    company
        .add_employee(employee)
        .with_context(|| format!("cannot add employee {id}"))?;
    super::save(path, &company)?;

    println!("{} Added employee {id} (salary {salary})", "✓".green());
    Ok(())
}
