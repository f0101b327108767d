//! Employee <-> JSON codec.
//!
//! Each employee is one self-describing JSON object. The `className` field
//! names the variant:
//!
//! ```text
//! {"className":"Hourly","id":123,"basicSalary":1000,"category":"QA","rate":100,"hours":10}
//! {"className":"Lead","id":120,"basicSalary":2000,"category":"QA","score":2.0}
//! ```
//!
//! Older files spell some names differently (`department`, `wage`, `percent`,
//! `sales`, `factor`, and the `Employee` / `WageEmployee` / `SalesPerson` /
//! `Manager` class names, bare or qualified as `telran.employees.Manager`).
//! Those spellings are accepted on decode; encode always writes the current
//! ones.

use serde::{Deserialize, Serialize};

use roster_core::{Department, Employee, EmployeeId, EmployeeKind, Score};

use crate::error::StoreError;

/// On-disk shape of one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "className")]
enum EmployeeRecord {
    #[serde(alias = "Employee", alias = "telran.employees.Employee")]
    Base {
        id: i64,
        #[serde(rename = "basicSalary")]
        basic_salary: i64,
        #[serde(rename = "category", alias = "department")]
        department: String,
    },
    #[serde(alias = "WageEmployee", alias = "telran.employees.WageEmployee")]
    Hourly {
        id: i64,
        #[serde(rename = "basicSalary")]
        basic_salary: i64,
        #[serde(rename = "category", alias = "department")]
        department: String,
        #[serde(alias = "wage")]
        rate: i64,
        hours: i64,
    },
    #[serde(alias = "SalesPerson", alias = "telran.employees.SalesPerson")]
    SalesAgent {
        id: i64,
        #[serde(rename = "basicSalary")]
        basic_salary: i64,
        #[serde(rename = "category", alias = "department")]
        department: String,
        #[serde(alias = "wage")]
        rate: i64,
        hours: i64,
        #[serde(rename = "commissionPercent", alias = "percent")]
        commission_percent: f64,
        #[serde(rename = "salesVolume", alias = "sales")]
        sales_volume: i64,
    },
    #[serde(alias = "Manager", alias = "telran.employees.Manager")]
    Lead {
        id: i64,
        #[serde(rename = "basicSalary")]
        basic_salary: i64,
        #[serde(rename = "category", alias = "department")]
        department: String,
        #[serde(alias = "factor")]
        score: f64,
    },
}

impl From<&Employee> for EmployeeRecord {
    fn from(e: &Employee) -> Self {
        let id = e.id.0;
        let basic_salary = e.basic_salary;
        let department = e.department.0.clone();
        match e.kind {
            EmployeeKind::Base => EmployeeRecord::Base {
                id,
                basic_salary,
                department,
            },
            EmployeeKind::Hourly { rate, hours } => EmployeeRecord::Hourly {
                id,
                basic_salary,
                department,
                rate,
                hours,
            },
            EmployeeKind::SalesAgent {
                rate,
                hours,
                commission_percent,
                sales_volume,
            } => EmployeeRecord::SalesAgent {
                id,
                basic_salary,
                department,
                rate,
                hours,
                commission_percent,
                sales_volume,
            },
            EmployeeKind::Lead { score } => EmployeeRecord::Lead {
                id,
                basic_salary,
                department,
                score: score.value(),
            },
        }
    }
}

impl From<EmployeeRecord> for Employee {
    fn from(record: EmployeeRecord) -> Self {
        let (id, basic_salary, department, kind) = match record {
            EmployeeRecord::Base {
                id,
                basic_salary,
                department,
            } => (id, basic_salary, department, EmployeeKind::Base),
            EmployeeRecord::Hourly {
                id,
                basic_salary,
                department,
                rate,
                hours,
            } => (id, basic_salary, department, EmployeeKind::Hourly { rate, hours }),
            EmployeeRecord::SalesAgent {
                id,
                basic_salary,
                department,
                rate,
                hours,
                commission_percent,
                sales_volume,
            } => (
                id,
                basic_salary,
                department,
                EmployeeKind::SalesAgent {
                    rate,
                    hours,
                    commission_percent,
                    sales_volume,
                },
            ),
            EmployeeRecord::Lead {
                id,
                basic_salary,
                department,
                score,
            } => (
                id,
                basic_salary,
                department,
                EmployeeKind::Lead {
                    score: Score(score),
                },
            ),
        };
        Employee {
            id: EmployeeId(id),
            basic_salary,
            department: Department(department),
            kind,
        }
    }
}

/// Encode one employee as a single-line JSON object.
pub fn encode(employee: &Employee) -> Result<String, StoreError> {
    Ok(serde_json::to_string(&EmployeeRecord::from(employee))?)
}

/// Decode one JSON object into an employee.
pub fn decode(json: &str) -> Result<Employee, StoreError> {
    let record: EmployeeRecord = serde_json::from_str(json)?;
    Ok(record.into())
}

/// Decode a whole data file.
///
/// Accepts one object per line (blank lines skipped) or a single bracketed
/// array, which may span several lines. An empty document yields no
/// employees.
pub fn decode_document(contents: &str) -> Result<Vec<Employee>, StoreError> {
    let trimmed = contents.trim();
    if trimmed.starts_with('[') {
        let records: Vec<EmployeeRecord> = serde_json::from_str(trimmed)?;
        return Ok(records.into_iter().map(Employee::from).collect());
    }

    let mut employees = Vec::new();
    for (idx, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: EmployeeRecord = serde_json::from_str(line).map_err(|source| {
            StoreError::Decode {
                line: idx + 1,
                source,
            }
        })?;
        employees.push(record.into());
    }
    Ok(employees)
}
