//! Domain types for the employee roster.
//!
//! An [`Employee`] is a plain value: a unique id, a basic salary, a
//! department and an [`EmployeeKind`] carrying the variant-specific pay
//! terms. Only [`EmployeeKind::Lead`] has a [`Score`], and that capability is
//! what places a record in the company's top-score index.

use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Primary key of an employee. Never reused or mutated once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EmployeeId(pub i64);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A strongly-typed department label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Department(pub String);

impl Department {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Department {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Department {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::borrow::Borrow<str> for Department {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Manager factor of a [`EmployeeKind::Lead`].
///
/// Ordered by IEEE-754 `totalOrder`, so it can key a `BTreeMap`. Under that
/// order `-0.0 < 0.0` and a positive NaN sorts above `+inf`.
#[derive(Debug, Clone, Copy)]
pub struct Score(pub f64);

impl Score {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<f64> for Score {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

/// Variant-specific pay terms.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeKind {
    /// Salary is the basic salary.
    Base,
    /// Basic salary plus `rate * hours`.
    Hourly { rate: i64, hours: i64 },
    /// Hourly pay plus a commission on sales volume.
    SalesAgent {
        rate: i64,
        hours: i64,
        commission_percent: f64,
        sales_volume: i64,
    },
    /// Salary is the basic salary; the score feeds the top-score index.
    Lead { score: Score },
}

impl EmployeeKind {
    /// The score of a lead, `None` for every other variant.
    pub fn score(&self) -> Option<Score> {
        match self {
            EmployeeKind::Lead { score } => Some(*score),
            _ => None,
        }
    }

    /// Short variant label used in listings.
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeKind::Base => "base",
            EmployeeKind::Hourly { .. } => "hourly",
            EmployeeKind::SalesAgent { .. } => "sales",
            EmployeeKind::Lead { .. } => "lead",
        }
    }
}

/// A single employee record.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: EmployeeId,
    pub basic_salary: i64,
    pub department: Department,
    pub kind: EmployeeKind,
}

impl Employee {
    pub fn base(id: i64, basic_salary: i64, department: impl Into<Department>) -> Self {
        Self {
            id: EmployeeId(id),
            basic_salary,
            department: department.into(),
            kind: EmployeeKind::Base,
        }
    }

    pub fn hourly(
        id: i64,
        basic_salary: i64,
        department: impl Into<Department>,
        rate: i64,
        hours: i64,
    ) -> Self {
        Self {
            id: EmployeeId(id),
            basic_salary,
            department: department.into(),
            kind: EmployeeKind::Hourly { rate, hours },
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn sales_agent(
        id: i64,
        basic_salary: i64,
        department: impl Into<Department>,
        rate: i64,
        hours: i64,
        commission_percent: f64,
        sales_volume: i64,
    ) -> Self {
        Self {
            id: EmployeeId(id),
            basic_salary,
            department: department.into(),
            kind: EmployeeKind::SalesAgent {
                rate,
                hours,
                commission_percent,
                sales_volume,
            },
        }
    }

    pub fn lead(
        id: i64,
        basic_salary: i64,
        department: impl Into<Department>,
        score: f64,
    ) -> Self {
        Self {
            id: EmployeeId(id),
            basic_salary,
            department: department.into(),
            kind: EmployeeKind::Lead {
                score: Score(score),
            },
        }
    }

    /// Monthly salary for this employee's variant.
    ///
    /// The sales commission is computed in floating point and the whole sum
    /// is truncated toward zero. Integer parts saturate at the `i64` bounds.
    pub fn compute_salary(&self) -> i64 {
        match &self.kind {
            EmployeeKind::Base | EmployeeKind::Lead { .. } => self.basic_salary,
            EmployeeKind::Hourly { rate, hours } => {
                self.basic_salary.saturating_add(rate.saturating_mul(*hours))
            }
            EmployeeKind::SalesAgent {
                rate,
                hours,
                commission_percent,
                sales_volume,
            } => {
                let hourly = self.basic_salary.saturating_add(rate.saturating_mul(*hours));
                (hourly as f64 + *sales_volume as f64 * commission_percent / 100.0) as i64
            }
        }
    }

    pub fn score(&self) -> Option<Score> {
        self.kind.score()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
