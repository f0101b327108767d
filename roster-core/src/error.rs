//! Error types for roster-core.

use thiserror::Error;

use crate::types::EmployeeId;

/// Contract violations reported by [`Company`](crate::Company) and its cursor.
///
/// None of these are transient; retrying the same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompanyError {
    /// `add_employee` with an id that is already registered.
    #[error("employee {id} already exists")]
    DuplicateKey { id: EmployeeId },

    /// `remove_employee` with an id that is not registered.
    #[error("employee {id} not found")]
    NotFound { id: EmployeeId },

    /// `remove_current` without a preceding, unconsumed `advance`.
    #[error("cursor has no current employee to remove")]
    IllegalState,

    /// `advance` on an exhausted cursor.
    #[error("cursor is exhausted")]
    NoElement,
}
