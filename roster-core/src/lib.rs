//! Roster core library — employee records and the multi-index company registry.
//!
//! - [`types`] — [`Employee`], [`EmployeeKind`] and the key newtypes
//! - [`company`] — [`Company`], the single-owner registry, and its [`CompanyCursor`]
//! - [`shared`] — [`SharedCompany`], the reader/writer-locked variant
//! - [`error`] — [`CompanyError`]

pub mod company;
pub mod error;
pub mod shared;
pub mod types;

pub use company::{Company, CompanyCursor};
pub use error::CompanyError;
pub use shared::SharedCompany;
pub use types::{Department, Employee, EmployeeId, EmployeeKind, Score};
