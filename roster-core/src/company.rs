//! Single-owner company registry.
//!
//! # Indexes
//!
//! ```text
//! employees          EmployeeId -> Employee          (authoritative, ordered by id)
//! departments        Department -> [Employee]        (insertion order within department)
//! managers_by_factor Score      -> [Employee]        (leads only, ordered by score)
//! ```
//!
//! The two secondary indexes are derived from `employees`. Every removal,
//! whether through [`Company::remove_employee`] or
//! [`CompanyCursor::remove_current`], goes through the same `take` routine, so
//! both paths leave the indexes in the same state. A group whose member list
//! becomes empty is dropped from its map immediately.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;

use crate::error::CompanyError;
use crate::types::{Department, Employee, EmployeeId, Score};

/// In-memory registry of employees with department and manager-factor indexes.
#[derive(Debug, Default)]
pub struct Company {
    employees: BTreeMap<EmployeeId, Arc<Employee>>,
    departments: BTreeMap<Department, Vec<Arc<Employee>>>,
    managers_by_factor: BTreeMap<Score, Vec<Arc<Employee>>>,
}

impl Company {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Register `employee` in all three indexes.
    ///
    /// Returns `CompanyError::DuplicateKey` if the id is already present; the
    /// registry is left untouched in that case.
    pub fn add_employee(&mut self, employee: Employee) -> Result<(), CompanyError> {
        let id = employee.id;
        let slot = match self.employees.entry(id) {
            Entry::Occupied(_) => return Err(CompanyError::DuplicateKey { id }),
            Entry::Vacant(slot) => slot,
        };

        let employee = Arc::new(employee);
        slot.insert(Arc::clone(&employee));
        self.departments
            .entry(employee.department.clone())
            .or_default()
            .push(Arc::clone(&employee));
        if let Some(score) = employee.score() {
            self.managers_by_factor
                .entry(score)
                .or_default()
                .push(Arc::clone(&employee));
        }

        tracing::debug!(id = %id, department = %employee.department, "employee added");
        Ok(())
    }

    /// Insert every employee in order, stopping at the first failure.
    ///
    /// Employees inserted before the failure stay registered. Returns the
    /// number inserted.
    pub fn add_all<I>(&mut self, employees: I) -> Result<usize, CompanyError>
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut added = 0;
        for employee in employees {
            self.add_employee(employee)?;
            added += 1;
        }
        Ok(added)
    }

    /// Remove the employee with `id` from every index and return it.
    ///
    /// Returns `CompanyError::NotFound` if no such employee exists.
    pub fn remove_employee(&mut self, id: EmployeeId) -> Result<Arc<Employee>, CompanyError> {
        self.take(id).ok_or(CompanyError::NotFound { id })
    }

    /// Remove every employee for which `keep` returns `false`, walking in id
    /// order through a [`CompanyCursor`]. Returns how many were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Employee) -> bool,
    {
        let mut cursor = self.cursor();
        let mut removed = 0;
        while let Ok(employee) = cursor.advance() {
            if keep(employee.as_ref()) {
                continue;
            }
            match cursor.remove_current() {
                Ok(_) => removed += 1,
                // Not reachable: advance just set the current element.
                Err(e) => {
                    tracing::warn!(id = %employee.id, error = %e, "retain skipped employee")
                }
            }
        }
        removed
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Look up an employee; `None` when absent.
    pub fn get_employee(&self, id: EmployeeId) -> Option<Arc<Employee>> {
        self.employees.get(&id).cloned()
    }

    /// Sum of `compute_salary()` over the live members of `department`.
    /// Zero for an unknown department; saturates at the `i64` bounds.
    pub fn department_budget(&self, department: &str) -> i64 {
        self.department_members(department)
            .iter()
            .fold(0i64, |total, e| total.saturating_add(e.compute_salary()))
    }

    /// Departments that currently have at least one member, sorted ascending.
    pub fn departments(&self) -> Vec<Department> {
        self.departments.keys().cloned().collect()
    }

    /// Members of `department` in insertion order; empty when unknown.
    pub fn department_members(&self, department: &str) -> &[Arc<Employee>] {
        self.departments
            .get(department)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every lead sharing the highest score, in insertion order.
    /// Empty when there are no leads.
    pub fn managers_with_most_factor(&self) -> Vec<Arc<Employee>> {
        self.managers_by_factor
            .last_key_value()
            .map(|(_, managers)| managers.clone())
            .unwrap_or_default()
    }

    /// Score groups in ascending score order.
    pub fn score_groups(&self) -> impl Iterator<Item = (Score, &[Arc<Employee>])> + '_ {
        self.managers_by_factor
            .iter()
            .map(|(score, managers)| (*score, managers.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Read-only traversal in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Employee>> + '_ {
        self.employees.values()
    }

    /// Open a single-pass cursor that can remove the employee it last returned.
    pub fn cursor(&mut self) -> CompanyCursor<'_> {
        CompanyCursor {
            company: self,
            last: None,
            current: None,
        }
    }

    // -----------------------------------------------------------------------
    // Index maintenance
    // -----------------------------------------------------------------------

    /// Detach `id` from the primary index and prune it from both secondary
    /// indexes. Shared by `remove_employee` and the cursor.
    fn take(&mut self, id: EmployeeId) -> Option<Arc<Employee>> {
        let employee = self.employees.remove(&id)?;

        if let Some(members) = self.departments.get_mut(&employee.department) {
            remove_member(members, id);
            if members.is_empty() {
                self.departments.remove(&employee.department);
            }
        }

        if let Some(score) = employee.score() {
            if let Some(managers) = self.managers_by_factor.get_mut(&score) {
                remove_member(managers, id);
                if managers.is_empty() {
                    self.managers_by_factor.remove(&score);
                }
            }
        }

        tracing::debug!(id = %id, department = %employee.department, "employee removed");
        Some(employee)
    }
}

fn remove_member(members: &mut Vec<Arc<Employee>>, id: EmployeeId) {
    if let Some(pos) = members.iter().position(|e| e.id == id) {
        members.remove(pos);
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

/// Single-pass traversal over a [`Company`] in ascending id order.
///
/// The cursor holds the company's exclusive borrow for its whole lifetime and
/// resumes strictly after the last id it returned, so removing through it
/// never skips or repeats an employee. Obtain a new cursor to traverse again.
#[derive(Debug)]
pub struct CompanyCursor<'a> {
    company: &'a mut Company,
    /// Resume point: the id most recently returned by `advance`.
    last: Option<EmployeeId>,
    /// Removal target; cleared by `remove_current`.
    current: Option<EmployeeId>,
}

impl CompanyCursor<'_> {
    /// `true` while an employee remains that has not been returned yet.
    pub fn has_next(&self) -> bool {
        self.peek().is_some()
    }

    /// Return the next employee and make it the removal target.
    pub fn advance(&mut self) -> Result<Arc<Employee>, CompanyError> {
        let employee = self.peek().cloned().ok_or(CompanyError::NoElement)?;
        self.last = Some(employee.id);
        self.current = Some(employee.id);
        Ok(employee)
    }

    /// Remove the employee returned by the last `advance`.
    ///
    /// Fails with `CompanyError::IllegalState` if `advance` has not been
    /// called, or if the current employee was already removed.
    pub fn remove_current(&mut self) -> Result<Arc<Employee>, CompanyError> {
        let id = self.current.take().ok_or(CompanyError::IllegalState)?;
        self.company.take(id).ok_or(CompanyError::NotFound { id })
    }

    fn peek(&self) -> Option<&Arc<Employee>> {
        match self.last {
            None => self.company.employees.values().next(),
            Some(last) => self
                .company
                .employees
                .range((Excluded(last), Unbounded))
                .next()
                .map(|(_, e)| e),
        }
    }
}

impl Iterator for CompanyCursor<'_> {
    type Item = Arc<Employee>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().ok()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
