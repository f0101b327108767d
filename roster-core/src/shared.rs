//! Reader/writer-locked company.
//!
//! Queries take the shared lock and may run together; mutations take the
//! exclusive lock. A cursor walk runs entirely under one exclusive guard.
//! Guards are released on every exit path, including unwinding.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::company::{Company, CompanyCursor};
use crate::error::CompanyError;
use crate::types::{Department, Employee, EmployeeId};

/// A [`Company`] safe to share between threads (usually behind an `Arc`).
#[derive(Debug, Default)]
pub struct SharedCompany {
    inner: RwLock<Company>,
}

impl SharedCompany {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> Company {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    // -----------------------------------------------------------------------
    // Writers
    // -----------------------------------------------------------------------

    pub fn add_employee(&self, employee: Employee) -> Result<(), CompanyError> {
        self.write().add_employee(employee)
    }

    /// Insert a batch under a single exclusive guard. See [`Company::add_all`].
    pub fn add_all<I>(&self, employees: I) -> Result<usize, CompanyError>
    where
        I: IntoIterator<Item = Employee>,
    {
        self.write().add_all(employees)
    }

    pub fn remove_employee(&self, id: EmployeeId) -> Result<Arc<Employee>, CompanyError> {
        self.write().remove_employee(id)
    }

    pub fn retain<F>(&self, keep: F) -> usize
    where
        F: FnMut(&Employee) -> bool,
    {
        self.write().retain(keep)
    }

    /// Run `f` with a cursor while holding the exclusive lock for the whole
    /// traversal.
    pub fn with_cursor<R>(&self, f: impl FnOnce(&mut CompanyCursor<'_>) -> R) -> R {
        let mut guard = self.write();
        let mut cursor = guard.cursor();
        f(&mut cursor)
    }

    // -----------------------------------------------------------------------
    // Readers
    // -----------------------------------------------------------------------

    pub fn get_employee(&self, id: EmployeeId) -> Option<Arc<Employee>> {
        self.read().get_employee(id)
    }

    pub fn department_budget(&self, department: &str) -> i64 {
        self.read().department_budget(department)
    }

    pub fn departments(&self) -> Vec<Department> {
        self.read().departments()
    }

    pub fn managers_with_most_factor(&self) -> Vec<Arc<Employee>> {
        self.read().managers_with_most_factor()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// All employees in ascending id order, copied out under the shared lock.
    pub fn snapshot(&self) -> Vec<Arc<Employee>> {
        self.read().iter().cloned().collect()
    }

    // Every mutation finishes its index bookkeeping without panicking, so a
    // poisoned lock still guards a consistent company.
    fn read(&self) -> RwLockReadGuard<'_, Company> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Company> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Company> for SharedCompany {
    fn from(company: Company) -> Self {
        Self {
            inner: RwLock::new(company),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn readers_and_writers_from_many_threads() {
        let company = SharedCompany::new();
        thread::scope(|s| {
            for t in 0..4_i64 {
                let company = &company;
                s.spawn(move || {
                    for i in 0..50 {
                        let id = t * 1000 + i;
                        company
                            .add_employee(Employee::hourly(id, 100, "Ops", 1, 1))
                            .unwrap();
                        assert!(company.get_employee(EmployeeId(id)).is_some());
                        assert_eq!(company.department_budget("Ops") % 101, 0);
                    }
                });
            }
        });
        assert_eq!(company.len(), 200);
        assert_eq!(company.department_budget("Ops"), 200 * 101);
    }

    #[test]
    fn with_cursor_removes_under_one_guard() {
        let company = SharedCompany::new();
        company
            .add_all([
                Employee::lead(1, 100, "A", 1.0),
                Employee::lead(2, 100, "A", 3.0),
                Employee::base(3, 100, "B"),
            ])
            .unwrap();

        let removed = company.with_cursor(|cursor| {
            let mut removed = Vec::new();
            while let Ok(e) = cursor.advance() {
                if e.score().is_some() {
                    removed.push(cursor.remove_current().unwrap().id);
                }
            }
            removed
        });

        assert_eq!(removed, vec![EmployeeId(1), EmployeeId(2)]);
        assert!(company.managers_with_most_factor().is_empty());
        assert_eq!(company.departments(), vec![Department::from("B")]);
    }

    #[test]
    fn snapshot_is_ordered_by_id() {
        let company = SharedCompany::new();
        company
            .add_all([
                Employee::base(9, 1, "A"),
                Employee::base(2, 1, "A"),
                Employee::base(5, 1, "B"),
            ])
            .unwrap();
        let ids: Vec<_> = company.snapshot().iter().map(|e| e.id.0).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }
}
