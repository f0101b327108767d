//! Company registry integration tests: lookups, budgets, department listing,
//! top-factor managers and cursor-driven removal.

use std::sync::Arc;

use roster_core::{Company, CompanyError, Department, Employee, EmployeeId};
use rstest::{fixture, rstest};

const ID1: i64 = 123;
const ID2: i64 = 120;
const ID3: i64 = 125;
const ID4: i64 = 200;
const ID5: i64 = 300;
const ID6: i64 = 400;
const ID7: i64 = 500;

fn empl1() -> Employee {
    Employee::hourly(ID1, 1000, "QA", 100, 10)
}
fn empl2() -> Employee {
    Employee::lead(ID2, 2000, "QA", 2.0)
}
fn empl3() -> Employee {
    Employee::sales_agent(ID3, 3000, "Development", 100, 10, 0.01, 10000)
}

#[fixture]
fn company() -> Company {
    let mut company = Company::new();
    for e in [empl1(), empl2(), empl3()] {
        company.add_employee(e).expect("add");
    }
    company
}

fn ids(employees: &[Arc<Employee>]) -> Vec<i64> {
    employees.iter().map(|e| e.id.0).collect()
}

fn department_names(company: &Company) -> Vec<String> {
    company.departments().into_iter().map(|d| d.0).collect()
}

// ---------------------------------------------------------------------------
// 1. Insert / lookup / remove
// ---------------------------------------------------------------------------

#[rstest]
fn add_rejects_duplicate_ids(mut company: Company) {
    company.add_employee(Employee::base(ID4, 1000, "QA")).expect("add");
    let err = company.add_employee(Employee::base(ID4, 1000, "QA")).unwrap_err();
    assert_eq!(err, CompanyError::DuplicateKey { id: EmployeeId(ID4) });
    let err = company.add_employee(empl1()).unwrap_err();
    assert!(matches!(err, CompanyError::DuplicateKey { .. }), "got: {err}");
    assert!(err.to_string().contains("123"));
}

#[rstest]
fn get_returns_record_or_none(company: Company) {
    assert_eq!(company.get_employee(EmployeeId(ID1)).as_deref(), Some(&empl1()));
    assert!(company.get_employee(EmployeeId(ID4)).is_none());
}

#[rstest]
fn remove_returns_record_then_not_found(mut company: Company) {
    let removed = company.remove_employee(EmployeeId(ID1)).expect("remove");
    assert_eq!(*removed, empl1());
    let err = company.remove_employee(EmployeeId(ID1)).unwrap_err();
    assert_eq!(err, CompanyError::NotFound { id: EmployeeId(ID1) });
}

// ---------------------------------------------------------------------------
// 2. Queries
// ---------------------------------------------------------------------------

#[rstest]
#[case("QA", 1000 + 100 * 10 + 2000)]
#[case("Development", 3000 + 100 * 10 + 1)]
#[case("Audit", 0)]
fn department_budget(company: Company, #[case] department: &str, #[case] expected: i64) {
    assert_eq!(company.department_budget(department), expected);
}

#[rstest]
fn budget_follows_live_membership(mut company: Company) {
    company.remove_employee(EmployeeId(ID2)).expect("remove");
    assert_eq!(company.department_budget("QA"), 2000);
    company.remove_employee(EmployeeId(ID1)).expect("remove");
    assert_eq!(company.department_budget("QA"), 0);
}

#[rstest]
fn departments_sorted_and_pruned(mut company: Company) {
    assert_eq!(department_names(&company), vec!["Development", "QA"]);
    company.remove_employee(EmployeeId(ID3)).expect("remove");
    assert_eq!(department_names(&company), vec!["QA"]);
    assert!(company.department_members("Development").is_empty());
}

#[rstest]
fn managers_with_most_factor(mut company: Company) {
    company
        .add_employee(Employee::lead(ID4, 1000, "QA", 2.5))
        .expect("add");
    let expected = [
        Employee::lead(ID5, 1000, "QA", 3.0),
        Employee::lead(ID6, 1000, "QA", 3.0),
        Employee::lead(ID7, 1000, "Development", 3.0),
    ];
    for m in expected.clone() {
        company.add_employee(m).expect("add");
    }

    let top = company.managers_with_most_factor();
    assert_eq!(ids(&top), vec![ID5, ID6, ID7]);
    assert!(top.iter().map(|m| &**m).eq(expected.iter()));

    for id in [ID4, ID5, ID6, ID7] {
        company.remove_employee(EmployeeId(id)).expect("remove");
    }
    assert_eq!(ids(&company.managers_with_most_factor()), vec![ID2]);

    company.remove_employee(EmployeeId(ID2)).expect("remove");
    assert!(company.managers_with_most_factor().is_empty());
    assert_eq!(company.score_groups().count(), 0);
}

#[test]
fn top_group_keeps_insertion_order_not_id_order() {
    let mut company = Company::new();
    for id in [30, 10, 20] {
        company.add_employee(Employee::lead(id, 1, "A", 7.0)).expect("add");
    }
    assert_eq!(ids(&company.managers_with_most_factor()), vec![30, 10, 20]);
}

#[test]
fn mixed_variants_budget_and_department_pruning() {
    let mut company = Company::new();
    let hourly = Employee::hourly(123, 1000, "QA", 100, 10);
    assert_eq!(hourly.compute_salary(), 2000);
    company.add_employee(hourly).expect("add");
    company
        .add_employee(Employee::lead(120, 2000, "QA", 2.0))
        .expect("add");
    let agent = Employee::sales_agent(125, 3000, "Development", 100, 10, 0.01, 10000);
    assert_eq!(agent.compute_salary(), 4001);
    company.add_employee(agent).expect("add");

    assert_eq!(company.department_budget("QA"), 4000);
    assert_eq!(department_names(&company), vec!["Development", "QA"]);

    company.remove_employee(EmployeeId(125)).expect("remove");
    assert_eq!(company.departments(), vec![Department::from("QA")]);
}

// ---------------------------------------------------------------------------
// 3. Cursor
// ---------------------------------------------------------------------------

#[rstest]
fn cursor_walks_in_id_order(mut company: Company) {
    let mut cursor = company.cursor();
    let mut seen = Vec::new();
    while cursor.has_next() {
        seen.push(cursor.advance().expect("advance").id.0);
    }
    assert_eq!(seen, vec![ID2, ID1, ID3]);
    assert_eq!(cursor.advance().unwrap_err(), CompanyError::NoElement);
}

#[rstest]
fn remove_current_requires_advance(mut company: Company) {
    let mut cursor = company.cursor();
    assert_eq!(cursor.remove_current().unwrap_err(), CompanyError::IllegalState);
    cursor.advance().expect("advance");
    cursor.remove_current().expect("remove");
    assert_eq!(cursor.remove_current().unwrap_err(), CompanyError::IllegalState);
}

#[rstest]
fn cursor_removal_updates_every_index(mut company: Company) {
    let mut cursor = company.cursor();
    while cursor.has_next() {
        let e = cursor.advance().expect("advance");
        if e.compute_salary() > 2000 {
            cursor.remove_current().expect("remove");
        }
    }
    assert_eq!(cursor.remove_current().unwrap_err(), CompanyError::IllegalState);

    // Only the hourly employee (salary 2000) and the lead (2000) stay.
    assert_eq!(company.len(), 2);
    assert!(matches!(
        company.remove_employee(EmployeeId(ID3)),
        Err(CompanyError::NotFound { .. })
    ));
    assert_eq!(company.department_budget("Development"), 0);
    assert_eq!(department_names(&company), vec!["QA"]);
}

#[rstest]
fn cursor_removal_of_leads_clears_top_group(mut company: Company) {
    let removed = company.retain(|e| e.score().is_none());
    assert_eq!(removed, 1);
    assert!(company.managers_with_most_factor().is_empty());
    assert_eq!(
        company.remove_employee(EmployeeId(ID2)).unwrap_err(),
        CompanyError::NotFound { id: EmployeeId(ID2) }
    );
}

#[rstest]
fn cursor_is_an_iterator(mut company: Company) {
    let walked: Vec<i64> = company.cursor().map(|e| e.id.0).collect();
    assert_eq!(walked, vec![ID2, ID1, ID3]);
    // A fresh cursor starts over.
    assert_eq!(company.cursor().count(), 3);
}
