use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeCandidate};
use crate::utils::validation::{validate_payload, INVALID_EMPLOYEE_DATA};

struct StoreState {
    employees: Vec<Employee>,
    // Wider than ids so the counter can sit one past `i32::MAX`.
    next_id: i64,
}

/// In-memory employee collection. All access goes through one lock; the id
/// counter is only advanced while the write lock is held.
pub struct EmployeeStore {
    state: RwLock<StoreState>,
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("No employee found with ID {}", id))
}

fn invalid_input() -> AppError {
    AppError::InvalidInput(INVALID_EMPLOYEE_DATA.to_string())
}

impl EmployeeStore {
    /// Ids continue from the largest one given and are never reused.
    pub fn new(employees: Vec<Employee>) -> Self {
        let next_id = employees.iter().map(|e| i64::from(e.id)).max().unwrap_or(0) + 1;
        EmployeeStore {
            state: RwLock::new(StoreState { employees, next_id }),
        }
    }

    pub fn seeded() -> Self {
        Self::new(vec![
            Employee::new(1, "John Doe", "Male", "New York", 30, "HR"),
            Employee::new(2, "Jane Smith", "Female", "Los Angeles", 25, "Finance"),
            Employee::new(3, "Mike Johnson", "Male", "Chicago", 40, "IT"),
        ])
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, StoreState>, AppError> {
        self.state
            .read()
            .map_err(|_| AppError::InternalServerError("employee store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, StoreState>, AppError> {
        self.state
            .write()
            .map_err(|_| AppError::InternalServerError("employee store lock poisoned".to_string()))
    }

    pub fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.read()?.employees.clone())
    }

    pub fn get(&self, id: i32) -> Result<Employee, AppError> {
        self.read()?
            .employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    pub fn create(&self, candidate: Option<EmployeeCandidate>) -> Result<Employee, AppError> {
        let candidate = candidate.ok_or_else(invalid_input)?;
        validate_payload(&candidate)?;

        let mut state = self.write()?;
        let id = i32::try_from(state.next_id)
            .map_err(|_| AppError::InternalServerError("employee ids exhausted".to_string()))?;
        state.next_id += 1;

        let employee = Employee::from_candidate(id, candidate);
        state.employees.push(employee.clone());
        log::info!("created employee {}", id);
        Ok(employee)
    }

    pub fn update(&self, id: i32, candidate: Option<EmployeeCandidate>) -> Result<(), AppError> {
        let candidate = candidate.ok_or_else(invalid_input)?;
        if candidate.id != Some(id) {
            return Err(invalid_input());
        }
        validate_payload(&candidate)?;

        let mut state = self.write()?;
        let existing = state
            .employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        existing.overwrite_with(candidate);
        log::info!("updated employee {}", id);
        Ok(())
    }

    pub fn delete(&self, id: i32) -> Result<(), AppError> {
        let mut state = self.write()?;
        let index = state
            .employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| not_found(id))?;
        state.employees.remove(index);
        log::info!("deleted employee {}", id);
        Ok(())
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    fn john_only() -> EmployeeStore {
        EmployeeStore::new(vec![Employee::from_candidate(1, EmployeeCandidate::named("John"))])
    }

    fn full_candidate(id: i32, name: &str) -> EmployeeCandidate {
        EmployeeCandidate {
            id: Some(id),
            name: Some(name.to_string()),
            gender: Some("Female".to_string()),
            city: Some("Denver".to_string()),
            age: 52,
            department: Some("Legal".to_string()),
        }
    }

    #[test]
    fn seeded_store_lists_three_records_in_order() {
        let store = EmployeeStore::seeded();
        let ids: Vec<i32> = store.list().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn get_returns_matching_record() {
        let store = EmployeeStore::seeded();
        let jane = store.get(2).unwrap();
        assert_eq!(jane.name, "Jane Smith");
        assert_eq!(jane.department.as_deref(), Some("Finance"));
    }

    #[test]
    fn missing_ids_are_not_found() {
        let store = EmployeeStore::seeded();
        for id in [0, 4, -1, i32::MAX] {
            assert!(matches!(store.get(id), Err(AppError::NotFound(_))));
            assert!(matches!(store.delete(id), Err(AppError::NotFound(_))));
        }
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn not_found_message_names_the_id() {
        let store = EmployeeStore::default();
        assert_eq!(
            store.get(42),
            Err(AppError::NotFound("No employee found with ID 42".to_string()))
        );
    }

    #[test]
    fn create_appends_with_next_id() {
        let store = john_only();
        let amy = store.create(Some(EmployeeCandidate::named("Amy"))).unwrap();
        assert_eq!(amy.id, 2);
        assert_eq!(amy.name, "Amy");

        let names: Vec<String> = store.list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["John", "Amy"]);
    }

    #[test]
    fn create_ignores_caller_supplied_id() {
        let store = john_only();
        let created = store.create(Some(full_candidate(1, "Amy"))).unwrap();
        assert_eq!(created.id, 2);
    }

    #[test]
    fn create_rejects_absent_or_nameless_candidates() {
        let store = john_only();
        let before = store.list().unwrap();

        assert!(matches!(store.create(None), Err(AppError::InvalidInput(_))));
        assert!(matches!(
            store.create(Some(EmployeeCandidate::default())),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            store.create(Some(EmployeeCandidate::named(""))),
            Err(AppError::InvalidInput(_))
        ));

        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = EmployeeStore::seeded();
        store.delete(2).unwrap();
        let created = store.create(Some(EmployeeCandidate::named("Amy"))).unwrap();
        assert_eq!(created.id, 4);

        let ids: HashSet<i32> = store.list().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn create_fails_cleanly_once_ids_run_out() {
        let store = EmployeeStore::new(vec![Employee::from_candidate(
            i32::MAX - 1,
            EmployeeCandidate::named("A"),
        )]);

        let last = store.create(Some(EmployeeCandidate::named("B"))).unwrap();
        assert_eq!(last.id, i32::MAX);

        assert!(matches!(
            store.create(Some(EmployeeCandidate::named("C"))),
            Err(AppError::InternalServerError(_))
        ));
        assert_eq!(store.list().unwrap().len(), 2);
        assert!(store.get(i32::MAX).is_ok());
    }

    #[test]
    fn store_accepts_a_record_with_the_largest_id() {
        let store = EmployeeStore::new(vec![Employee::from_candidate(
            i32::MAX,
            EmployeeCandidate::named("A"),
        )]);

        assert!(matches!(
            store.create(Some(EmployeeCandidate::named("B"))),
            Err(AppError::InternalServerError(_))
        ));
        store.delete(i32::MAX).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn update_with_mismatched_id_is_rejected() {
        let store = john_only();
        store.create(Some(EmployeeCandidate::named("Amy"))).unwrap();
        let before = store.list().unwrap();

        assert!(matches!(
            store.update(2, Some(full_candidate(3, "Amy"))),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            store.update(2, Some(EmployeeCandidate::named("Amy"))),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(store.update(2, None), Err(AppError::InvalidInput(_))));

        assert_eq!(store.list().unwrap(), before);
    }

    #[test]
    fn update_checks_input_before_existence() {
        let store = john_only();
        assert!(matches!(
            store.update(9, Some(full_candidate(3, "Amy"))),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            store.update(9, Some(full_candidate(9, "Amy"))),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn update_rejects_empty_name() {
        let store = john_only();
        assert!(matches!(
            store.update(1, Some(full_candidate(1, ""))),
            Err(AppError::InvalidInput(_))
        ));
        assert_eq!(store.get(1).unwrap().name, "John");
    }

    #[test]
    fn update_overwrites_everything_but_id() {
        let store = EmployeeStore::seeded();
        store.update(3, Some(full_candidate(3, "Michaela"))).unwrap();

        let updated = store.get(3).unwrap();
        assert_eq!(
            updated,
            Employee {
                id: 3,
                name: "Michaela".to_string(),
                gender: Some("Female".to_string()),
                city: Some("Denver".to_string()),
                age: 52,
                department: Some("Legal".to_string()),
            }
        );
        assert_eq!(store.list().unwrap().len(), 3);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let store = EmployeeStore::seeded();
        store.delete(1).unwrap();

        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|e| e.id != 1));
        assert!(matches!(store.get(1), Err(AppError::NotFound(_))));
    }

    #[test]
    fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(EmployeeStore::default());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..25 {
                        store
                            .create(Some(EmployeeCandidate::named(&format!("worker-{}-{}", t, i))))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let ids: HashSet<i32> = store.list().unwrap().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 200);
    }
}
