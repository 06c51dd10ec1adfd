//! # Employee Repository
//!
//! Roster reads and attendance updates against the `empleados` key.

use tracing::debug;

use caja_core::{Employee, EmployeeStatus};

use crate::error::StoreResult;
use crate::keys;
use crate::seed;
use crate::store::Store;

/// Repository for roster operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    store: Store,
}

impl EmployeeRepository {
    pub(crate) fn new(store: Store) -> Self {
        EmployeeRepository { store }
    }

    /// Returns the full roster.
    ///
    /// Falls back to the default roster when the key is absent, without
    /// writing it.
    pub fn list(&self) -> StoreResult<Vec<Employee>> {
        self.store.with_prefs(|prefs| {
            Ok(prefs
                .get::<Vec<Employee>>(keys::EMPLOYEES)?
                .unwrap_or_else(seed::default_roster))
        })
    }

    /// Replaces the stored roster.
    pub fn save(&self, employees: &[Employee]) -> StoreResult<()> {
        debug!(count = employees.len(), "Saving roster");
        self.store
            .with_prefs_mut(|prefs| prefs.put(keys::EMPLOYEES, &employees))
    }

    /// Updates one employee's attendance.
    ///
    /// ## Partial Update
    /// `clock_in` / `clock_out` set the respective time when `Some` and
    /// leave the stored value untouched when `None`. The status is always
    /// overwritten.
    ///
    /// ## Edge Cases
    /// An id not in the roster is ignored: the call logs and returns `Ok`.
    pub fn update_status(
        &self,
        id: u32,
        status: EmployeeStatus,
        clock_in: Option<&str>,
        clock_out: Option<&str>,
    ) -> StoreResult<()> {
        self.store.with_prefs_mut(|prefs| {
            let mut roster = prefs
                .get::<Vec<Employee>>(keys::EMPLOYEES)?
                .unwrap_or_else(seed::default_roster);

            match roster.iter_mut().find(|e| e.id == id) {
                Some(employee) => {
                    debug!(id, ?status, "Updating employee attendance");
                    employee.status = status;
                    if let Some(time) = clock_in {
                        employee.clock_in = Some(time.to_string());
                    }
                    if let Some(time) = clock_out {
                        employee.clock_out = Some(time.to_string());
                    }
                    prefs.put(keys::EMPLOYEES, &roster)
                }
                None => {
                    debug!(id, "Employee not in roster, ignoring update");
                    Ok(())
                }
            }
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;

    fn open_store() -> Store {
        Store::open(StoreConfig::in_memory()).unwrap()
    }

    #[test]
    fn test_list_returns_seeded_roster() {
        let repo = open_store().employees();
        let roster = repo.list().unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster[0].name, "María González");
    }

    #[test]
    fn test_update_status_sets_clock_in() {
        let repo = open_store().employees();
        repo.update_status(3, EmployeeStatus::Active, Some("08:55"), None)
            .unwrap();

        let roster = repo.list().unwrap();
        let ana = roster.iter().find(|e| e.id == 3).unwrap();
        assert_eq!(ana.status, EmployeeStatus::Active);
        assert_eq!(ana.clock_in.as_deref(), Some("08:55"));
        assert_eq!(ana.clock_out, None);
    }

    #[test]
    fn test_none_retains_stored_times() {
        let repo = open_store().employees();
        repo.update_status(3, EmployeeStatus::Active, Some("08:55"), None)
            .unwrap();
        repo.update_status(3, EmployeeStatus::Inactive, None, Some("18:05"))
            .unwrap();

        let roster = repo.list().unwrap();
        let ana = roster.iter().find(|e| e.id == 3).unwrap();
        assert_eq!(ana.clock_in.as_deref(), Some("08:55"));
        assert_eq!(ana.clock_out.as_deref(), Some("18:05"));
    }

    #[test]
    fn test_update_unknown_id_is_ignored() {
        let repo = open_store().employees();
        repo.update_status(999, EmployeeStatus::Active, Some("09:00"), None)
            .unwrap();
        assert_eq!(repo.list().unwrap().len(), 4);
    }
}
