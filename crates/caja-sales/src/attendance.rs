//! # Attendance Service
//!
//! Punch clock for the store roster.
//!
//! ## Status Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Attendance Transitions                              │
//! │                                                                         │
//! │                 punch_in (stamps clock-in)                              │
//! │      ┌──────────┐ ───────────────────────► ┌──────────┐                │
//! │      │  Absent  │                          │  Active  │                │
//! │      └──────────┘ ◄─────────────────────── └────┬─────┘                │
//! │            ▲          mark_absent               │                      │
//! │            │                                    │ punch_out            │
//! │            │                                    ▼ (stamps clock-out)   │
//! │            │          mark_absent          ┌──────────┐                │
//! │            └───────────────────────────────│ Inactive │                │
//! │                                            └──────────┘                │
//! │                                                                         │
//! │  Stamped times are kept until overwritten by the next punch; marking   │
//! │  someone absent leaves yesterday's times in place.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The till exposes a single punch button per employee: [`AttendanceService::punch`]
//! toggles along the top path, so an absent employee clocks in, an active one
//! clocks out, and one who already left stays out.

use tracing::{debug, info};

use caja_core::{Employee, EmployeeStatus};
use caja_store::Store;

use crate::docnum::current_time;
use crate::error::{SalesError, SalesResult};

/// What a punch did for the employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PunchOutcome {
    /// The employee was absent and is now clocked in at `time`.
    ClockedIn { time: String },

    /// The employee was active and is now clocked out at `time`.
    ClockedOut { time: String },

    /// The employee had already clocked out today; nothing changed.
    AlreadyOut,
}

/// Roster head-count by attendance status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub active: usize,
    pub inactive: usize,
    pub absent: usize,
}

impl AttendanceSummary {
    /// Total roster size.
    pub fn total(&self) -> usize {
        self.active + self.inactive + self.absent
    }
}

/// Service managing the punch clock.
#[derive(Debug, Clone)]
pub struct AttendanceService {
    store: Store,
}

impl AttendanceService {
    pub fn new(store: Store) -> Self {
        AttendanceService { store }
    }

    /// Returns the current roster.
    pub fn roster(&self) -> SalesResult<Vec<Employee>> {
        Ok(self.store.employees().list()?)
    }

    /// Toggles an employee through the punch clock.
    ///
    /// ## Returns
    /// * `ClockedIn` - Was absent, now active with a fresh clock-in stamp
    /// * `ClockedOut` - Was active, now inactive with a fresh clock-out stamp
    /// * `AlreadyOut` - Was already inactive, left untouched
    pub fn punch(&self, id: u32) -> SalesResult<PunchOutcome> {
        let employee = self.require_known(id)?;
        match employee.status {
            EmployeeStatus::Absent => {
                let time = self.punch_in(id)?;
                Ok(PunchOutcome::ClockedIn { time })
            }
            EmployeeStatus::Active => {
                let time = self.punch_out(id)?;
                Ok(PunchOutcome::ClockedOut { time })
            }
            EmployeeStatus::Inactive => {
                debug!(id, "Punch ignored, employee already clocked out");
                Ok(PunchOutcome::AlreadyOut)
            }
        }
    }

    /// Clocks an employee in: status becomes Active, clock-in is stamped
    /// with the current local time.
    ///
    /// ## Returns
    /// The stamped time (`HH:MM`).
    pub fn punch_in(&self, id: u32) -> SalesResult<String> {
        self.require_known(id)?;
        let time = current_time();
        self.store
            .employees()
            .update_status(id, EmployeeStatus::Active, Some(&time), None)?;
        info!(id, time = %time, "Employee clocked in");
        Ok(time)
    }

    /// Clocks an employee out: status becomes Inactive, clock-out is stamped
    /// with the current local time. The clock-in stamp is kept.
    ///
    /// ## Returns
    /// The stamped time (`HH:MM`).
    pub fn punch_out(&self, id: u32) -> SalesResult<String> {
        self.require_known(id)?;
        let time = current_time();
        self.store
            .employees()
            .update_status(id, EmployeeStatus::Inactive, None, Some(&time))?;
        info!(id, time = %time, "Employee clocked out");
        Ok(time)
    }

    /// Marks an employee absent without touching the stamped times.
    pub fn mark_absent(&self, id: u32) -> SalesResult<()> {
        self.require_known(id)?;
        self.store
            .employees()
            .update_status(id, EmployeeStatus::Absent, None, None)?;
        info!(id, "Employee marked absent");
        Ok(())
    }

    /// Returns the head-count by status.
    pub fn summary(&self) -> SalesResult<AttendanceSummary> {
        let roster = self.store.employees().list()?;
        let mut summary = AttendanceSummary {
            active: 0,
            inactive: 0,
            absent: 0,
        };
        for employee in &roster {
            match employee.status {
                EmployeeStatus::Active => summary.active += 1,
                EmployeeStatus::Inactive => summary.inactive += 1,
                EmployeeStatus::Absent => summary.absent += 1,
            }
        }
        Ok(summary)
    }

    fn require_known(&self, id: u32) -> SalesResult<Employee> {
        let roster = self.store.employees().list()?;
        roster
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(SalesError::EmployeeNotFound { id })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
