//! Form State
//!
//! Field values and validation for the mutation modals. Required fields
//! are checked after trimming; payloads are built from trimmed values.

use crate::models::{Increment, NewCounter, NewReason, Reason};

/// Count a reason starts with when created from the increment dialog
pub const NEW_REASON_INITIAL_COUNT: i64 = 1;

fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Holds a busy flag for as long as it lives; clears it on drop,
/// whichever way the submission ends.
pub struct BusyGuard<F: Fn(bool)> {
    set_busy: F,
}

impl<F: Fn(bool)> BusyGuard<F> {
    pub fn engage(set_busy: F) -> Self {
        set_busy(true);
        Self { set_busy }
    }
}

impl<F: Fn(bool)> Drop for BusyGuard<F> {
    fn drop(&mut self) {
        (self.set_busy)(false);
    }
}

/// "Create counter" sheet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCounterForm {
    pub name: String,
    pub description: String,
    pub created_by: String,
}

impl CreateCounterForm {
    pub fn can_submit(&self) -> bool {
        self.payload().is_some()
    }

    pub fn payload(&self) -> Option<NewCounter> {
        Some(NewCounter {
            name: required(&self.name)?,
            description: self.description.trim().to_string(),
            created_by: required(&self.created_by)?,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What submitting the increment dialog will do
#[derive(Debug, Clone, PartialEq)]
pub enum AddCountAction {
    CreateReason(NewReason),
    Increment(Increment),
}

/// "Add with reason" dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddCountForm {
    pub created_by: String,
    pub selected_reason: Option<u32>,
    pub new_reason_name: String,
    /// User asked to type a new reason instead of picking one
    pub new_reason_mode: bool,
}

impl AddCountForm {
    /// New-reason input is shown when requested or when there is nothing to pick
    pub fn shows_new_reason(&self, reasons: &[Reason]) -> bool {
        self.new_reason_mode || reasons.is_empty()
    }

    /// Keep a still-valid selection, otherwise select the first reason
    pub fn sync_selection(&mut self, reasons: &[Reason]) {
        let still_valid = self
            .selected_reason
            .is_some_and(|id| reasons.iter().any(|r| r.id == id));
        if !still_valid {
            self.selected_reason = reasons.first().map(|r| r.id);
        }
    }

    pub fn action(&self, counter_id: u32, reasons: &[Reason]) -> Option<AddCountAction> {
        let created_by = required(&self.created_by)?;
        if self.shows_new_reason(reasons) {
            return Some(AddCountAction::CreateReason(NewReason {
                name: required(&self.new_reason_name)?,
                counter_id,
                count: NEW_REASON_INITIAL_COUNT,
            }));
        }
        let reason_id = self.selected_reason?;
        Some(AddCountAction::Increment(Increment::with_reason(reason_id, counter_id, created_by)))
    }

    pub fn can_submit(&self, counter_id: u32, reasons: &[Reason]) -> bool {
        self.action(counter_id, reasons).is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
