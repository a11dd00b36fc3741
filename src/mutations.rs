//! Mutations
//!
//! Submit handlers shared by the modals. On success they bump the refresh
//! coordinator and reset the form; on failure they log and leave the form
//! untouched so the user can retry.

use crate::api::CounterApi;
use crate::error::MutationError;
use crate::forms::{AddCountAction, AddCountForm, CreateCounterForm};
use crate::models::{Counter, Increment, Reason};
use crate::refresh::RefreshCoordinator;

pub async fn create_counter<A: CounterApi + ?Sized>(
    api: &A,
    form: &mut CreateCounterForm,
    refresh: &RefreshCoordinator,
) -> Result<Counter, MutationError> {
    let payload = form.payload().ok_or(MutationError::Invalid)?;
    let created = api.create_counter(&payload).await.inspect_err(|err| {
        log::error!("Error creating counter: {}", err);
    })?;
    log::info!("Created counter {} ({})", created.id, created.name);
    form.reset();
    refresh.bump();
    Ok(created)
}

pub async fn add_anonymous_count<A: CounterApi + ?Sized>(
    api: &A,
    counter_id: u32,
    refresh: &RefreshCoordinator,
) -> Result<(), MutationError> {
    api.increment(&Increment::anonymous(counter_id)).await.inspect_err(|err| {
        log::error!("Error incrementing count: {}", err);
    })?;
    refresh.bump();
    Ok(())
}

/// Submit the increment dialog: either bump the selected reason or
/// create a new reason (which starts counted once).
pub async fn add_count<A: CounterApi + ?Sized>(
    api: &A,
    form: &mut AddCountForm,
    counter_id: u32,
    reasons: &[Reason],
    refresh: &RefreshCoordinator,
) -> Result<AddCountAction, MutationError> {
    let action = form.action(counter_id, reasons).ok_or(MutationError::Invalid)?;
    match &action {
        AddCountAction::Increment(increment) => {
            api.increment(increment).await.inspect_err(|err| {
                log::error!("Error updating count: {}", err);
            })?;
        }
        AddCountAction::CreateReason(new_reason) => {
            let created = api.create_reason(new_reason).await.inspect_err(|err| {
                log::error!("Error creating reason: {}", err);
            })?;
            log::info!("Created reason {} for counter {}", created.id, counter_id);
        }
    }
    form.reset();
    refresh.bump();
    Ok(action)
}
