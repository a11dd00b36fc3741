//! Counter API
//!
//! Client for the remote counter/reason REST API, organized by domain.

mod counter;
mod reason;
mod http;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Counter, Increment, NewCounter, NewReason, Reason};

pub use http::HttpApi;

/// Operations the UI needs from the backend.
/// Futures are `!Send` because browser fetches are.
#[async_trait(?Send)]
pub trait CounterApi {
    async fn list_counters(&self) -> ApiResult<Vec<Counter>>;

    async fn get_counter(&self, id: u32) -> ApiResult<Counter>;

    async fn create_counter(&self, counter: &NewCounter) -> ApiResult<Counter>;

    async fn list_reasons(&self, counter_id: u32) -> ApiResult<Vec<Reason>>;

    async fn create_reason(&self, reason: &NewReason) -> ApiResult<Reason>;

    async fn increment(&self, increment: &Increment) -> ApiResult<()>;
}
