//! In-memory `CounterApi` for tests. Records every request.

use std::cell::RefCell;

use async_trait::async_trait;

use super::CounterApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{Counter, Increment, NewCounter, NewReason, Reason, ANONYMOUS_REASON_ID};

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ListCounters,
    GetCounter(u32),
    CreateCounter(NewCounter),
    ListReasons(u32),
    CreateReason(NewReason),
    Increment(Increment),
}

#[derive(Default)]
pub struct FakeApi {
    counters: RefCell<Vec<Counter>>,
    reasons: RefCell<Vec<Reason>>,
    failure: RefCell<Option<ApiError>>,
    broken_counters: RefCell<Vec<u32>>,
    requests: RefCell<Vec<Request>>,
}

pub fn counter(id: u32, name: &str) -> Counter {
    Counter {
        id,
        name: name.to_string(),
        description: String::new(),
        created_by: "tester".to_string(),
        count: 0,
    }
}

pub fn reason(id: u32, counter_id: u32, name: &str) -> Reason {
    Reason {
        id,
        name: name.to_string(),
        counter_id,
        count: 0,
    }
}

impl FakeApi {
    pub fn with_counters(counters: Vec<Counter>) -> Self {
        let api = Self::default();
        *api.counters.borrow_mut() = counters;
        api
    }

    pub fn with_reasons(self, reasons: Vec<Reason>) -> Self {
        *self.reasons.borrow_mut() = reasons;
        self
    }

    /// Every request fails with `err`
    pub fn fail_with(&self, err: ApiError) {
        *self.failure.borrow_mut() = Some(err);
    }

    /// `get_counter(id)` fails with a 500
    pub fn break_counter(&self, id: u32) {
        self.broken_counters.borrow_mut().push(id);
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    pub fn counter_count(&self, id: u32) -> Option<i64> {
        self.counters.borrow().iter().find(|c| c.id == id).map(|c| c.count)
    }

    fn record(&self, request: Request) -> ApiResult<()> {
        self.requests.borrow_mut().push(request);
        match self.failure.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl CounterApi for FakeApi {
    async fn list_counters(&self) -> ApiResult<Vec<Counter>> {
        self.record(Request::ListCounters)?;
        Ok(self.counters.borrow().clone())
    }

    async fn get_counter(&self, id: u32) -> ApiResult<Counter> {
        self.record(Request::GetCounter(id))?;
        if self.broken_counters.borrow().contains(&id) {
            return Err(ApiError::Status { status: 500 });
        }
        self.counters
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::Status { status: 404 })
    }

    async fn create_counter(&self, new_counter: &NewCounter) -> ApiResult<Counter> {
        self.record(Request::CreateCounter(new_counter.clone()))?;
        let mut counters = self.counters.borrow_mut();
        let created = Counter {
            id: counters.iter().map(|c| c.id).max().unwrap_or(0) + 1,
            name: new_counter.name.clone(),
            description: new_counter.description.clone(),
            created_by: new_counter.created_by.clone(),
            count: 0,
        };
        counters.push(created.clone());
        Ok(created)
    }

    async fn list_reasons(&self, counter_id: u32) -> ApiResult<Vec<Reason>> {
        self.record(Request::ListReasons(counter_id))?;
        Ok(self
            .reasons
            .borrow()
            .iter()
            .filter(|r| r.counter_id == counter_id)
            .cloned()
            .collect())
    }

    async fn create_reason(&self, new_reason: &NewReason) -> ApiResult<Reason> {
        self.record(Request::CreateReason(new_reason.clone()))?;
        let mut reasons = self.reasons.borrow_mut();
        let created = Reason {
            id: reasons.iter().map(|r| r.id).max().unwrap_or(0) + 1,
            name: new_reason.name.clone(),
            counter_id: new_reason.counter_id,
            count: new_reason.count,
        };
        reasons.push(created.clone());
        Ok(created)
    }

    async fn increment(&self, increment: &Increment) -> ApiResult<()> {
        self.record(Request::Increment(increment.clone()))?;
        let mut counters = self.counters.borrow_mut();
        let counter = counters
            .iter_mut()
            .find(|c| c.id == increment.counter_id)
            .ok_or(ApiError::Status { status: 404 })?;
        counter.count += 1;
        if increment.reason_id != ANONYMOUS_REASON_ID {
            if let Some(reason) = self.reasons.borrow_mut().iter_mut().find(|r| r.id == increment.reason_id) {
                reason.count += 1;
            }
        }
        Ok(())
    }
}
