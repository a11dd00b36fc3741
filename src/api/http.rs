//! HTTP Client
//!
//! `CounterApi` over `reqwest` (browser `fetch` on wasm32).

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{counter, reason, CounterApi};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{Counter, Increment, IncrementBody, NewCounter, NewReason, Reason};

#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Anonymous increments carry no body
    fn increment_request(&self, increment: &Increment) -> RequestBuilder {
        let url = self.url(&reason::increment_path(increment.reason_id, increment.counter_id));
        match &increment.created_by {
            Some(created_by) => self.client.post(url).json(&IncrementBody { created_by }),
            None => self.client.post(url).header(CONTENT_TYPE, "application/json"),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Ok(ensure_success(response)?.json::<T>().await?)
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Ok(ensure_success(response)?.json::<T>().await?)
    }
}

/// Reject non-2xx responses before their body is decoded
fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ApiError::Status { status: status.as_u16() })
    }
}

#[async_trait(?Send)]
impl CounterApi for HttpApi {
    async fn list_counters(&self) -> ApiResult<Vec<Counter>> {
        self.get_json(counter::COUNTERS_WITH_COUNT_PATH).await
    }

    async fn get_counter(&self, id: u32) -> ApiResult<Counter> {
        self.get_json(&counter::counter_with_count_path(id)).await
    }

    async fn create_counter(&self, new_counter: &NewCounter) -> ApiResult<Counter> {
        self.post_json(counter::CREATE_COUNTER_PATH, new_counter).await
    }

    async fn list_reasons(&self, counter_id: u32) -> ApiResult<Vec<Reason>> {
        self.get_json(&reason::reasons_by_counter_path(counter_id)).await
    }

    async fn create_reason(&self, new_reason: &NewReason) -> ApiResult<Reason> {
        self.post_json(reason::CREATE_REASON_PATH, new_reason).await
    }

    async fn increment(&self, increment: &Increment) -> ApiResult<()> {
        ensure_success(self.increment_request(increment).send().await?)?;
        Ok(())
    }
}
