//! Frontend Models
//!
//! Data structures matching the counter API's JSON.

use serde::{Deserialize, Serialize};

/// Reason id the API reserves for anonymous increments
pub const ANONYMOUS_REASON_ID: u32 = 0;

/// Counter with its current count (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counter {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_by: String,
    pub count: i64,
}

/// Reason data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    pub id: u32,
    pub name: String,
    pub counter_id: u32,
    pub count: i64,
}

/// Body of `POST api/counter`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCounter {
    pub name: String,
    pub description: String,
    pub created_by: String,
}

/// Body of `POST api/reason`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReason {
    pub name: String,
    pub counter_id: u32,
    pub count: i64,
}

/// One increment of a counter through a reason
#[derive(Debug, Clone, PartialEq)]
pub struct Increment {
    pub reason_id: u32,
    pub counter_id: u32,
    /// Omitted for anonymous increments
    pub created_by: Option<String>,
}

impl Increment {
    pub fn anonymous(counter_id: u32) -> Self {
        Self {
            reason_id: ANONYMOUS_REASON_ID,
            counter_id,
            created_by: None,
        }
    }

    pub fn with_reason(reason_id: u32, counter_id: u32, created_by: String) -> Self {
        Self {
            reason_id,
            counter_id,
            created_by: Some(created_by),
        }
    }
}

/// Body of `POST api/reason/increment/{reasonId}/{counterId}`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncrementBody<'a> {
    pub created_by: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_from_api_json() {
        let json = r#"{"id":7,"name":"Days without coffee","description":"","createdBy":"Ana","count":3}"#;
        let counter: Counter = serde_json::from_str(json).unwrap();
        assert_eq!(counter.id, 7);
        assert_eq!(counter.created_by, "Ana");
        assert_eq!(counter.count, 3);
    }

    #[test]
    fn test_counter_missing_description() {
        let json = r#"{"id":1,"name":"Steps","createdBy":"Luis","count":0}"#;
        let counter: Counter = serde_json::from_str(json).unwrap();
        assert_eq!(counter.description, "");
    }

    #[test]
    fn test_new_reason_body() {
        let body = NewReason { name: "Lunes".to_string(), counter_id: 4, count: 1 };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Lunes", "counterId": 4, "count": 1}));
    }

    #[test]
    fn test_anonymous_increment() {
        let inc = Increment::anonymous(7);
        assert_eq!(inc.reason_id, ANONYMOUS_REASON_ID);
        assert!(inc.created_by.is_none());
    }
}
