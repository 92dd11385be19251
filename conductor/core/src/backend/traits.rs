//! Backend Traits
//!
//! Trait definition and wire types for the question-answering service.
//! This abstraction lets the Conductor run against the real HTTP service
//! or a test double without changing core logic.
//!
//! # Wire Format
//!
//! ```text
//! POST /query  {"question": "...", "k": 5}
//!   -> {"answer": "...", "sources": [{"subject", "from", "date"}, ...]}
//! GET  /health -> any 2xx
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::messages::SourceCitation;
use crate::session::HealthOutcome;

/// Body of a query request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// The trimmed question
    pub question: String,
    /// How many documents the service should retrieve
    pub k: u32,
}

impl QueryRequest {
    /// Create a new request
    pub fn new(question: impl Into<String>, k: u32) -> Self {
        Self {
            question: question.into(),
            k,
        }
    }
}

/// Body of a successful query response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Answer text
    pub answer: String,
    /// Cited documents; the service may omit the field or send `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sources: Vec<SourceCitation>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<SourceCitation>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<SourceCitation>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Errors talking to the service
///
/// The Conductor treats every variant the same way; the distinction only
/// shows up in logs.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Connection failed, timed out or was reset
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("service returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if readable
        body: String,
    },

    /// The body was not a valid query response
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Question-answering backend
///
/// Implement this trait to point the Conductor at a different service.
#[async_trait]
pub trait QaBackend: Send + Sync {
    /// Backend name for logs
    fn name(&self) -> &str;

    /// Probe the service once; any failure is reported as unavailable
    async fn health_check(&self) -> HealthOutcome;

    /// Ask one question
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, BackendError>;
}
