//! Question-Answering Backend
//!
//! Abstracted access to the remote question-answering service through a
//! common trait interface.
//!
//! # Available Backends
//!
//! - **HTTP**: the email QA service's REST API (default)
//!
//! # Usage
//!
//! ```ignore
//! use mailchat_core::backend::{HttpQaBackend, QaBackend, QueryRequest};
//!
//! let backend = HttpQaBackend::from_config(&ConductorConfig::default())?;
//! let response = backend.query(&QueryRequest::new("Latest order?", 5)).await?;
//! ```

mod http;
mod traits;

pub use http::HttpQaBackend;
pub use traits::{BackendError, QaBackend, QueryRequest, QueryResponse};
