//! Mailchat Core - Headless Session Controller for mailchat
//!
//! This crate holds the logic behind the mailchat assistant: ask a remote
//! email question-answering service a question, show a loading entry while
//! it thinks, and record the answer (with its cited emails) in the chat
//! history. It is completely independent of any UI framework.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        UI Surfaces                           │
//! │        ┌─────────┐   ┌─────────────┐   ┌──────────┐          │
//! │        │   TUI   │   │  Test stub  │   │  Other   │          │
//! │        └────┬────┘   └──────┬──────┘   └────┬─────┘          │
//! │             └───────────────┼───────────────┘                │
//! │              SurfaceEvent (up)  /  Surface trait (down)      │
//! └─────────────────────────────┼────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────┼────────────────────────────────┐
//! │                       CONDUCTOR CORE                         │
//! │  ┌──────────┐  ┌──────────────┐  ┌────────┐  ┌────────────┐  │
//! │  │ Session  │  │ MessageStore │  │ Render │  │  Backend   │  │
//! │  │  State   │  │              │  │Adapter │  │ (HTTP QA)  │  │
//! │  └──────────┘  └──────────────┘  └────────┘  └────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use mailchat_core::{Conductor, ConductorConfig, HttpQaBackend};
//!
//! let config = ConductorConfig::default();
//! let backend = HttpQaBackend::from_config(&config)?;
//! let mut conductor = Conductor::new(backend, config, my_surface);
//!
//! conductor.start().await;
//! conductor.submit("How many emails from Zomato?").await;
//! ```
//!
//! # Module Overview
//!
//! - [`backend`]: Question-answering service abstraction and HTTP client
//! - [`conductor`]: The round-trip state machine
//! - [`config`]: Configuration loading
//! - [`events`]: Commands from UI surfaces
//! - [`messages`]: Chat entries and citations
//! - [`render`]: Projection of history changes onto a surface
//! - [`session`]: Availability and in-flight flags
//! - [`store`]: Append-only chat history
//! - [`surface`]: The presentation contract
//!
//! # No TUI Dependencies
//!
//! This crate has **zero** dependencies on ratatui, crossterm, or any other
//! UI framework.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod backend;
pub mod conductor;
pub mod config;
pub mod events;
pub mod messages;
pub mod render;
pub mod session;
pub mod store;
pub mod surface;

// Re-exports for convenience
pub use backend::{BackendError, HttpQaBackend, QaBackend, QueryRequest, QueryResponse};
pub use conductor::{
    Conductor, PendingQuestion, RoundTripOutcome, FALLBACK_REPLY, QUERY_RESULT_COUNT,
    STATUS_AVAILABLE, STATUS_UNAVAILABLE,
};
pub use config::{
    default_config_path, load_config, load_config_from_path, ConductorConfig, ConfigError,
};
pub use events::SurfaceEvent;
pub use messages::{ChatEntry, MessageId, Sender, SourceCitation};
pub use render::RenderAdapter;
pub use session::{HealthOutcome, SessionPhase, SessionState};
pub use store::MessageStore;
pub use surface::{NodeHandle, RenderedEntry, Surface, MAX_RENDERED_SOURCES};
