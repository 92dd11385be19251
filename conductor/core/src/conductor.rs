//! Conductor - The Session Controller
//!
//! The Conductor runs one question/answer round-trip at a time:
//! - probes the service once at startup and gates submission on the result
//! - turns user input into a query request
//! - shows a loading entry while the request is in flight
//! - maps the outcome onto the chat history
//!
//! # Round-trip State Machine
//!
//! ```text
//!            begin_round_trip              complete_round_trip
//!   Idle ─────────────────────▶ Awaiting ─────────────────────▶ Idle
//!          (user entry,                  (loading removed, answer
//!           loading entry)                or fallback appended)
//! ```
//!
//! [`Conductor::submit`] drives both phases around a single awaited backend
//! call. Hosts that must keep drawing while the call is pending can run the
//! phases themselves: call [`Conductor::begin_round_trip`], run the query on
//! another task with [`Conductor::backend`], and hand the result to
//! [`Conductor::complete_round_trip`].

use std::sync::Arc;

use crate::backend::{BackendError, QaBackend, QueryRequest, QueryResponse};
use crate::config::ConductorConfig;
use crate::events::SurfaceEvent;
use crate::messages::{ChatEntry, MessageId};
use crate::render::RenderAdapter;
use crate::session::{HealthOutcome, SessionState};
use crate::store::MessageStore;
use crate::surface::Surface;

/// Status banner text when the service is reachable
pub const STATUS_AVAILABLE: &str = "✅ Connected to Email Assistant";

/// Status banner text when the health probe failed
pub const STATUS_UNAVAILABLE: &str = "❌ Cannot connect to server. Make sure API is running.";

/// Bot reply appended when a query fails for any reason
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// Number of documents the service retrieves per question (`k`)
pub const QUERY_RESULT_COUNT: u32 = 5;

/// A question that has been submitted and is waiting for its answer
///
/// Produced by [`Conductor::begin_round_trip`] and consumed by
/// [`Conductor::complete_round_trip`]; it cannot be cloned, so each
/// round-trip completes exactly once.
#[derive(Debug)]
pub struct PendingQuestion {
    loading_id: MessageId,
    request: QueryRequest,
}

impl PendingQuestion {
    /// The request to send to the backend
    pub fn request(&self) -> &QueryRequest {
        &self.request
    }

    /// ID of the loading placeholder for this round-trip
    pub fn loading_id(&self) -> &MessageId {
        &self.loading_id
    }
}

/// How a round-trip ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundTripOutcome {
    /// The service answered
    Answered,
    /// The query failed and the fallback reply was shown
    FellBack,
}

/// The Conductor - headless session controller
pub struct Conductor<B: QaBackend, S: Surface> {
    /// Configuration
    config: ConductorConfig,
    /// Question-answering backend
    backend: Arc<B>,
    /// UI surface
    surface: S,
    /// Chat history
    store: MessageStore,
    /// Node bookkeeping for the surface
    renderer: RenderAdapter,
    /// Availability and in-flight flags
    state: SessionState,
    /// Whether the health probe result has been applied
    health_reported: bool,
}

impl<B: QaBackend + 'static, S: Surface> Conductor<B, S> {
    /// Create a new Conductor
    ///
    /// Submission stays disabled until a health outcome arrives.
    pub fn new(backend: B, config: ConductorConfig, surface: S) -> Self {
        Self {
            config,
            backend: Arc::new(backend),
            surface,
            store: MessageStore::new(),
            renderer: RenderAdapter::new(),
            state: SessionState::default(),
            health_reported: false,
        }
    }

    /// Session flags
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a question is in flight
    pub fn is_in_flight(&self) -> bool {
        self.state.in_flight
    }

    /// Chat history
    pub fn history(&self) -> &MessageStore {
        &self.store
    }

    /// Configuration
    pub fn config(&self) -> &ConductorConfig {
        &self.config
    }

    /// Shared handle to the backend, for running queries off the UI task
    pub fn backend(&self) -> Arc<B> {
        Arc::clone(&self.backend)
    }

    /// The surface being rendered to
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface (for host-side input editing)
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Probe the service and apply the result
    ///
    /// Call once, before the user may submit.
    pub async fn start(&mut self) -> HealthOutcome {
        tracing::info!(backend = self.backend.name(), base_url = %self.config.base_url, "Probing service health");
        let outcome = self.backend.health_check().await;
        self.on_health_check_complete(outcome);
        outcome
    }

    /// Handle a command from the host UI
    ///
    /// Returns the round-trip outcome when the event ran one.
    pub async fn handle_event(&mut self, event: SurfaceEvent) -> Option<RoundTripOutcome> {
        match event {
            SurfaceEvent::SubmitRequested => self.on_submit_requested().await,
            SurfaceEvent::HealthCheckComplete { outcome } => {
                self.on_health_check_complete(outcome);
                None
            }
        }
    }

    /// Apply the health probe result
    ///
    /// Only the first outcome counts; the service is never re-probed.
    pub fn on_health_check_complete(&mut self, outcome: HealthOutcome) {
        if self.health_reported {
            tracing::warn!(?outcome, "Ignoring repeated health outcome");
            return;
        }
        self.health_reported = true;
        self.state.service_available = outcome.available;

        if outcome.available {
            tracing::info!("Service available");
            self.surface.set_status(STATUS_AVAILABLE, false);
            self.surface.set_trigger_enabled(true);
        } else {
            tracing::warn!("Service unavailable; submission disabled for this session");
            self.surface.set_status(STATUS_UNAVAILABLE, true);
            self.surface.set_trigger_enabled(false);
        }
    }

    /// Submit whatever is in the surface's input field
    pub async fn on_submit_requested(&mut self) -> Option<RoundTripOutcome> {
        let input = self.surface.read_input();
        self.submit(&input).await
    }

    /// Run one full round-trip for `raw_input`
    ///
    /// Returns `None` when the input was ignored (blank, already in
    /// flight, or service unavailable).
    pub async fn submit(&mut self, raw_input: &str) -> Option<RoundTripOutcome> {
        let pending = self.begin_round_trip(raw_input)?;
        let result = self.backend.query(pending.request()).await;
        Some(self.complete_round_trip(pending, result))
    }

    /// Idle → Awaiting
    ///
    /// Appends the user entry and the loading placeholder and locks the
    /// input. Returns `None` without touching anything when the input is
    /// blank, a question is already in flight, or the service is
    /// unavailable.
    pub fn begin_round_trip(&mut self, raw_input: &str) -> Option<PendingQuestion> {
        let question = raw_input.trim();
        if question.is_empty() {
            tracing::debug!("Ignoring blank submission");
            return None;
        }
        if self.state.in_flight {
            tracing::debug!("Ignoring submission while a question is in flight");
            return None;
        }
        if !self.state.service_available {
            tracing::debug!("Ignoring submission; service unavailable");
            return None;
        }

        self.state.in_flight = true;
        self.surface.set_input_enabled(false);
        self.surface.set_trigger_enabled(false);

        self.append(ChatEntry::user(question));
        self.surface.clear_input();

        let loading = ChatEntry::loading();
        let loading_id = loading.id.clone();
        self.append(loading);

        tracing::debug!(%loading_id, k = QUERY_RESULT_COUNT, "Question submitted");

        Some(PendingQuestion {
            loading_id,
            request: QueryRequest::new(question, QUERY_RESULT_COUNT),
        })
    }

    /// Awaiting → Idle
    ///
    /// Replaces the loading placeholder with the answer, or with
    /// [`FALLBACK_REPLY`] on any failure, then unlocks the input.
    pub fn complete_round_trip(
        &mut self,
        pending: PendingQuestion,
        result: Result<QueryResponse, BackendError>,
    ) -> RoundTripOutcome {
        if self.store.remove(&pending.loading_id).is_some() {
            self.renderer
                .entry_removed(&mut self.surface, &pending.loading_id);
        }

        let outcome = match result {
            Ok(response) => {
                tracing::debug!(sources = response.sources.len(), "Answer received");
                self.append(ChatEntry::bot(response.answer, response.sources));
                RoundTripOutcome::Answered
            }
            Err(e) => {
                tracing::warn!(error = %e, question = %pending.request.question, "Query failed");
                self.append(ChatEntry::bot(FALLBACK_REPLY, Vec::new()));
                RoundTripOutcome::FellBack
            }
        };

        self.state.in_flight = false;
        self.surface.set_input_enabled(true);
        self.surface.set_trigger_enabled(true);
        self.surface.focus_input();

        outcome
    }

    /// Append to the store and render
    fn append(&mut self, entry: ChatEntry) {
        self.renderer.entry_appended(&mut self.surface, &entry);
        self.store.append(entry);
    }
}
