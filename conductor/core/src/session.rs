//! Session State
//!
//! The two flags that gate a chat session: whether the service answered
//! its health probe, and whether a question is currently in flight.
//!
//! The state is owned by the [`Conductor`](crate::conductor::Conductor)
//! rather than living in globals, so it can be inspected in tests without
//! a live surface.

use serde::{Deserialize, Serialize};

/// Outcome of the startup health probe
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthOutcome {
    /// Whether the service reported itself healthy
    pub available: bool,
}

impl HealthOutcome {
    /// The service answered with a healthy status
    pub fn available() -> Self {
        Self { available: true }
    }

    /// The service could not be reached or reported unhealthy
    pub fn unavailable() -> Self {
        Self { available: false }
    }
}

/// Round-trip phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Ready to accept a question
    Idle,
    /// Waiting for the service to answer
    Awaiting,
}

/// Per-session flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Set once by the health probe; never re-probed
    pub service_available: bool,
    /// True from submission until the round-trip resolves
    pub in_flight: bool,
}

impl SessionState {
    /// Current round-trip phase
    pub fn phase(&self) -> SessionPhase {
        if self.in_flight {
            SessionPhase::Awaiting
        } else {
            SessionPhase::Idle
        }
    }

    /// Whether a new question may be submitted
    pub fn accepts_questions(&self) -> bool {
        self.service_available && !self.in_flight
    }
}
