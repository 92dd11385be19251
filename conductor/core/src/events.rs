//! Surface Events
//!
//! Commands a host UI sends to the Conductor. Surfaces don't interpret
//! what an action means; they report it and the Conductor decides.

use serde::{Deserialize, Serialize};

use crate::session::HealthOutcome;

/// Events from UI surface to Conductor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    /// The user pressed the submit trigger (or Enter)
    SubmitRequested,

    /// The host ran the health probe itself and reports the result
    HealthCheckComplete {
        /// Probe result
        outcome: HealthOutcome,
    },
}
