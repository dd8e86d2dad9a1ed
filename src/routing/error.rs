use serde::Deserialize;
use thiserror::Error;

/// Error body returned by OSRM-compatible services when `code != "Ok"`.
#[derive(Deserialize, Debug)]
pub struct OsrmErrorPayload {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Everything that can go wrong between a waypoint mutation and an updated
/// route summary. All variants are recovered at the triggering event; none
/// should escape as a panic.
#[derive(Error, Debug)]
pub enum RoutingError {
    /// Caller bug: the adapter was invoked with fewer than two waypoints.
    #[error("At least 2 waypoints are required to compute a route (got {got})")]
    InsufficientWaypoints { got: usize },

    /// The service answered but produced no route (disconnected graph,
    /// unroutable point). User-visible, non-fatal.
    #[error("No route found between the given waypoints")]
    NoRouteFound,

    /// Structured rejection from the routing service.
    #[error("Routing service error ({code}): {message}")]
    Service { code: String, message: String },

    #[error("Routing request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to parse routing response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Waypoint index {index} out of range (have {len} waypoints)")]
    WaypointIndex { index: usize, len: usize },

    #[error("Route index {index} out of range (have {len} route options)")]
    RouteIndex { index: usize, len: usize },
}

impl RoutingError {
    /// Errors after which the previously computed summary must be kept
    /// untouched (transient transport problems, retryable by the user).
    pub fn is_transient(&self) -> bool {
        matches!(self, RoutingError::Network(_) | RoutingError::Service { .. })
    }
}
