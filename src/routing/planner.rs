use crate::export::{self, ExportError, ExportFile, ExportFormat};
use crate::model::{CandidateRoute, LatLng, RouteSummary, TransportMode};
use crate::routing::error::RoutingError;
use crate::routing::service::RoutingBackend;
use crate::routing::summary;

/// How many route alternatives are kept for the user to choose from.
/// Service-side ranking is authoritative; we never re-sort.
pub const MAX_ROUTE_OPTIONS: usize = 2;

/// What happened to a completed routing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result was the latest issued request and now drives the state.
    Applied,
    /// A newer request was issued (or the planner was cleared) before this
    /// one resolved; the result was discarded.
    Superseded,
}

/// Snapshot handed out when a routing request is issued. Shells that drive
/// the network call themselves feed the outcome back through
/// [`RoutePlanner::complete_request`] with the same sequence number.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub seq: u64,
    pub waypoints: Vec<LatLng>,
    pub mode: TransportMode,
}

/// Event-driven route planning state: ordered waypoints, the chosen
/// transport mode, up to [`MAX_ROUTE_OPTIONS`] candidate routes and the
/// summary derived from the active one.
///
/// Single-threaded by construction. The only out-of-order hazard is a
/// superseded network request resolving late; a monotonically increasing
/// sequence number per request gates that out.
pub struct RoutePlanner<B: RoutingBackend> {
    backend: B,
    waypoints: Vec<LatLng>,
    mode: TransportMode,
    candidates: Vec<CandidateRoute>,
    active: usize,
    summary: Option<RouteSummary>,
    last_issued: u64,
}

impl<B: RoutingBackend> RoutePlanner<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            waypoints: Vec::new(),
            mode: TransportMode::Car,
            candidates: Vec::new(),
            active: 0,
            summary: None,
            last_issued: 0,
        }
    }

    pub fn waypoints(&self) -> &[LatLng] {
        &self.waypoints
    }

    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn current_summary(&self) -> Option<&RouteSummary> {
        self.summary.as_ref()
    }

    /// Labels for the selector UI, in service ranking order.
    pub fn route_option_labels(&self) -> Vec<String> {
        self.candidates
            .iter()
            .enumerate()
            .map(|(i, r)| format!("Route {} ({:.2} km)", i + 1, r.distance_m / 1000.0))
            .collect()
    }

    /// Append a waypoint. Recalculates as soon as two points exist; a single
    /// waypoint never issues a request.
    pub fn add_waypoint(&mut self, point: LatLng) -> Result<(), RoutingError> {
        self.waypoints.push(point);
        if self.waypoints.len() >= 2 {
            self.recalculate()
        } else {
            Ok(())
        }
    }

    /// Replace the waypoint at `index` in place (marker drag). Order is
    /// unchanged; the route is recalculated.
    pub fn update_waypoint(&mut self, index: usize, point: LatLng) -> Result<(), RoutingError> {
        let len = self.waypoints.len();
        let slot = self
            .waypoints
            .get_mut(index)
            .ok_or(RoutingError::WaypointIndex { index, len })?;
        *slot = point;

        if len >= 2 {
            self.recalculate()
        } else {
            Ok(())
        }
    }

    /// Change the transport mode and recalculate if a route is in play.
    pub fn set_mode(&mut self, mode: TransportMode) -> Result<(), RoutingError> {
        self.mode = mode;
        if self.waypoints.len() >= 2 {
            self.recalculate()
        } else {
            Ok(())
        }
    }

    /// Switch the active route among the fetched candidates. Rebuilds the
    /// summary locally; no network request is issued.
    pub fn select_route(&mut self, index: usize) -> Result<(), RoutingError> {
        if index >= self.candidates.len() {
            return Err(RoutingError::RouteIndex {
                index,
                len: self.candidates.len(),
            });
        }
        self.active = index;
        self.summary = Some(summary::build(&self.candidates[index], self.mode));
        Ok(())
    }

    /// Reset to the empty state. Any in-flight request is orphaned: its
    /// completion will be discarded.
    pub fn clear_all(&mut self) {
        self.waypoints.clear();
        self.candidates.clear();
        self.active = 0;
        self.summary = None;
        self.last_issued += 1;
    }

    /// Export the current summary, or fail with [`ExportError::NoRoute`].
    pub fn export_current(&self, format: ExportFormat) -> Result<ExportFile, ExportError> {
        match &self.summary {
            Some(s) => export::export(s, format),
            None => Err(ExportError::NoRoute),
        }
    }

    /// Issue a new request ticket. Supersedes any outstanding request.
    pub fn begin_request(&mut self) -> Result<PendingRequest, RoutingError> {
        if self.waypoints.len() < 2 {
            return Err(RoutingError::InsufficientWaypoints {
                got: self.waypoints.len(),
            });
        }
        self.last_issued += 1;
        Ok(PendingRequest {
            seq: self.last_issued,
            waypoints: self.waypoints.clone(),
            mode: self.mode,
        })
    }

    /// Apply a request outcome. Results for anything but the latest issued
    /// sequence number are discarded; a late response must never overwrite
    /// state derived from a newer request.
    ///
    /// On a transport error the previous summary is kept untouched. An empty
    /// candidate list clears the selection and reports [`RoutingError::NoRouteFound`].
    pub fn complete_request(
        &mut self,
        seq: u64,
        outcome: Result<Vec<CandidateRoute>, RoutingError>,
    ) -> Result<Completion, RoutingError> {
        if seq != self.last_issued {
            log::debug!(
                "Discarding superseded routing response (seq {seq}, latest {})",
                self.last_issued
            );
            return Ok(Completion::Superseded);
        }

        let mut routes = outcome?;

        if routes.is_empty() {
            self.candidates.clear();
            self.active = 0;
            self.summary = None;
            return Err(RoutingError::NoRouteFound);
        }

        routes.truncate(MAX_ROUTE_OPTIONS);
        self.candidates = routes;
        self.active = 0;
        self.summary = Some(summary::build(&self.candidates[0], self.mode));
        Ok(Completion::Applied)
    }

    fn recalculate(&mut self) -> Result<(), RoutingError> {
        let pending = self.begin_request()?;
        let outcome = self
            .backend
            .request_routes(&pending.waypoints, pending.mode);
        self.complete_request(pending.seq, outcome).map(|_| ())
    }
}
