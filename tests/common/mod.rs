use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use trip_router::model::{CandidateRoute, Instruction, LatLng, Maneuver, TransportMode};
use trip_router::routing::error::RoutingError;
use trip_router::routing::service::RoutingBackend;

/// Build a minimal candidate route for tests.
pub fn route(distance_m: f64, duration_s: Option<f64>) -> CandidateRoute {
    CandidateRoute {
        distance_m,
        duration_s,
        coordinates: vec![LatLng::new(48.85, 2.35), LatLng::new(48.86, 2.36)],
        instructions: vec![
            Instruction {
                maneuver: Maneuver::Head,
                text: "Head out onto Rue de Rivoli".to_string(),
                distance_m: Some(400.0),
            },
            Instruction {
                maneuver: Maneuver::TurnLeft,
                text: "Turn left onto Pont Neuf".to_string(),
                distance_m: None,
            },
        ],
    }
}

/// Routing backend that replays scripted outcomes in order and counts
/// calls. Panics when a request arrives that the test did not script.
pub struct ScriptedBackend {
    script: RefCell<VecDeque<Result<Vec<CandidateRoute>, RoutingError>>>,
    calls: Cell<usize>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            script: RefCell::new(VecDeque::new()),
            calls: Cell::new(0),
        }
    }

    pub fn push(self, outcome: Result<Vec<CandidateRoute>, RoutingError>) -> Self {
        self.script.borrow_mut().push_back(outcome);
        self
    }

    pub fn push_routes(self, routes: Vec<CandidateRoute>) -> Self {
        self.push(Ok(routes))
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl RoutingBackend for ScriptedBackend {
    fn request_routes(
        &self,
        waypoints: &[LatLng],
        _mode: TransportMode,
    ) -> Result<Vec<CandidateRoute>, RoutingError> {
        assert!(
            waypoints.len() >= 2,
            "backend must never be called with fewer than 2 waypoints"
        );
        self.calls.set(self.calls.get() + 1);
        self.script
            .borrow_mut()
            .pop_front()
            .expect("unscripted routing request")
    }
}
