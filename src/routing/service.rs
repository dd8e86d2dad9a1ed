use crate::model::{CandidateRoute, LatLng, TransportMode};
use crate::routing::error::RoutingError;

/// Seam between the planner and whatever actually computes routes.
///
/// Implementations are expected to be network-bound and fallible; the
/// planner never assumes a call will succeed or return quickly.
pub trait RoutingBackend {
    /// Request route alternatives through `waypoints` (in order) for `mode`.
    ///
    /// Must be called with at least two waypoints. An empty result is not an
    /// error at this layer; the planner maps it to `NoRouteFound`.
    fn request_routes(
        &self,
        waypoints: &[LatLng],
        mode: TransportMode,
    ) -> Result<Vec<CandidateRoute>, RoutingError>;
}

impl<B: RoutingBackend + ?Sized> RoutingBackend for &B {
    fn request_routes(
        &self,
        waypoints: &[LatLng],
        mode: TransportMode,
    ) -> Result<Vec<CandidateRoute>, RoutingError> {
        (**self).request_routes(waypoints, mode)
    }
}
