mod common;

use common::{ScriptedBackend, route};
use trip_router::model::LatLng;
use trip_router::routing::error::RoutingError;
use trip_router::routing::planner::RoutePlanner;

#[test]
fn candidates_are_truncated_to_two_in_service_order() {
    let backend = ScriptedBackend::new().push_routes(vec![
        route(10_000.0, Some(1800.0)),
        route(12_000.0, Some(2400.0)),
        route(50_000.0, Some(9000.0)),
    ]);
    let mut planner = RoutePlanner::new(&backend);

    planner.add_waypoint(LatLng::new(48.85, 2.35)).unwrap();
    planner.add_waypoint(LatLng::new(48.86, 2.36)).unwrap();

    let labels = planner.route_option_labels();
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0], "Route 1 (10.00 km)");
    assert_eq!(labels[1], "Route 2 (12.00 km)");
    // Best route is active by default.
    assert_eq!(planner.active_index(), 0);
}

#[test]
fn selecting_an_alternative_rebuilds_without_a_request() {
    let backend = ScriptedBackend::new().push_routes(vec![
        route(10_000.0, Some(1800.0)),
        route(12_000.0, Some(2400.0)),
    ]);
    let mut planner = RoutePlanner::new(&backend);

    planner.add_waypoint(LatLng::new(48.85, 2.35)).unwrap();
    planner.add_waypoint(LatLng::new(48.86, 2.36)).unwrap();
    assert_eq!(backend.calls(), 1);

    planner.select_route(1).unwrap();

    assert_eq!(backend.calls(), 1);
    assert_eq!(planner.active_index(), 1);
    assert_eq!(
        planner.current_summary().unwrap().distance_text(),
        "12.00 km"
    );
}

#[test]
fn selecting_out_of_range_is_an_error() {
    let backend = ScriptedBackend::new().push_routes(vec![route(10_000.0, Some(1800.0))]);
    let mut planner = RoutePlanner::new(&backend);

    planner.add_waypoint(LatLng::new(48.85, 2.35)).unwrap();
    planner.add_waypoint(LatLng::new(48.86, 2.36)).unwrap();

    let err = planner.select_route(1).unwrap_err();
    assert!(matches!(err, RoutingError::RouteIndex { index: 1, len: 1 }));
    // Selection untouched.
    assert_eq!(planner.active_index(), 0);
}

#[test]
fn zero_candidates_clear_summary_and_options() {
    let backend = ScriptedBackend::new()
        .push_routes(vec![route(10_000.0, Some(1800.0))])
        .push_routes(vec![]);
    let mut planner = RoutePlanner::new(&backend);

    planner.add_waypoint(LatLng::new(48.85, 2.35)).unwrap();
    planner.add_waypoint(LatLng::new(48.86, 2.36)).unwrap();
    assert!(planner.current_summary().is_some());

    // Move a waypoint somewhere unroutable.
    let err = planner
        .update_waypoint(1, LatLng::new(0.0, 0.0))
        .unwrap_err();
    assert!(matches!(err, RoutingError::NoRouteFound));

    assert!(planner.current_summary().is_none());
    assert!(planner.route_option_labels().is_empty());
}

#[test]
fn transient_failure_keeps_previous_summary() {
    let backend = ScriptedBackend::new()
        .push_routes(vec![route(10_000.0, Some(1800.0))])
        .push(Err(RoutingError::Service {
            code: "TooBig".to_string(),
            message: "rate limited".to_string(),
        }));
    let mut planner = RoutePlanner::new(&backend);

    planner.add_waypoint(LatLng::new(48.85, 2.35)).unwrap();
    planner.add_waypoint(LatLng::new(48.86, 2.36)).unwrap();

    let err = planner
        .update_waypoint(0, LatLng::new(48.80, 2.30))
        .unwrap_err();
    assert!(err.is_transient());

    // The stale-but-valid summary survives a transport failure.
    assert_eq!(
        planner.current_summary().unwrap().distance_text(),
        "10.00 km"
    );
}
