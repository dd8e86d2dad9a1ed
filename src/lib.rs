//! Waypoint trip planner around an external OSRM-compatible routing
//! service: accumulate waypoints, fetch up to two route alternatives,
//! derive a display-ready summary, export as PDF, CSV or GeoJSON.

pub mod cli;
pub mod export;
pub mod geolocate;
pub mod model;
pub mod routing;
pub mod ui;
