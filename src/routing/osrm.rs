use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::model::{CandidateRoute, Instruction, LatLng, Maneuver, TransportMode};
use crate::routing::error::{OsrmErrorPayload, RoutingError};
use crate::routing::service::RoutingBackend;

pub const DEFAULT_SERVICE_URL: &str = "https://router.project-osrm.org/route/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fixed mode-name table for shells that accept free-form mode names.
/// Unknown names fall back to car, and with it to the car profile.
pub fn mode_for_name(name: &str) -> TransportMode {
    TransportMode::parse(name).unwrap_or(TransportMode::Car)
}

/// Blocking client for OSRM-compatible `route/v1` services.
pub struct OsrmClient {
    client: Client,
    base_url: String,
}

impl OsrmClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, RoutingError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn public() -> Result<Self, RoutingError> {
        Self::new(DEFAULT_SERVICE_URL)
    }

    fn route_url(&self, waypoints: &[LatLng], mode: TransportMode) -> String {
        // OSRM wants lon,lat pairs joined by ';' in the path.
        let coords = waypoints
            .iter()
            .map(|p| format!("{},{}", p.lng, p.lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/{}/{}?alternatives=true&steps=true&geometries=geojson&overview=full",
            self.base_url,
            mode.profile(),
            coords
        )
    }
}

impl RoutingBackend for OsrmClient {
    fn request_routes(
        &self,
        waypoints: &[LatLng],
        mode: TransportMode,
    ) -> Result<Vec<CandidateRoute>, RoutingError> {
        if waypoints.len() < 2 {
            return Err(RoutingError::InsufficientWaypoints {
                got: waypoints.len(),
            });
        }

        let url = self.route_url(waypoints, mode);
        log::debug!("[OSRM] GET {url}");

        let response = self.client.get(&url).send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() {
            // OSRM reports errors as JSON with a code; fall back to the raw
            // body when the shape does not match.
            return match serde_json::from_str::<OsrmErrorPayload>(&text) {
                Ok(payload) => Err(RoutingError::Service {
                    code: payload.code,
                    message: payload.message.unwrap_or_default(),
                }),
                Err(_) => Err(RoutingError::Service {
                    code: status.as_u16().to_string(),
                    message: text,
                }),
            };
        }

        let body: OsrmResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!("Failed to parse OSRM response from {url}: {e}");
            e
        })?;

        if body.code != "Ok" {
            return Err(RoutingError::Service {
                code: body.code,
                message: body.message.unwrap_or_default(),
            });
        }

        Ok(body.routes.into_iter().map(CandidateRoute::from).collect())
    }
}

#[derive(Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    distance: f64,
    #[serde(default)]
    duration: Option<f64>,
    geometry: OsrmGeometry,
    #[serde(default)]
    legs: Vec<OsrmLeg>,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order: [lon, lat].
    coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct OsrmLeg {
    #[serde(default)]
    steps: Vec<OsrmStep>,
}

#[derive(Deserialize)]
struct OsrmStep {
    #[serde(default)]
    name: String,
    #[serde(default)]
    distance: Option<f64>,
    maneuver: OsrmManeuver,
}

#[derive(Deserialize)]
struct OsrmManeuver {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    modifier: Option<String>,
}

impl From<OsrmRoute> for CandidateRoute {
    fn from(r: OsrmRoute) -> Self {
        let coordinates = r
            .geometry
            .coordinates
            .iter()
            .map(|c| LatLng::new(c[1], c[0]))
            .collect();

        let instructions = r
            .legs
            .into_iter()
            .flat_map(|leg| leg.steps)
            .map(Instruction::from)
            .collect();

        CandidateRoute {
            distance_m: r.distance,
            duration_s: r.duration,
            coordinates,
            instructions,
        }
    }
}

impl From<OsrmStep> for Instruction {
    fn from(step: OsrmStep) -> Self {
        let maneuver = classify_maneuver(&step.maneuver.kind, step.maneuver.modifier.as_deref());
        let text = instruction_text(&step.maneuver.kind, step.maneuver.modifier.as_deref(), &step.name);
        Instruction {
            maneuver,
            text,
            distance_m: step.distance,
        }
    }
}

fn classify_maneuver(kind: &str, modifier: Option<&str>) -> Maneuver {
    match kind {
        "depart" => Maneuver::Head,
        "arrive" => Maneuver::Other,
        _ => match modifier {
            Some("straight") => Maneuver::Straight,
            Some("right") | Some("sharp right") => Maneuver::TurnRight,
            Some("left") | Some("sharp left") => Maneuver::TurnLeft,
            Some("slight right") => Maneuver::SlightRight,
            Some("slight left") => Maneuver::SlightLeft,
            None if kind == "continue" => Maneuver::Straight,
            _ => Maneuver::Other,
        },
    }
}

fn instruction_text(kind: &str, modifier: Option<&str>, road: &str) -> String {
    let phrase = match kind {
        "depart" => "Head out".to_string(),
        "arrive" => return "You have arrived at your destination".to_string(),
        "roundabout" | "rotary" => "Take the roundabout".to_string(),
        "merge" => match modifier {
            Some(m) => format!("Merge {m}"),
            None => "Merge".to_string(),
        },
        _ => match modifier {
            Some("straight") | None => "Continue straight".to_string(),
            Some(m) => format!("Turn {m}"),
        },
    };

    if road.is_empty() {
        phrase
    } else {
        format!("{phrase} onto {road}")
    }
}
