use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A geographic point as stored internally: latitude first, longitude second.
///
/// Exporters that target GeoJSON must emit `[lng, lat]` — see `export::geojson`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Travel mode requested by the user. Drives both the routing profile sent
/// to the service and the fallback speed used when the service reports no
/// usable duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Motorcycle,
    Foot,
    PublicTransport,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Motorcycle,
        TransportMode::Foot,
        TransportMode::PublicTransport,
    ];

    /// Nominal average speed (km/h) assumed when the routing service omits
    /// or misreports a duration. The public OSRM backend has no native
    /// `public_transport` profile, so that mode always ends up here.
    pub fn fallback_speed_kmh(self) -> f64 {
        match self {
            TransportMode::Car => 80.0,
            TransportMode::Motorcycle => 100.0,
            TransportMode::Foot => 15.0,
            TransportMode::PublicTransport => 50.0,
        }
    }

    /// Routing-service profile identifier for this mode.
    pub fn profile(self) -> &'static str {
        match self {
            TransportMode::Car => "car",
            TransportMode::Motorcycle => "motorcycle",
            TransportMode::Foot => "foot",
            TransportMode::PublicTransport => "public_transport",
        }
    }

    /// Permissive parse used by the interactive session.
    pub fn parse(input: &str) -> Option<Self> {
        let t = input.trim().to_lowercase().replace(['-', ' '], "_");
        match t.as_str() {
            "car" | "driving" => Some(TransportMode::Car),
            "motorcycle" | "motorbike" => Some(TransportMode::Motorcycle),
            "foot" | "walk" | "walking" => Some(TransportMode::Foot),
            "public_transport" | "transit" => Some(TransportMode::PublicTransport),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        self.profile()
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One maneuver class of a turn-by-turn step, as classified by the routing
/// service. Anything the glyph table does not know collapses to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Maneuver {
    Head,
    Straight,
    TurnRight,
    TurnLeft,
    SlightRight,
    SlightLeft,
    Other,
}

impl Maneuver {
    /// Directional glyph shown next to the instruction text.
    pub fn glyph(self) -> char {
        match self {
            Maneuver::Head | Maneuver::Straight => '↑',
            Maneuver::TurnRight => '→',
            Maneuver::TurnLeft => '←',
            Maneuver::SlightRight => '↗',
            Maneuver::SlightLeft => '↖',
            Maneuver::Other => '•',
        }
    }
}

/// One turn-by-turn step of a candidate route.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub maneuver: Maneuver,
    pub text: String,
    /// Distance to the next maneuver, when the service reports one.
    pub distance_m: Option<f64>,
}

/// One route alternative as returned by the routing service.
#[derive(Debug, Clone)]
pub struct CandidateRoute {
    pub distance_m: f64,
    /// Total travel time as reported by the service. Absent or non-finite
    /// values are treated as unusable by the summary builder.
    pub duration_s: Option<f64>,
    pub coordinates: Vec<LatLng>,
    pub instructions: Vec<Instruction>,
}

/// One display-ready step: instruction text paired with its glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStep {
    pub glyph: char,
    pub text: String,
    pub distance_m: Option<f64>,
}

/// Display- and export-ready projection of one selected route.
///
/// Immutable once built; recomputation replaces it wholesale. Invariant:
/// `average_speed_kmh` is positive and finite.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub duration_text: String,
    pub average_speed_kmh: f64,
    pub mode: TransportMode,
    pub steps: Vec<SummaryStep>,
    pub coordinates: Vec<LatLng>,
}

impl RouteSummary {
    pub fn distance_text(&self) -> String {
        format!("{:.2} km", self.distance_km)
    }

    pub fn speed_text(&self) -> String {
        format!("{} km/h", self.average_speed_kmh)
    }
}
