use serde::Serialize;

use crate::export::{ExportError, ExportFile};
use crate::model::RouteSummary;

pub const FILENAME: &str = "route.geojson";
pub const MIME: &str = "application/geo+json";

#[derive(Debug, Serialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: Properties,
    geometry: Geometry,
}

/// Per the GeoJSON convention all values are carried as strings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Properties {
    distance: String,
    time: String,
    average_speed: String,
    transport_mode: String,
}

#[derive(Debug, Serialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: &'static str,
    /// GeoJSON mandates [longitude, latitude] — the reverse of the
    /// internal lat/lng storage order.
    coordinates: Vec<[f64; 2]>,
}

pub fn render(summary: &RouteSummary) -> Result<ExportFile, ExportError> {
    let doc = FeatureCollection {
        kind: "FeatureCollection",
        features: vec![Feature {
            kind: "Feature",
            properties: Properties {
                distance: format!("{:.2}", summary.distance_km),
                time: summary.duration_text.clone(),
                average_speed: summary.average_speed_kmh.to_string(),
                transport_mode: summary.mode.to_string(),
            },
            geometry: Geometry {
                kind: "LineString",
                coordinates: summary.coordinates.iter().map(|c| [c.lng, c.lat]).collect(),
            },
        }],
    };

    Ok(ExportFile {
        bytes: serde_json::to_vec_pretty(&doc)?,
        filename: FILENAME.to_string(),
        mime: MIME,
    })
}
