mod common;

use common::{ScriptedBackend, route};
use trip_router::export::{ExportError, ExportFormat, export};
use trip_router::model::LatLng;
use trip_router::routing::planner::RoutePlanner;
use trip_router::routing::summary;

fn sample_summary() -> trip_router::model::RouteSummary {
    summary::build(
        &route(10_000.0, Some(1800.0)),
        trip_router::model::TransportMode::Car,
    )
}

#[test]
fn geojson_swaps_to_lng_lat_order() {
    let s = sample_summary();
    let file = export(&s, ExportFormat::Geojson).unwrap();
    assert_eq!(file.filename, "route.geojson");
    assert_eq!(file.mime, "application/geo+json");

    let doc: serde_json::Value = serde_json::from_slice(&file.bytes).unwrap();
    assert_eq!(doc["type"], "FeatureCollection");

    let feature = &doc["features"][0];
    assert_eq!(feature["geometry"]["type"], "LineString");

    let coords = feature["geometry"]["coordinates"].as_array().unwrap();
    for (exported, stored) in coords.iter().zip(&s.coordinates) {
        assert_eq!(exported[0].as_f64().unwrap(), stored.lng);
        assert_eq!(exported[1].as_f64().unwrap(), stored.lat);
    }
}

#[test]
fn geojson_properties_are_strings() {
    let file = export(&sample_summary(), ExportFormat::Geojson).unwrap();
    let doc: serde_json::Value = serde_json::from_slice(&file.bytes).unwrap();
    let props = &doc["features"][0]["properties"];

    assert_eq!(props["distance"], "10.00");
    assert_eq!(props["time"], "0h 30m");
    assert_eq!(props["averageSpeed"], "20");
    assert_eq!(props["transportMode"], "car");
}

#[test]
fn csv_contains_summary_block_and_steps() {
    let file = export(&sample_summary(), ExportFormat::Csv).unwrap();
    assert_eq!(file.filename, "route.csv");
    assert_eq!(file.mime, "text/csv");

    let text = String::from_utf8(file.bytes).unwrap();
    assert!(text.contains("Distance,10.00 km"));
    assert!(text.contains("Time,0h 30m"));
    assert!(text.contains("Average speed,20 km/h"));
    assert!(text.contains("Mode,car"));
    assert!(text.contains("step,icon,instruction,distance_km"));
    assert!(text.contains("Head out onto Rue de Rivoli"));
    assert!(text.contains("0.40"));
}

#[test]
fn pdf_renders_a_pdf_document() {
    let file = export(&sample_summary(), ExportFormat::Pdf).unwrap();
    assert_eq!(file.filename, "route_information.pdf");
    assert_eq!(file.mime, "application/pdf");
    assert!(file.bytes.starts_with(b"%PDF"));
}

#[test]
fn export_without_a_route_is_refused() {
    let backend = ScriptedBackend::new();
    let planner = RoutePlanner::new(&backend);

    for format in [ExportFormat::Pdf, ExportFormat::Csv, ExportFormat::Geojson] {
        let err = planner.export_current(format).unwrap_err();
        assert!(matches!(err, ExportError::NoRoute));
    }
}
