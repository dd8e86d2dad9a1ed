use crate::model::{CandidateRoute, RouteSummary, SummaryStep, TransportMode};

/// Derive the display-ready summary for one selected route.
///
/// Pure: no network, no shared state. The caller replaces any previous
/// summary wholesale with the returned value.
pub fn build(route: &CandidateRoute, mode: TransportMode) -> RouteSummary {
    let distance_km = route.distance_m / 1000.0;
    let average_speed_kmh = average_speed(distance_km, route.duration_s, mode);

    let total_minutes = (distance_km / average_speed_kmh) * 60.0;

    let steps = route
        .instructions
        .iter()
        .map(|i| SummaryStep {
            glyph: i.maneuver.glyph(),
            text: i.text.clone(),
            distance_m: i.distance_m,
        })
        .collect();

    RouteSummary {
        distance_km,
        duration_text: format_duration(total_minutes),
        average_speed_kmh,
        mode,
        steps,
        coordinates: route.coordinates.clone(),
    }
}

/// Reported duration wins when usable; the per-mode nominal speed covers the
/// rest. "Unusable" is strictly `<= 0` or non-finite, nothing fuzzier.
fn average_speed(distance_km: f64, duration_s: Option<f64>, mode: TransportMode) -> f64 {
    let computed = duration_s
        .filter(|d| d.is_finite() && *d > 0.0)
        .map(|d| distance_km / (d / 3600.0));

    match computed {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(_) => {
            // Zero-distance route with a reported duration; keep the speed
            // positive so the duration math stays finite.
            log::warn!(
                "Degenerate computed speed for {mode}, using nominal {} km/h",
                mode.fallback_speed_kmh()
            );
            mode.fallback_speed_kmh()
        }
        None => {
            log::warn!(
                "Unusable duration from service for {mode}, using nominal {} km/h",
                mode.fallback_speed_kmh()
            );
            mode.fallback_speed_kmh()
        }
    }
}

/// `"{hours}h {minutes}m"` with hours = floor(total/60) and
/// minutes = round(total mod 60).
fn format_duration(total_minutes: f64) -> String {
    let hours = (total_minutes / 60.0).floor() as i64;
    let minutes = (total_minutes % 60.0).round() as i64;
    format!("{hours}h {minutes}m")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Instruction, LatLng, Maneuver};

    fn route(distance_m: f64, duration_s: Option<f64>) -> CandidateRoute {
        CandidateRoute {
            distance_m,
            duration_s,
            coordinates: vec![LatLng::new(48.85, 2.35), LatLng::new(48.86, 2.36)],
            instructions: vec![Instruction {
                maneuver: Maneuver::TurnRight,
                text: "Turn right onto Main St".to_string(),
                distance_m: Some(500.0),
            }],
        }
    }

    #[test]
    fn car_with_reported_duration_uses_it() {
        let s = build(&route(10_000.0, Some(1800.0)), TransportMode::Car);
        assert!((s.average_speed_kmh - 20.0).abs() < 1e-9);
        assert_eq!(s.distance_text(), "10.00 km");
        assert_eq!(s.duration_text, "0h 30m");
    }

    #[test]
    fn zero_duration_activates_speed_table() {
        let s = build(&route(25_000.0, Some(0.0)), TransportMode::PublicTransport);
        assert_eq!(s.average_speed_kmh, 50.0);
        assert_eq!(s.duration_text, "0h 30m");
    }

    #[test]
    fn missing_and_nonfinite_durations_activate_speed_table() {
        let s = build(&route(40_000.0, None), TransportMode::Car);
        assert_eq!(s.average_speed_kmh, 80.0);
        assert_eq!(s.duration_text, "0h 30m");

        for bad in [f64::NAN, f64::INFINITY, -60.0] {
            let s = build(&route(40_000.0, Some(bad)), TransportMode::Car);
            assert_eq!(s.average_speed_kmh, 80.0);
        }
    }

    #[test]
    fn tiny_but_positive_duration_is_not_second_guessed() {
        // 100 m in 1 s: implausible but usable by the strict rule.
        let s = build(&route(100.0, Some(1.0)), TransportMode::Foot);
        assert!((s.average_speed_kmh - 360.0).abs() < 1e-9);
    }

    #[test]
    fn speed_is_always_positive_and_finite() {
        let cases = [
            route(0.0, Some(600.0)),
            route(0.0, None),
            route(10_000.0, Some(f64::NAN)),
            route(10_000.0, Some(1800.0)),
        ];
        for r in &cases {
            let s = build(r, TransportMode::Foot);
            assert!(s.average_speed_kmh > 0.0 && s.average_speed_kmh.is_finite());
        }
    }

    #[test]
    fn instructions_pass_through_with_glyphs() {
        let s = build(&route(10_000.0, Some(1800.0)), TransportMode::Car);
        assert_eq!(s.steps.len(), 1);
        assert_eq!(s.steps[0].glyph, '→');
        assert_eq!(s.steps[0].text, "Turn right onto Main St");
        assert_eq!(s.steps[0].distance_m, Some(500.0));
        assert_eq!(s.coordinates.len(), 2);
    }

    #[test]
    fn duration_format_splits_hours_and_minutes() {
        assert_eq!(format_duration(0.0), "0h 0m");
        assert_eq!(format_duration(30.0), "0h 30m");
        assert_eq!(format_duration(90.0), "1h 30m");
        assert_eq!(format_duration(125.4), "2h 5m");
    }
}
