use anyhow::{Result, bail};

use crate::model::LatLng;

pub const TIP_COORD_FORM: &str =
    "Coordinates are LAT,LNG in decimal degrees, e.g.: --via \"48.8566,2.3522\"";

/// Parse a `LAT,LNG` pair with range checks.
pub fn parse_lat_lng(input: &str) -> Result<LatLng> {
    let mut parts = input.split(',');
    let (Some(lat_s), Some(lng_s), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("Invalid coordinate '{}'\n{}", input, TIP_COORD_FORM);
    };

    let lat: f64 = lat_s
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid latitude '{}'\n{}", lat_s.trim(), TIP_COORD_FORM))?;
    let lng: f64 = lng_s
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid longitude '{}'\n{}", lng_s.trim(), TIP_COORD_FORM))?;

    if !(-90.0..=90.0).contains(&lat) {
        bail!("Latitude out of range: {} (must be within [-90, 90])", lat);
    }
    if !(-180.0..=180.0).contains(&lng) {
        bail!("Longitude out of range: {} (must be within [-180, 180])", lng);
    }

    Ok(LatLng::new(lat, lng))
}

pub fn validate_via(via: &[String]) -> Result<()> {
    if via.len() < 2 {
        bail!(
            "At least 2 waypoints are required (got {}).\n{}",
            via.len(),
            TIP_COORD_FORM
        );
    }
    Ok(())
}

pub fn validate_route_choice(route: usize) -> Result<()> {
    if route == 0 {
        bail!("--route is 1-based: use 1 for the best route, 2 for the alternative");
    }
    Ok(())
}
