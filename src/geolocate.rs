use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::model::LatLng;

#[derive(Error, Debug)]
pub enum GeolocateError {
    #[error("Geolocation request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid geolocation response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Geolocation service error: {0}")]
    Service(String),
}

/// Where-am-I provider. Always fallible; callers surface failures as a
/// notice and carry on.
pub trait GeoLocator {
    fn locate(&self) -> Result<LatLng, GeolocateError>;
}

const IP_API_URL: &str = "http://ip-api.com/json";

/// Coarse IP-based geolocation. Good enough to seed a starting waypoint;
/// shells with access to a real positioning source can substitute their own
/// [`GeoLocator`].
pub struct IpApiLocator {
    client: Client,
    url: String,
}

impl IpApiLocator {
    pub fn new() -> Result<Self, GeolocateError> {
        Ok(Self {
            client: Client::builder().timeout(Duration::from_secs(10)).build()?,
            url: IP_API_URL.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl GeoLocator for IpApiLocator {
    fn locate(&self) -> Result<LatLng, GeolocateError> {
        log::debug!("[GEO] GET {}", self.url);
        let text = self.client.get(&self.url).send()?.text()?;
        parse_body(&text)
    }
}

fn parse_body(text: &str) -> Result<LatLng, GeolocateError> {
    let body: IpApiResponse = serde_json::from_str(text)?;

    if body.status != "success" {
        return Err(GeolocateError::Service(
            body.message.unwrap_or_else(|| body.status.clone()),
        ));
    }

    match (body.lat, body.lon) {
        (Some(lat), Some(lon)) => Ok(LatLng::new(lat, lon)),
        _ => Err(GeolocateError::Service(
            "response missing coordinates".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_body_yields_lat_lng() {
        let p = parse_body(r#"{"status":"success","lat":48.85,"lon":2.35}"#).unwrap();
        assert_eq!(p, LatLng::new(48.85, 2.35));
    }

    #[test]
    fn failed_status_surfaces_the_service_message() {
        let err = parse_body(r#"{"status":"fail","message":"private range"}"#).unwrap_err();
        assert!(matches!(err, GeolocateError::Service(ref m) if m == "private range"));

        // No message: the status itself is the explanation.
        let err = parse_body(r#"{"status":"fail"}"#).unwrap_err();
        assert!(matches!(err, GeolocateError::Service(ref m) if m == "fail"));
    }

    #[test]
    fn success_without_coordinates_is_an_error() {
        let err = parse_body(r#"{"status":"success","lat":48.85}"#).unwrap_err();
        assert!(matches!(err, GeolocateError::Service(_)));
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = parse_body("not json at all").unwrap_err();
        assert!(matches!(err, GeolocateError::Parse(_)));
    }
}
