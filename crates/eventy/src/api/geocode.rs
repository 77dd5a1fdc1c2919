//! Nominatim geocoding client.
//!
//! Forward search is pinned to the supported country and takes the first hit
//! only; the caller bounds-checks the result. Reverse lookups resolve a point
//! to a display address, and any failure there is non-fatal by design.

use std::fmt;

use eventy_core::{GeoPoint, SelectedLocation};
use serde::Deserialize;

#[derive(Debug)]
pub enum GeocodeError {
    Transport(reqwest::Error),
    /// The service answered but the body was not usable.
    Malformed(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Transport(e) => write!(f, "geocoding request failed: {e}"),
            GeocodeError::Malformed(msg) => write!(f, "unusable geocoding response: {msg}"),
        }
    }
}

impl std::error::Error for GeocodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeocodeError::Transport(e) => Some(e),
            GeocodeError::Malformed(_) => None,
        }
    }
}

impl From<reqwest::Error> for GeocodeError {
    fn from(err: reqwest::Error) -> Self {
        GeocodeError::Transport(err)
    }
}

/// One search/reverse hit. Nominatim serializes coordinates as strings.
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
}

impl NominatimPlace {
    fn into_location(self) -> Result<SelectedLocation, GeocodeError> {
        let latitude: f64 = self
            .lat
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("bad latitude {:?}", self.lat)))?;
        let longitude: f64 = self
            .lon
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("bad longitude {:?}", self.lon)))?;
        Ok(SelectedLocation::new(self.display_name, latitude, longitude))
    }
}

/// Reverse responses carry `display_name` on success and an `error` field
/// when the point resolves to nothing.
#[derive(Debug, Clone, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl GeocodeClient {
    pub fn new(http: reqwest::blocking::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Forward geocode a free-text query. `Ok(None)` means the service had no
    /// result for it; bounds checking is the caller's job.
    pub fn search(&self, query: &str) -> Result<Option<SelectedLocation>, GeocodeError> {
        let url = format!("{}/search", self.base_url);
        let places: Vec<NominatimPlace> = self
            .http
            .get(url)
            .query(&[
                ("format", "json"),
                ("q", query),
                ("countrycodes", "eg"),
                ("limit", "1"),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        match places.into_iter().next() {
            Some(place) => place.into_location().map(Some),
            None => Ok(None),
        }
    }

    /// Resolve a point to a display address.
    pub fn reverse(&self, point: GeoPoint) -> Result<String, GeocodeError> {
        let url = format!("{}/reverse", self.base_url);
        let response: ReverseResponse = self
            .http
            .get(url)
            .query(&[
                ("format", "json"),
                ("lat", point.latitude.to_string().as_str()),
                ("lon", point.longitude.to_string().as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        if let Some(error) = response.error {
            return Err(GeocodeError::Malformed(error));
        }
        response
            .display_name
            .ok_or_else(|| GeocodeError::Malformed("no display_name".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_hit_parses_string_coordinates() {
        let body = r#"[{"lat": "30.0443879", "lon": "31.2357257", "display_name": "Tahrir Square, Cairo, Egypt"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        let location = places.into_iter().next().unwrap().into_location().unwrap();
        assert_eq!(location.address, "Tahrir Square, Cairo, Egypt");
        assert!((location.latitude - 30.0443879).abs() < 1e-9);
        assert!((location.longitude - 31.2357257).abs() < 1e-9);
    }

    #[test]
    fn test_bad_coordinates_rejected() {
        let place = NominatimPlace {
            lat: "north-ish".to_string(),
            lon: "31.2".to_string(),
            display_name: "Nowhere".to_string(),
        };
        assert!(matches!(
            place.into_location(),
            Err(GeocodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_reverse_error_body_detected() {
        let parsed: ReverseResponse =
            serde_json::from_str(r#"{"error": "Unable to geocode"}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("Unable to geocode"));
        assert!(parsed.display_name.is_none());
    }
}
