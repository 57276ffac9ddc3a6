//! Coordinate normalization.
//!
//! Clients send vertices in several shapes: `{lat, lng}`, the long-form
//! `{latitude, longitude}`, or a positional `[lat, lng]` pair. The closed
//! set of accepted shapes is modeled as an untagged enum, tried in that
//! preference order, and normalized to a single canonical `Coordinate`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single canonical vertex. Both fields are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Errors produced while normalizing coordinate input.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A vertex did not resolve to a pair of finite numbers.
    #[error("invalid coordinate: lat and lng must be finite numbers")]
    InvalidCoordinate,
}

/// Raw coordinate input as it appears in a create request.
///
/// Variant order is the resolution order: explicit `lat`/`lng` keys win,
/// then `latitude`/`longitude`, then a positional `[lat, lng]` pair.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    Named { lat: f64, lng: f64 },
    Aliased { latitude: f64, longitude: f64 },
    Positional(f64, f64),
}

impl CoordinateInput {
    /// Normalize to a canonical coordinate, rejecting non-finite values.
    pub fn normalize(&self) -> Result<Coordinate, GeometryError> {
        let (lat, lng) = match *self {
            CoordinateInput::Named { lat, lng } => (lat, lng),
            CoordinateInput::Aliased {
                latitude,
                longitude,
            } => (latitude, longitude),
            CoordinateInput::Positional(lat, lng) => (lat, lng),
        };

        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeometryError::InvalidCoordinate);
        }

        Ok(Coordinate { lat, lng })
    }
}

/// Normalize a sequence of raw inputs, preserving order.
pub fn normalize_all(inputs: &[CoordinateInput]) -> Result<Vec<Coordinate>, GeometryError> {
    inputs.iter().map(CoordinateInput::normalize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<CoordinateInput> {
        serde_json::from_str(json).expect("test input should parse")
    }

    #[test]
    fn named_pair_normalizes() {
        let coords = normalize_all(&parse(r#"[{"lat": 1.5, "lng": -2.5}]"#)).unwrap();
        assert_eq!(coords, vec![Coordinate { lat: 1.5, lng: -2.5 }]);
    }

    #[test]
    fn aliased_pair_normalizes() {
        let coords = normalize_all(&parse(r#"[{"latitude": 10.0, "longitude": 20.0}]"#)).unwrap();
        assert_eq!(
            coords,
            vec![Coordinate {
                lat: 10.0,
                lng: 20.0
            }]
        );
    }

    #[test]
    fn positional_pair_is_lat_then_lng() {
        let coords = normalize_all(&parse("[[3.0, 4.0]]")).unwrap();
        assert_eq!(coords, vec![Coordinate { lat: 3.0, lng: 4.0 }]);
    }

    #[test]
    fn short_keys_win_over_aliases() {
        // Both key sets present: explicit lat/lng take precedence.
        let coords =
            normalize_all(&parse(r#"[{"lat": 1.0, "lng": 2.0, "latitude": 9.0, "longitude": 9.0}]"#))
                .unwrap();
        assert_eq!(coords, vec![Coordinate { lat: 1.0, lng: 2.0 }]);
    }

    #[test]
    fn order_is_preserved() {
        let coords = normalize_all(&parse(
            r#"[{"lat": 1, "lng": 2}, [3, 4], {"latitude": 5, "longitude": 6}]"#,
        ))
        .unwrap();
        let lats: Vec<f64> = coords.iter().map(|c| c.lat).collect();
        assert_eq!(lats, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn non_numeric_value_fails_to_parse() {
        let result: Result<Vec<CoordinateInput>, _> =
            serde_json::from_str(r#"[{"lat": "x", "lng": 1}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_field_fails_to_parse() {
        let result: Result<Vec<CoordinateInput>, _> = serde_json::from_str(r#"[{"lat": 1}]"#);
        assert!(result.is_err());
    }
}
