//! Coordinate helpers
//!
//! The API encodes points as `lat,lng` and point lists as `|`-separated
//! points. These types render to exactly that form so they can be passed
//! anywhere a coordinate string is accepted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::OlaMapsError;

/// A WGS84 latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for String {
    fn from(point: LatLng) -> Self {
        point.to_string()
    }
}

impl FromStr for LatLng {
    type Err = OlaMapsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OlaMapsError::InvalidInput(format!("expected `lat,lng`, got `{s}`"));

        let (lat, lng) = s.split_once(',').ok_or_else(invalid)?;
        let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let lng: f64 = lng.trim().parse().map_err(|_| invalid())?;

        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(OlaMapsError::InvalidInput(format!("coordinate out of range: `{s}`")));
        }

        Ok(Self::new(lat, lng))
    }
}

/// Join points into the `lat,lng|lat,lng` list format.
#[must_use]
pub fn join_points(points: &[LatLng]) -> String {
    points.iter().map(ToString::to_string).collect::<Vec<_>>().join("|")
}

/// Two corner points of a bounding box, rendered `lat,lng|lat,lng`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub first: LatLng,
    pub second: LatLng,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(first: LatLng, second: LatLng) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.first, self.second)
    }
}

impl From<BoundingBox> for String {
    fn from(bounds: BoundingBox) -> Self {
        bounds.to_string()
    }
}
