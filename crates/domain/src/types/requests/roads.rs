//! Roads requests

use crate::constants::DEFAULT_NEAREST_ROADS_RADIUS_M;
use crate::endpoints::{self, EndpointRequest, HttpMethod};
use crate::types::QueryParams;

/// Align a GPS trace with the road network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapToRoadRequest {
    /// Up to 100 points, `lat,lng|lat,lng|...`.
    pub points: String,
    pub enhance_path: Option<bool>,
}

impl SnapToRoadRequest {
    pub fn new(points: impl Into<String>) -> Self {
        Self { points: points.into(), enhance_path: None }
    }

    /// Add intermediate points following road curvature.
    #[must_use]
    pub fn enhance_path(mut self, enhance_path: bool) -> Self {
        self.enhance_path = Some(enhance_path);
        self
    }
}

impl EndpointRequest for SnapToRoadRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::SNAP_TO_ROAD.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("points", &self.points)
            .with_opt("enhancePath", self.enhance_path)
    }
}

/// Nearest road point for each coordinate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearestRoadsRequest {
    pub points: String,
    pub radius: u32,
}

impl NearestRoadsRequest {
    pub fn new(points: impl Into<String>) -> Self {
        Self { points: points.into(), radius: DEFAULT_NEAREST_ROADS_RADIUS_M }
    }

    /// Search radius in meters.
    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }
}

impl EndpointRequest for NearestRoadsRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::NEAREST_ROADS.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new().with("points", &self.points).with("radius", self.radius)
    }
}
