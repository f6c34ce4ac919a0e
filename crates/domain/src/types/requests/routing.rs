//! Routing requests

use crate::constants::DEFAULT_DIRECTIONS_LANGUAGE;
use crate::endpoints::{self, EndpointRequest, HttpMethod};
use crate::types::requests::Overview;
use crate::types::QueryParams;

/// Directions between two points, optionally through waypoints
///
/// Coordinates are `lat,lng` strings; [`LatLng`](crate::types::LatLng)
/// converts into one. Waypoints are `|`-separated, see
/// [`join_points`](crate::types::join_points).
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
    pub waypoints: Option<String>,
    pub alternatives: bool,
    pub steps: bool,
    pub overview: Overview,
    pub languages: String,
    pub traffic_metadata: bool,
}

impl DirectionsRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            waypoints: None,
            alternatives: false,
            steps: true,
            overview: Overview::Full,
            languages: DEFAULT_DIRECTIONS_LANGUAGE.to_string(),
            traffic_metadata: false,
        }
    }

    #[must_use]
    pub fn waypoints(mut self, waypoints: impl Into<String>) -> Self {
        self.waypoints = Some(waypoints.into());
        self
    }

    #[must_use]
    pub fn alternatives(mut self, alternatives: bool) -> Self {
        self.alternatives = alternatives;
        self
    }

    #[must_use]
    pub fn steps(mut self, steps: bool) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn overview(mut self, overview: Overview) -> Self {
        self.overview = overview;
        self
    }

    /// Response language, e.g. `en`, `hi`, `kn`.
    #[must_use]
    pub fn languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    #[must_use]
    pub fn traffic_metadata(mut self, traffic_metadata: bool) -> Self {
        self.traffic_metadata = traffic_metadata;
        self
    }
}

impl EndpointRequest for DirectionsRequest {
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        endpoints::DIRECTIONS.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("origin", &self.origin)
            .with("destination", &self.destination)
            .with_opt("waypoints", self.waypoints.as_ref())
            .with("alternatives", self.alternatives)
            .with("steps", self.steps)
            .with("overview", self.overview)
            .with("languages", &self.languages)
            .with("traffic_metadata", self.traffic_metadata)
    }
}

/// Travel distance and duration between sets of points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrixRequest {
    pub origins: String,
    pub destinations: String,
    pub mode: Option<String>,
}

impl DistanceMatrixRequest {
    pub fn new(origins: impl Into<String>, destinations: impl Into<String>) -> Self {
        Self { origins: origins.into(), destinations: destinations.into(), mode: None }
    }

    #[must_use]
    pub fn mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}

impl EndpointRequest for DistanceMatrixRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::DISTANCE_MATRIX.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("origins", &self.origins)
            .with("destinations", &self.destinations)
            .with_opt("mode", self.mode.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{join_points, LatLng};

    #[test]
    fn directions_defaults() {
        let request = DirectionsRequest::new("12.99,77.54", "12.97,77.58");
        let params = request.query_params();

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(
            pairs,
            vec![
                ("origin", "12.99,77.54"),
                ("destination", "12.97,77.58"),
                ("alternatives", "false"),
                ("steps", "true"),
                ("overview", "full"),
                ("languages", "en"),
                ("traffic_metadata", "false"),
            ]
        );
        assert_eq!(DirectionsRequest::METHOD, HttpMethod::Post);
        assert_eq!(request.path(), "/routing/v1/directions");
    }

    #[test]
    fn directions_with_waypoints_and_overrides() {
        let waypoints = join_points(&[LatLng::new(12.93, 77.63), LatLng::new(12.94, 77.62)]);
        let params = DirectionsRequest::new(LatLng::new(1.0, 2.0), LatLng::new(3.0, 4.0))
            .waypoints(waypoints)
            .alternatives(true)
            .overview(Overview::Simplified)
            .languages("hi")
            .query_params();

        assert_eq!(params.get("origin"), Some("1,2"));
        assert_eq!(params.get("waypoints"), Some("12.93,77.63|12.94,77.62"));
        assert_eq!(params.get("alternatives"), Some("true"));
        assert_eq!(params.get("overview"), Some("simplified"));
        assert_eq!(params.get("languages"), Some("hi"));
    }

    #[test]
    fn distance_matrix_omits_unset_mode() {
        let params = DistanceMatrixRequest::new("1,2", "3,4").query_params();
        assert!(!params.contains_key("mode"));
        assert_eq!(DistanceMatrixRequest::METHOD, HttpMethod::Get);
    }
}
