//! Geocoding requests

use crate::endpoints::{self, EndpointRequest, HttpMethod};
use crate::types::QueryParams;

/// Coordinates for a free-form address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardGeocodeRequest {
    pub address: String,
    /// Two corner points, `lat,lng|lat,lng`.
    pub bounds: Option<String>,
    pub language: Option<String>,
}

impl ForwardGeocodeRequest {
    pub fn new(address: impl Into<String>) -> Self {
        Self { address: address.into(), bounds: None, language: None }
    }

    #[must_use]
    pub fn bounds(mut self, bounds: impl Into<String>) -> Self {
        self.bounds = Some(bounds.into());
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl EndpointRequest for ForwardGeocodeRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::FORWARD_GEOCODE.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("address", &self.address)
            .with_opt("bounds", self.bounds.as_ref())
            .with_opt("language", self.language.as_ref())
    }
}

/// Address for a coordinate pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseGeocodeRequest {
    pub latlng: String,
}

impl ReverseGeocodeRequest {
    pub fn new(latlng: impl Into<String>) -> Self {
        Self { latlng: latlng.into() }
    }
}

impl EndpointRequest for ReverseGeocodeRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::REVERSE_GEOCODE.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new().with("latlng", &self.latlng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BoundingBox, LatLng};

    #[test]
    fn forward_geocode_with_bounds() {
        let bounds = BoundingBox::new(LatLng::new(12.9, 77.6), LatLng::new(12.8, 77.5));
        let params = ForwardGeocodeRequest::new("Koramangala").bounds(bounds).query_params();

        assert_eq!(params.get("address"), Some("Koramangala"));
        assert_eq!(params.get("bounds"), Some("12.9,77.6|12.8,77.5"));
        assert!(!params.contains_key("language"));
    }

    #[test]
    fn reverse_geocode_uses_latlng_key() {
        let request = ReverseGeocodeRequest::new(LatLng::new(12.931, 77.616));
        assert_eq!(request.path(), "/places/v1/reverse-geocode");
        assert_eq!(request.query_params().get("latlng"), Some("12.931,77.616"));
    }
}
