//! Places requests

use crate::endpoints::{self, EndpointRequest, HttpMethod};
use crate::types::QueryParams;

/// Autocomplete suggestions for a partial query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteRequest {
    pub input: String,
    pub origin: Option<String>,
    pub location: Option<String>,
    pub radius: Option<u32>,
    pub strictbounds: Option<bool>,
    pub types: Option<String>,
    pub language: Option<String>,
}

impl AutocompleteRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into(), ..Self::default() }
    }

    /// Point from which straight-line distances are measured.
    #[must_use]
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Search radius in meters; only enforced together with `strictbounds`.
    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn strictbounds(mut self, strictbounds: bool) -> Self {
        self.strictbounds = Some(strictbounds);
        self
    }

    #[must_use]
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl EndpointRequest for AutocompleteRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::AUTOCOMPLETE.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("input", &self.input)
            .with_opt("origin", self.origin.as_ref())
            .with_opt("location", self.location.as_ref())
            .with_opt("radius", self.radius)
            .with_opt("strictbounds", self.strictbounds)
            .with_opt("types", self.types.as_ref())
            .with_opt("language", self.language.as_ref())
    }
}

/// Details of a single place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceDetailsRequest {
    pub place_id: String,
}

impl PlaceDetailsRequest {
    pub fn new(place_id: impl Into<String>) -> Self {
        Self { place_id: place_id.into() }
    }
}

impl EndpointRequest for PlaceDetailsRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::PLACE_DETAILS.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new().with("place_id", &self.place_id)
    }
}

/// Places of the given layers around a location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbySearchRequest {
    pub layers: String,
    pub location: String,
    pub types: Option<String>,
    pub radius: Option<u32>,
    pub strictbounds: Option<bool>,
    pub with_centroid: Option<bool>,
    pub limit: Option<u32>,
}

impl NearbySearchRequest {
    pub fn new(layers: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            layers: layers.into(),
            location: location.into(),
            types: None,
            radius: None,
            strictbounds: None,
            with_centroid: None,
            limit: None,
        }
    }

    #[must_use]
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn strictbounds(mut self, strictbounds: bool) -> Self {
        self.strictbounds = Some(strictbounds);
        self
    }

    #[must_use]
    pub fn with_centroid(mut self, with_centroid: bool) -> Self {
        self.with_centroid = Some(with_centroid);
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl EndpointRequest for NearbySearchRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::NEARBY_SEARCH.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("layers", &self.layers)
            .with("location", &self.location)
            .with_opt("types", self.types.as_ref())
            .with_opt("radius", self.radius)
            .with_opt("strictbounds", self.strictbounds)
            .with_opt("withCentroid", self.with_centroid)
            .with_opt("limit", self.limit)
    }
}

/// Free-text place search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSearchRequest {
    pub input: String,
    pub location: Option<String>,
    pub radius: Option<u32>,
    pub types: Option<String>,
    pub size: Option<u32>,
}

impl TextSearchRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into(), ..Self::default() }
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    #[must_use]
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Maximum number of results.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }
}

impl EndpointRequest for TextSearchRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::TEXT_SEARCH.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with("input", &self.input)
            .with_opt("location", self.location.as_ref())
            .with_opt("radius", self.radius)
            .with_opt("types", self.types.as_ref())
            .with_opt("size", self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autocomplete_sends_only_set_params() {
        let params =
            AutocompleteRequest::new("kempe").radius(1000).strictbounds(true).query_params();

        let pairs: Vec<_> = params.iter().collect();
        assert_eq!(pairs, vec![("input", "kempe"), ("radius", "1000"), ("strictbounds", "true")]);
    }

    #[test]
    fn nearby_search_keeps_types_and_radius_apart() {
        let params = NearbySearchRequest::new("venue", "12.93,77.61")
            .types("restaurant")
            .radius(2500)
            .with_centroid(false)
            .query_params();

        assert_eq!(params.get("types"), Some("restaurant"));
        assert_eq!(params.get("radius"), Some("2500"));
        assert_eq!(params.get("withCentroid"), Some("false"));
        assert!(!params.contains_key("limit"));
    }

    #[test]
    fn place_details_path_and_params() {
        let request = PlaceDetailsRequest::new("ola-platform:5000039498427");
        assert_eq!(request.path(), "/places/v1/details");
        assert_eq!(request.query_params().get("place_id"), Some("ola-platform:5000039498427"));
    }

    #[test]
    fn text_search_size() {
        let params = TextSearchRequest::new("cafes in koramangala").size(5).query_params();
        assert_eq!(params.get("size"), Some("5"));
        assert_eq!(params.len(), 2);
    }
}
