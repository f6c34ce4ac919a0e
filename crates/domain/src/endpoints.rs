//! Endpoint templates
//!
//! Every endpoint is a static path pattern with `{placeholder}` segments.
//! Expansion substitutes caller values verbatim: no escaping happens here,
//! the HTTP layer is responsible for encoding the final URL.

use std::fmt::{self, Write as _};

use crate::types::QueryParams;

/// HTTP method used by an endpoint. Fixed per endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// A static URL path pattern with `{name}` placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointTemplate(&'static str);

impl EndpointTemplate {
    #[must_use]
    pub const fn new(pattern: &'static str) -> Self {
        Self(pattern)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Substitute placeholders with the given values.
    ///
    /// Placeholders without a matching value are left untouched. Substituted
    /// values are never re-scanned, so a value containing `{x}` is emitted
    /// literally.
    #[must_use]
    pub fn expand(&self, values: &[(&str, &dyn fmt::Display)]) -> String {
        let mut out = String::with_capacity(self.0.len() + 32);
        let mut rest = self.0;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];

            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                rest = "";
                break;
            };

            let name = &after[..close];
            match values.iter().find(|(key, _)| *key == name) {
                // Writing into a String cannot fail.
                Some((_, value)) => {
                    let _ = write!(out, "{value}");
                }
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            }
            rest = &after[close + 1..];
        }

        out.push_str(rest);
        out
    }
}

impl fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Routing
pub const DIRECTIONS: EndpointTemplate = EndpointTemplate::new("/routing/v1/directions");
pub const DISTANCE_MATRIX: EndpointTemplate = EndpointTemplate::new("/routing/v1/distanceMatrix");

// Roads
pub const SNAP_TO_ROAD: EndpointTemplate = EndpointTemplate::new("/routing/v1/snapToRoad");
pub const NEAREST_ROADS: EndpointTemplate = EndpointTemplate::new("/routing/v1/nearestRoads");

// Places
pub const AUTOCOMPLETE: EndpointTemplate = EndpointTemplate::new("/places/v1/autocomplete");
pub const PLACE_DETAILS: EndpointTemplate = EndpointTemplate::new("/places/v1/details");
pub const NEARBY_SEARCH: EndpointTemplate = EndpointTemplate::new("/places/v1/nearbysearch");
pub const TEXT_SEARCH: EndpointTemplate = EndpointTemplate::new("/places/v1/textsearch");

// Geocoding
pub const FORWARD_GEOCODE: EndpointTemplate = EndpointTemplate::new("/places/v1/geocode");
pub const REVERSE_GEOCODE: EndpointTemplate = EndpointTemplate::new("/places/v1/reverse-geocode");

// Map tiles
pub const TILEJSON: EndpointTemplate =
    EndpointTemplate::new("/tiles/vector/v1/data/{datasetName}.json");
pub const VECTOR_TILE: EndpointTemplate =
    EndpointTemplate::new("/tiles/vector/v1/data/{datasetName}/{z}/{x}/{y}.pbf");
pub const STYLES: EndpointTemplate = EndpointTemplate::new("/tiles/vector/v1/styles.json");
pub const STYLE_DETAILS: EndpointTemplate =
    EndpointTemplate::new("/tiles/vector/v1/styles/{styleName}/style.json");
pub const GLYPH_RANGE: EndpointTemplate =
    EndpointTemplate::new("/tiles/vector/v1/fonts/{fontstack}/{start}-{end}.pbf");
pub const STATIC_MAP_CENTER: EndpointTemplate = EndpointTemplate::new(
    "/tiles/v1/styles/{styleName}/static/{lon},{lat},{zoom}/{width}x{height}.{format}",
);
pub const STATIC_MAP_BBOX: EndpointTemplate = EndpointTemplate::new(
    "/tiles/v1/styles/{styleName}/static/{minx},{miny},{maxx},{maxy}/{width}x{height}.{format}",
);
pub const STATIC_MAP_AUTO: EndpointTemplate =
    EndpointTemplate::new("/tiles/v1/styles/{styleName}/static/auto/{width}x{height}.{format}");

/// A request against one endpoint
///
/// Implementors describe *what* to send; authentication, correlation headers
/// and status handling are added by the dispatcher.
pub trait EndpointRequest {
    /// HTTP method of the endpoint.
    const METHOD: HttpMethod;

    /// Path relative to the API base URL, placeholders expanded.
    fn path(&self) -> String;

    /// Query parameters, excluding authentication.
    fn query_params(&self) -> QueryParams;
}
