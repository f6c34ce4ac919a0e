//! Per-endpoint request types
//!
//! Each request type owns the parameters of one endpoint and implements
//! [`EndpointRequest`](crate::endpoints::EndpointRequest). Required
//! parameters are constructor arguments; optional ones have chained setters
//! and are omitted from the query string when unset.

pub mod geocode;
pub mod places;
pub mod roads;
pub mod routing;
pub mod tiles;

pub use geocode::{ForwardGeocodeRequest, ReverseGeocodeRequest};
pub use places::{AutocompleteRequest, NearbySearchRequest, PlaceDetailsRequest, TextSearchRequest};
pub use roads::{NearestRoadsRequest, SnapToRoadRequest};
pub use routing::{DirectionsRequest, DistanceMatrixRequest};
pub use tiles::{
    GlyphRangeRequest, StaticMapAutoRequest, StaticMapBboxRequest, StaticMapCenterRequest,
    StaticMapImage, StyleDetailsRequest, StylesRequest, TileJsonRequest, VectorTileRequest,
};

use serde::{Deserialize, Serialize};

use crate::impl_wire_value_conversions;

/// Route overview geometry detail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overview {
    #[default]
    Full,
    Simplified,
    /// No overview geometry at all
    False,
}

impl_wire_value_conversions!(Overview {
    Full => "full",
    Simplified => "simplified",
    False => "false",
});

/// Static map image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
}

impl_wire_value_conversions!(ImageFormat {
    Png => "png",
    Jpg => "jpg",
});
