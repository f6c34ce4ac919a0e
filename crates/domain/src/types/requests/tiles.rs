//! Map tile, style, glyph and static map requests
//!
//! Path segments are substituted into the endpoint templates verbatim.

use crate::endpoints::{self, EndpointRequest, HttpMethod};
use crate::types::requests::ImageFormat;
use crate::types::QueryParams;

/// TileJSON document for a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileJsonRequest {
    pub dataset: String,
}

impl TileJsonRequest {
    pub fn new(dataset: impl Into<String>) -> Self {
        Self { dataset: dataset.into() }
    }
}

impl EndpointRequest for TileJsonRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::TILEJSON.expand(&[("datasetName", &self.dataset)])
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// A single vector tile (protobuf)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorTileRequest {
    pub dataset: String,
    pub z: u32,
    pub x: u32,
    pub y: u32,
}

impl VectorTileRequest {
    pub fn new(dataset: impl Into<String>, z: u32, x: u32, y: u32) -> Self {
        Self { dataset: dataset.into(), z, x, y }
    }
}

impl EndpointRequest for VectorTileRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::VECTOR_TILE.expand(&[
            ("datasetName", &self.dataset),
            ("z", &self.z),
            ("x", &self.x),
            ("y", &self.y),
        ])
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// List of available map styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StylesRequest;

impl EndpointRequest for StylesRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::STYLES.as_str().to_string()
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Style document for a named style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDetailsRequest {
    pub style_name: String,
}

impl StyleDetailsRequest {
    pub fn new(style_name: impl Into<String>) -> Self {
        Self { style_name: style_name.into() }
    }
}

impl EndpointRequest for StyleDetailsRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::STYLE_DETAILS.expand(&[("styleName", &self.style_name)])
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Glyph range for a font stack, e.g. `Noto Sans Regular`, `0`-`255`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRangeRequest {
    pub fontstack: String,
    pub start: u32,
    pub end: u32,
}

impl GlyphRangeRequest {
    pub fn new(fontstack: impl Into<String>, start: u32, end: u32) -> Self {
        Self { fontstack: fontstack.into(), start, end }
    }
}

impl EndpointRequest for GlyphRangeRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::GLYPH_RANGE.expand(&[
            ("fontstack", &self.fontstack),
            ("start", &self.start),
            ("end", &self.end),
        ])
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
    }
}

/// Image size and overlays shared by the static map requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMapImage {
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub marker: Option<String>,
    pub path: Option<String>,
}

impl StaticMapImage {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, format: ImageFormat::Png, marker: None, path: None }
    }

    #[must_use]
    pub fn format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }

    /// Marker overlay, in the service's marker syntax.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    /// Path overlay, in the service's path syntax.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn query_params(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("marker", self.marker.as_ref())
            .with_opt("path", self.path.as_ref())
    }
}

/// Static map image centered on a point
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMapCenterRequest {
    pub style_name: String,
    pub lon: f64,
    pub lat: f64,
    pub zoom: f64,
    pub image: StaticMapImage,
}

impl StaticMapCenterRequest {
    pub fn new(
        style_name: impl Into<String>,
        lon: f64,
        lat: f64,
        zoom: f64,
        image: StaticMapImage,
    ) -> Self {
        Self { style_name: style_name.into(), lon, lat, zoom, image }
    }
}

impl EndpointRequest for StaticMapCenterRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::STATIC_MAP_CENTER.expand(&[
            ("styleName", &self.style_name),
            ("lon", &self.lon),
            ("lat", &self.lat),
            ("zoom", &self.zoom),
            ("width", &self.image.width),
            ("height", &self.image.height),
            ("format", &self.image.format),
        ])
    }

    fn query_params(&self) -> QueryParams {
        self.image.query_params()
    }
}

/// Static map image covering a bounding box
#[derive(Debug, Clone, PartialEq)]
pub struct StaticMapBboxRequest {
    pub style_name: String,
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
    pub image: StaticMapImage,
}

impl StaticMapBboxRequest {
    pub fn new(
        style_name: impl Into<String>,
        (minx, miny): (f64, f64),
        (maxx, maxy): (f64, f64),
        image: StaticMapImage,
    ) -> Self {
        Self { style_name: style_name.into(), minx, miny, maxx, maxy, image }
    }
}

impl EndpointRequest for StaticMapBboxRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::STATIC_MAP_BBOX.expand(&[
            ("styleName", &self.style_name),
            ("minx", &self.minx),
            ("miny", &self.miny),
            ("maxx", &self.maxx),
            ("maxy", &self.maxy),
            ("width", &self.image.width),
            ("height", &self.image.height),
            ("format", &self.image.format),
        ])
    }

    fn query_params(&self) -> QueryParams {
        self.image.query_params()
    }
}

/// Static map image framed automatically around its overlays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticMapAutoRequest {
    pub style_name: String,
    pub image: StaticMapImage,
}

impl StaticMapAutoRequest {
    pub fn new(style_name: impl Into<String>, image: StaticMapImage) -> Self {
        Self { style_name: style_name.into(), image }
    }
}

impl EndpointRequest for StaticMapAutoRequest {
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        endpoints::STATIC_MAP_AUTO.expand(&[
            ("styleName", &self.style_name),
            ("width", &self.image.width),
            ("height", &self.image.height),
            ("format", &self.image.format),
        ])
    }

    fn query_params(&self) -> QueryParams {
        self.image.query_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_tile_path() {
        let request = VectorTileRequest::new("planet", 14, 110, 1010);
        assert_eq!(request.path(), "/tiles/vector/v1/data/planet/14/110/1010.pbf");
        assert!(request.query_params().is_empty());
    }

    #[test]
    fn dataset_with_reserved_characters_is_verbatim() {
        let request = VectorTileRequest::new("planet/extra?x#y", 0, 0, 0);
        assert_eq!(request.path(), "/tiles/vector/v1/data/planet/extra?x#y/0/0/0.pbf");
    }

    #[test]
    fn tilejson_and_style_paths() {
        assert_eq!(TileJsonRequest::new("planet").path(), "/tiles/vector/v1/data/planet.json");
        assert_eq!(
            StyleDetailsRequest::new("default-light-standard").path(),
            "/tiles/vector/v1/styles/default-light-standard/style.json"
        );
        assert_eq!(StylesRequest.path(), "/tiles/vector/v1/styles.json");
    }

    #[test]
    fn glyph_range_keeps_spaces() {
        let request = GlyphRangeRequest::new("Noto Sans Regular", 0, 255);
        assert_eq!(request.path(), "/tiles/vector/v1/fonts/Noto Sans Regular/0-255.pbf");
    }

    #[test]
    fn static_map_center_path_and_overlays() {
        let image =
            StaticMapImage::new(800, 600).format(ImageFormat::Jpg).marker("77.61,12.93|red");
        let request =
            StaticMapCenterRequest::new("default-light-standard", 77.61, 12.93, 15.0, image);

        assert_eq!(
            request.path(),
            "/tiles/v1/styles/default-light-standard/static/77.61,12.93,15/800x600.jpg"
        );
        assert_eq!(request.query_params().get("marker"), Some("77.61,12.93|red"));
        assert!(!request.query_params().contains_key("path"));
    }

    #[test]
    fn static_map_bbox_path() {
        let request = StaticMapBboxRequest::new(
            "default-light-standard",
            (77.5, 12.9),
            (77.6, 13.0),
            StaticMapImage::new(512, 512),
        );
        assert_eq!(
            request.path(),
            "/tiles/v1/styles/default-light-standard/static/77.5,12.9,77.6,13/512x512.png"
        );
    }

    #[test]
    fn static_map_auto_path() {
        let image = StaticMapImage::new(300, 200).path("1,2|3,4");
        let request = StaticMapAutoRequest::new("osm-bright", image);
        assert_eq!(request.path(), "/tiles/v1/styles/osm-bright/static/auto/300x200.png");
        assert_eq!(request.query_params().get("path"), Some("1,2|3,4"));
    }
}
