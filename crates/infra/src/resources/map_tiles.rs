use olamaps_domain::{
    GlyphRangeRequest, RawResponse, Result, StaticMapAutoRequest, StaticMapBboxRequest,
    StaticMapCenterRequest, StyleDetailsRequest, StylesRequest, TileJsonRequest,
    VectorTileRequest,
};
use serde_json::Value;

super::resource! {
    /// Vector tiles, styles, fonts and static map images
    ///
    /// Binary endpoints return a [`RawResponse`] untouched.
    MapTiles
}

impl MapTiles<'_> {
    /// `GET /tiles/vector/v1/data/{datasetName}.json`
    pub async fn tilejson(&self, request: &TileJsonRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /tiles/vector/v1/data/{datasetName}/{z}/{x}/{y}.pbf`
    pub async fn vector_tile(&self, request: &VectorTileRequest) -> Result<RawResponse> {
        self.client.execute_raw(request, &self.options).await
    }

    /// `GET /tiles/vector/v1/styles.json`
    pub async fn styles(&self) -> Result<Value> {
        self.client.execute_json(&StylesRequest, &self.options).await
    }

    /// `GET /tiles/vector/v1/styles/{styleName}/style.json`
    pub async fn style_details(&self, request: &StyleDetailsRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /tiles/vector/v1/fonts/{fontstack}/{start}-{end}.pbf`
    pub async fn glyph_range(&self, request: &GlyphRangeRequest) -> Result<RawResponse> {
        self.client.execute_raw(request, &self.options).await
    }

    /// Static map centered on a point at a zoom level.
    pub async fn static_map_center(&self, request: &StaticMapCenterRequest) -> Result<RawResponse> {
        self.client.execute_raw(request, &self.options).await
    }

    /// Static map covering a bounding box.
    pub async fn static_map_bbox(&self, request: &StaticMapBboxRequest) -> Result<RawResponse> {
        self.client.execute_raw(request, &self.options).await
    }

    /// Static map framed automatically around its markers and paths.
    pub async fn static_map_auto(&self, request: &StaticMapAutoRequest) -> Result<RawResponse> {
        self.client.execute_raw(request, &self.options).await
    }
}
