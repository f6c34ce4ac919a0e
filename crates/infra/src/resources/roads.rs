use olamaps_domain::{NearestRoadsRequest, Result, SnapToRoadRequest};
use serde_json::Value;

super::resource! {
    /// Road snapping
    Roads
}

impl Roads<'_> {
    /// `GET /routing/v1/snapToRoad`
    pub async fn snap_to_road(&self, request: &SnapToRoadRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /routing/v1/nearestRoads`
    pub async fn nearest_roads(&self, request: &NearestRoadsRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }
}
