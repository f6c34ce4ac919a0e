use olamaps_domain::{DirectionsRequest, DistanceMatrixRequest, Result};
use serde_json::Value;

super::resource! {
    /// Directions and distance matrices
    Routing
}

impl Routing<'_> {
    /// `POST /routing/v1/directions`
    pub async fn directions(&self, request: &DirectionsRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /routing/v1/distanceMatrix`
    pub async fn distance_matrix(&self, request: &DistanceMatrixRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }
}
