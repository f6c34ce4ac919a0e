use olamaps_domain::{
    AutocompleteRequest, NearbySearchRequest, PlaceDetailsRequest, Result, TextSearchRequest,
};
use serde_json::Value;

super::resource! {
    /// Place search and details
    Places
}

impl Places<'_> {
    /// `GET /places/v1/autocomplete`
    pub async fn autocomplete(&self, request: &AutocompleteRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /places/v1/details`
    pub async fn place_details(&self, request: &PlaceDetailsRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /places/v1/nearbysearch`
    pub async fn nearby_search(&self, request: &NearbySearchRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /places/v1/textsearch`
    pub async fn text_search(&self, request: &TextSearchRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }
}
