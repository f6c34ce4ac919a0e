use olamaps_domain::{ForwardGeocodeRequest, Result, ReverseGeocodeRequest};
use serde_json::Value;

super::resource! {
    /// Forward and reverse geocoding
    Geocode
}

impl Geocode<'_> {
    /// `GET /places/v1/geocode`
    pub async fn forward_geocode(&self, request: &ForwardGeocodeRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }

    /// `GET /places/v1/reverse-geocode`
    pub async fn reverse_geocode(&self, request: &ReverseGeocodeRequest) -> Result<Value> {
        self.client.execute_json(request, &self.options).await
    }
}
