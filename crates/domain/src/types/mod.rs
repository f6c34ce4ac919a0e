//! Domain types and models

pub mod credentials;
pub mod geo;
pub mod options;
pub mod params;
pub mod requests;
pub mod response;

pub use credentials::Credentials;
pub use geo::{join_points, BoundingBox, LatLng};
pub use options::RequestOptions;
pub use params::QueryParams;
pub use requests::*;
pub use response::RawResponse;
