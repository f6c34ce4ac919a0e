//! Resource wrappers
//!
//! Thin, borrowed views over an [`OlaMapsClient`](crate::OlaMapsClient),
//! one per API area. Each holds the [`RequestOptions`] applied to every call
//! made through it.

mod geocode;
mod map_tiles;
mod places;
mod roads;
mod routing;

pub use geocode::Geocode;
pub use map_tiles::MapTiles;
pub use places::Places;
pub use roads::Roads;
pub use routing::Routing;

/// Shared constructor and option handling for the wrappers.
macro_rules! resource {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<'a> {
            client: &'a $crate::api::OlaMapsClient,
            options: ::olamaps_domain::RequestOptions,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(client: &'a $crate::api::OlaMapsClient) -> Self {
                Self { client, options: ::olamaps_domain::RequestOptions::default() }
            }

            /// Send these correlation headers with every call.
            #[must_use]
            pub fn with_options(mut self, options: ::olamaps_domain::RequestOptions) -> Self {
                self.options = options;
                self
            }

            #[must_use]
            pub fn options(&self) -> &::olamaps_domain::RequestOptions {
                &self.options
            }
        }
    };
}

use resource;
