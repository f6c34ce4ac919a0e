//! Subcommand handlers

use anyhow::{Context, Result};
use olamaps_domain::{
    join_points, AutocompleteRequest, DirectionsRequest, ForwardGeocodeRequest, LatLng,
    RequestOptions, ReverseGeocodeRequest, SnapToRoadRequest, VectorTileRequest,
};
use olamaps_infra::OlaMapsClient;
use serde_json::Value;
use tracing::info;

use crate::cli::{Command, TileArgs};

/// Output of a command: JSON to print, or a file that was written.
#[derive(Debug)]
pub enum Outcome {
    Json(Value),
    Written { path: String, bytes: usize },
}

pub async fn run(
    client: &OlaMapsClient,
    options: RequestOptions,
    command: Command,
) -> Result<Outcome> {
    let json = match command {
        Command::Geocode { address, bounds, language } => {
            let mut request = ForwardGeocodeRequest::new(address);
            if let Some(bounds) = bounds {
                request = request.bounds(bounds);
            }
            if let Some(language) = language {
                request = request.language(language);
            }
            client.geocode().with_options(options).forward_geocode(&request).await
        }
        Command::ReverseGeocode { latlng } => {
            let request = ReverseGeocodeRequest::new(latlng);
            client.geocode().with_options(options).reverse_geocode(&request).await
        }
        Command::Autocomplete { input, location, radius, language } => {
            let mut request = AutocompleteRequest::new(input);
            if let Some(location) = location {
                request = request.location(location);
            }
            if let Some(radius) = radius {
                request = request.radius(radius);
            }
            if let Some(language) = language {
                request = request.language(language);
            }
            client.places().with_options(options).autocomplete(&request).await
        }
        Command::Directions {
            origin,
            destination,
            waypoints,
            alternatives,
            no_steps,
            overview,
            traffic_metadata,
        } => {
            let mut request = DirectionsRequest::new(origin, destination)
                .alternatives(alternatives)
                .steps(!no_steps)
                .overview(overview)
                .traffic_metadata(traffic_metadata);
            if !waypoints.is_empty() {
                request = request.waypoints(join_points(&waypoints));
            }
            client.routing().with_options(options).directions(&request).await
        }
        Command::SnapToRoad { points, enhance_path } => {
            let request = snap_to_road_request(&points, enhance_path);
            client.roads().with_options(options).snap_to_road(&request).await
        }
        Command::Styles => client.map_tiles().with_options(options).styles().await,
        Command::Tile(args) => return download_tile(client, options, args).await,
    };

    Ok(Outcome::Json(json?))
}

/// `enhancePath` is only sent when the flag was given.
fn snap_to_road_request(points: &[LatLng], enhance_path: bool) -> SnapToRoadRequest {
    let request = SnapToRoadRequest::new(join_points(points));
    if enhance_path {
        request.enhance_path(true)
    } else {
        request
    }
}

async fn download_tile(
    client: &OlaMapsClient,
    options: RequestOptions,
    args: TileArgs,
) -> Result<Outcome> {
    let request = VectorTileRequest::new(args.dataset, args.z, args.x, args.y);
    let tile = client.map_tiles().with_options(options).vector_tile(&request).await?;

    std::fs::write(&args.output, &tile.body)
        .with_context(|| format!("failed to write tile to {}", args.output.display()))?;
    info!(path = %args.output.display(), bytes = tile.len(), "Tile written");

    Ok(Outcome::Written { path: args.output.display().to_string(), bytes: tile.len() })
}

#[cfg(test)]
mod tests {
    use olamaps_domain::endpoints::EndpointRequest;

    use super::*;

    #[test]
    fn snap_to_road_omits_enhance_path_without_flag() {
        let points = [LatLng::new(12.99, 77.59), LatLng::new(12.98, 77.60)];

        let params = snap_to_road_request(&points, false).query_params();
        assert_eq!(params.get("points"), Some("12.99,77.59|12.98,77.6"));
        assert!(!params.contains_key("enhancePath"));

        let params = snap_to_road_request(&points, true).query_params();
        assert_eq!(params.get("enhancePath"), Some("true"));
    }
}
