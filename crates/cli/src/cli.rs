//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use olamaps_domain::{LatLng, Overview};

#[derive(Parser, Debug)]
#[command(author, version, about = "Query the Ola Maps REST API")]
pub struct Cli {
    /// Configuration file (TOML or JSON). Defaults to `./olamaps.toml` or
    /// the user config directory when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API key; overrides the configuration file and environment.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Override the API base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub correlation: CorrelationArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Correlation headers attached to the request.
#[derive(Args, Debug, Default)]
pub struct CorrelationArgs {
    /// Value for the `x_request_id` header.
    #[arg(long, global = true)]
    pub request_id: Option<String>,

    /// Value for the `x_correlation_id` header.
    #[arg(long, global = true)]
    pub correlation_id: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up coordinates for an address.
    Geocode {
        /// Free-form address.
        address: String,
        /// Restrict results to `lat,lng|lat,lng`.
        #[arg(long)]
        bounds: Option<String>,
        /// Response language.
        #[arg(long)]
        language: Option<String>,
    },
    /// Look up addresses near a coordinate.
    ReverseGeocode {
        /// Point as `lat,lng`.
        latlng: LatLng,
    },
    /// Suggest places for partial input.
    Autocomplete {
        /// Partial place name or address.
        input: String,
        /// Bias results around `lat,lng`.
        #[arg(long)]
        location: Option<LatLng>,
        /// Bias radius in meters.
        #[arg(long)]
        radius: Option<u32>,
        /// Response language.
        #[arg(long)]
        language: Option<String>,
    },
    /// Route between two points.
    Directions {
        /// Start point as `lat,lng`.
        #[arg(long = "from")]
        origin: LatLng,
        /// End point as `lat,lng`.
        #[arg(long = "to")]
        destination: LatLng,
        /// Intermediate point as `lat,lng`; may be repeated.
        #[arg(long = "via")]
        waypoints: Vec<LatLng>,
        /// Ask for alternative routes.
        #[arg(long)]
        alternatives: bool,
        /// Omit turn-by-turn steps.
        #[arg(long)]
        no_steps: bool,
        /// Overview geometry: full, simplified or false.
        #[arg(long, default_value_t = Overview::Full)]
        overview: Overview,
        /// Include traffic metadata.
        #[arg(long)]
        traffic_metadata: bool,
    },
    /// Snap a GPS trace to the road network.
    SnapToRoad {
        /// Trace point as `lat,lng`; repeat in travel order.
        #[arg(required = true)]
        points: Vec<LatLng>,
        /// Interpolate extra points along the snapped path.
        #[arg(long)]
        enhance_path: bool,
    },
    /// List the available map styles.
    Styles,
    /// Download one vector tile.
    Tile(TileArgs),
}

#[derive(Args, Debug)]
pub struct TileArgs {
    /// Tile dataset name.
    #[arg(long, default_value = "planet")]
    pub dataset: String,
    pub z: u32,
    pub x: u32,
    pub y: u32,
    /// Where to write the tile bytes.
    #[arg(short, long)]
    pub output: PathBuf,
}
