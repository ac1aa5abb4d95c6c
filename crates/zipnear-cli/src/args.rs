use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for zipnear
#[derive(Debug, Parser)]
#[command(
    name = "zipnear",
    version,
    about = "Find providers near a zip code, ranked by tier and then distance"
)]
pub struct CliArgs {
    /// Path to the provider directory (JSON array, optionally .json.gz)
    #[arg(short = 'r', long = "records", global = true, env = "ZIPNEAR_RECORDS")]
    pub records: Option<PathBuf>,

    /// Print results as a JSON array instead of one line per provider
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Log more (repeat for trace output). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask the radius API for nearby zip codes, then rank matching providers
    Search {
        /// Origin zip code
        zip: String,

        /// Search radius
        #[arg(long = "radius")]
        radius: f64,

        /// Radius and distance unit: mile or km
        #[arg(short = 'u', long = "unit", default_value = "mile")]
        unit: String,

        /// ZipCodeAPI key
        #[arg(long = "api-key", env = "ZIP_CODE_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Override the API base URL
        #[arg(long = "base-url", env = "ZIP_CODE_API_BASE_URL")]
        base_url: Option<String>,

        /// Request timeout in seconds
        #[arg(long = "timeout", default_value_t = 10)]
        timeout: u64,
    },

    /// Rank providers offline against a saved radius API response
    Rank {
        /// JSON file shaped like the radius API body ({"zip_codes": [...]})
        #[arg(short = 'd', long = "distances")]
        distances: PathBuf,

        /// Unit the saved distances are in: mile or km
        #[arg(short = 'u', long = "unit", default_value = "mile")]
        unit: String,
    },
}
