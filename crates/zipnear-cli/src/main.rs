//! zipnear — Command-line interface for zipnear-core
//!
//! Finds providers near a zip code and prints them best tier first,
//! nearest first within a tier.
//!
//! Usage examples
//! --------------
//!
//! - Live search (API key from `--api-key`, `ZIP_CODE_API_KEY` or `.env`)
//!   $ zipnear --records providers.json search 12345 --radius 10
//!   $ zipnear --records providers.json.gz --json search 10115 --radius 5 --unit km
//!
//! - Offline ranking against a saved radius API response
//!   $ zipnear --records providers.json rank --distances radius.json
//!
//! Logging goes to stderr. Use `-v`/`-vv` or `RUST_LOG=zipnear_core=debug`.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;
use zipnear_core::{rank_radius_result, DistanceUnit, ProviderDirectory, RadiusResult, RankedResult};

fn main() -> anyhow::Result<()> {
    // A missing .env is fine.
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let records_path = args
        .records
        .as_deref()
        .context("no provider directory given (use --records or ZIPNEAR_RECORDS)")?;
    let directory = load_directory(records_path)?;
    tracing::debug!(providers = directory.len(), "provider directory ready");

    let (results, unit) = match args.command {
        Commands::Search {
            zip,
            radius,
            unit,
            api_key,
            base_url,
            timeout,
        } => {
            let unit: DistanceUnit = unit.parse()?;
            let results = search(&zip, radius, unit, api_key, base_url, timeout, directory)?;
            (results, unit)
        }

        Commands::Rank { distances, unit } => {
            let unit: DistanceUnit = unit.parse()?;
            let body = std::fs::read_to_string(&distances)
                .with_context(|| format!("reading {}", distances.display()))?;
            let found = RadiusResult::from_api_body(unit, &body)?;
            (rank_radius_result(&found, &directory)?, unit)
        }
    };

    print_results(&results, unit, args.json)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "zipnear_core=debug,info",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_directory(path: &Path) -> anyhow::Result<ProviderDirectory> {
    #[cfg(feature = "json")]
    {
        ProviderDirectory::load_from_path(path)
            .with_context(|| format!("loading provider directory {}", path.display()))
    }

    #[cfg(not(feature = "json"))]
    {
        anyhow::bail!(
            "cannot load {}: built without the 'json' feature",
            path.display()
        )
    }
}

#[cfg(feature = "http")]
fn search(
    zip: &str,
    radius: f64,
    unit: DistanceUnit,
    api_key: String,
    base_url: Option<String>,
    timeout: u64,
    directory: ProviderDirectory,
) -> anyhow::Result<Vec<RankedResult>> {
    use zipnear_core::{ClientConfig, ProviderLocator, RadiusQuery, ZipCodeApiClient};

    let query = RadiusQuery::new(zip, radius, unit)?;

    let mut config = ClientConfig::new(api_key).with_timeout_secs(timeout);
    if let Some(url) = base_url {
        config = config.with_base_url(url);
    }
    let client = ZipCodeApiClient::new(&config)?;

    let locator = ProviderLocator::new(client, directory);
    Ok(locator.find_within_radius(&query)?)
}

#[cfg(not(feature = "http"))]
fn search(
    _zip: &str,
    _radius: f64,
    _unit: DistanceUnit,
    _api_key: String,
    _base_url: Option<String>,
    _timeout: u64,
    _directory: ProviderDirectory,
) -> anyhow::Result<Vec<RankedResult>> {
    anyhow::bail!("live search needs the 'http' feature; use `rank` with a saved response")
}

fn print_results(results: &[RankedResult], unit: DistanceUnit, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No providers found.");
        return Ok(());
    }

    for r in results {
        println!("{}", result_line(r, unit));
        if let Some(contact) = contact_line(r) {
            println!("                  {contact}");
        }
    }
    Ok(())
}

fn result_line(r: &RankedResult, unit: DistanceUnit) -> String {
    format!(
        "{}  {:>8.2} {:<4}  {} — {}, {}, {}",
        r.tier,
        r.distance,
        unit.as_str(),
        r.name,
        r.address,
        r.city,
        r.state
    )
}

fn contact_line(r: &RankedResult) -> Option<String> {
    match (r.contact_name.as_deref(), r.contact_email.as_deref()) {
        (Some(name), Some(email)) => Some(format!("{name} <{email}>")),
        (Some(name), None) => Some(name.to_string()),
        (None, Some(email)) => Some(email.to_string()),
        (None, None) => None,
    }
}
