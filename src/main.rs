//! Address autocomplete command line
//!
//! Runs a single autocomplete query and prints the normalized results as JSON.

use address_autocomplete::{
    config::{Settings, SETTINGS_PATH_ENV},
    search::SearchClient,
    Autocomplete,
};
use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("address-autocomplete {}", address_autocomplete::VERSION);
        return Ok(());
    }

    let (address, limit) = match args.as_slice() {
        [address] => (address.as_str(), None),
        [address, limit] => (address.as_str(), Some(limit.parse::<i64>()?)),
        _ => {
            print_usage();
            bail!("expected an address and an optional limit");
        }
    };

    let settings = load_settings()?;
    let autocomplete = Autocomplete::<SearchClient>::from_settings(&settings)?;

    let results = autocomplete.get_autocomplete_details(address, limit).await?;
    info!("Found {} candidate addresses", results.len());

    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let paths = [
        Some(PathBuf::from("autocomplete.yml")),
        Some(PathBuf::from("config/autocomplete.yml")),
        dirs::config_dir().map(|p| p.join("address-autocomplete/autocomplete.yml")),
    ];

    for path in paths.iter().flatten() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

/// Print usage information
fn print_usage() {
    eprintln!(
        r#"
address-autocomplete v{}
Normalized address suggestions from the TomTom fuzzy search API

USAGE:
    address-autocomplete <ADDRESS> [LIMIT]

ARGS:
    <ADDRESS>    Free-text address fragment
    [LIMIT]      Maximum number of results, 1 to 50 (default 20)

ENVIRONMENT VARIABLES:
    TOMTOM_API_KEY                         Provider API key (required)
    ADDRESS_AUTOCOMPLETE_SETTINGS_PATH     Path to autocomplete.yml
    ADDRESS_AUTOCOMPLETE_BASE_URL          Provider base URL
    ADDRESS_AUTOCOMPLETE_REQUEST_TIMEOUT   Request timeout in seconds
    RUST_LOG                               Log filter (default: info)
"#,
        address_autocomplete::VERSION
    );
}
