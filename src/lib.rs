//! Address autocomplete backed by the TomTom fuzzy search API
//!
//! Turns a free-text address fragment into a bounded list of normalized
//! candidate addresses.

pub mod autocomplete;
pub mod config;
pub mod error;
pub mod network;
pub mod results;
pub mod search;

pub use autocomplete::{AddressSearch, Autocomplete};
pub use config::Settings;
pub use error::{Error, Result, UpstreamError};
pub use network::HttpClient;
pub use results::AutoCompleteResult;
pub use search::SearchClient;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
