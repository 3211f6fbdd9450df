//! Address autocomplete
//!
//! Public entry point: validates caller input, applies the default country
//! filter and hands the query to an [`AddressSearch`] backend.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::network::HttpClient;
use crate::results::AutoCompleteResult;
use crate::search::{SearchClient, DEFAULT_LIMIT};
use async_trait::async_trait;

/// Upper bound (inclusive) for the number of requested results
pub const MAX_LIMIT: i64 = 50;

/// Country filter applied to every autocomplete query
pub const DEFAULT_COUNTRIES: [&str; 1] = ["AU"];

/// Trait for fuzzy address search backends
#[async_trait]
pub trait AddressSearch: Send + Sync {
    /// Search for addresses matching `address`, restricted to `countries`
    /// when non-empty, returning at most `limit` results
    async fn fuzzy_search(
        &self,
        address: &str,
        countries: &[String],
        limit: u32,
    ) -> Result<Vec<AutoCompleteResult>>;
}

/// Autocomplete service
pub struct Autocomplete<S = SearchClient> {
    search: S,
    countries: Vec<String>,
}

impl Autocomplete<SearchClient> {
    /// Build the service and its search client from settings
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        Ok(Self::new(SearchClient::new(client, &settings.provider)))
    }
}

impl<S: AddressSearch> Autocomplete<S> {
    pub fn new(search: S) -> Self {
        Self {
            search,
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Fetch normalized address candidates for `address`
    ///
    /// `limit` defaults to 20 and must lie in `1..=50`. Errors from the
    /// search backend are returned unchanged.
    pub async fn get_autocomplete_details(
        &self,
        address: &str,
        limit: Option<i64>,
    ) -> Result<Vec<AutoCompleteResult>> {
        if address.trim().is_empty() {
            return Err(Error::validation(
                "\"address\" cannot be null or empty string!",
            ));
        }

        let limit = limit.unwrap_or(i64::from(DEFAULT_LIMIT));
        if limit <= 0 || limit > MAX_LIMIT {
            return Err(Error::validation(
                "\"limit\" must be greater than 0 and less than or equals to 50",
            ));
        }

        self.search
            .fuzzy_search(address, &self.countries, limit as u32)
            .await
    }
}
