//! Fuzzy search client

use super::models::FuzzySearchResponse;
use crate::autocomplete::AddressSearch;
use crate::config::ProviderSettings;
use crate::error::{Error, Result, UpstreamError};
use crate::network::{HttpClient, HttpResponse};
use crate::results::AutoCompleteResult;
use async_trait::async_trait;
use tracing::{debug, error};

/// Number of results requested when the caller does not say otherwise
pub const DEFAULT_LIMIT: u32 = 20;

/// Client for the provider's fuzzy search endpoint
///
/// The API key is injected at construction and only checked when a search
/// is issued, so a client can be built before the secret is known to be valid.
#[derive(Clone)]
pub struct SearchClient {
    client: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

/// Fully built request for one fuzzy search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Endpoint URL with the address embedded in the path
    pub url: String,
    /// Query parameters in the order they are sent
    pub params: Vec<(&'static str, String)>,
}

impl SearchRequest {
    /// Look up a query parameter by name
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl SearchClient {
    /// Create a new search client
    pub fn new(client: HttpClient, settings: &ProviderSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Search the provider for addresses matching `address`
    ///
    /// `countries` restricts results to the given ISO country codes; an empty
    /// slice means no restriction. Every failure is logged and returned as is.
    pub async fn fuzzy_search(
        &self,
        address: &str,
        countries: &[String],
        limit: u32,
    ) -> Result<Vec<AutoCompleteResult>> {
        match self.execute(address, countries, limit).await {
            Ok(results) => {
                debug!("Fuzzy search for {:?} returned {} results", address, results.len());
                Ok(results)
            }
            Err(e) => {
                error!("Error occurred while sending request to search provider: {}", e);
                debug!("{:?}", e);
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        address: &str,
        countries: &[String],
        limit: u32,
    ) -> Result<Vec<AutoCompleteResult>> {
        let request = self.request(address, countries, limit)?;

        let response = self
            .client
            .get_with_params(&request.url, &request.params)
            .await?;

        self.response(response)
    }

    /// Build the HTTP request for a fuzzy search
    pub fn request(&self, address: &str, countries: &[String], limit: u32) -> Result<SearchRequest> {
        let key = match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(Error::configuration("API key not found")),
        };

        let url = format!(
            "{}/search/2/search/{}.json",
            self.base_url,
            urlencoding::encode(address)
        );

        let mut params = vec![("key", key.to_string()), ("limit", limit.to_string())];
        if !countries.is_empty() {
            params.push(("countrySet", countries.join(",")));
        }

        Ok(SearchRequest { url, params })
    }

    /// Parse the HTTP response into normalized results
    pub fn response(&self, response: HttpResponse) -> Result<Vec<AutoCompleteResult>> {
        debug!("Provider answered {} for {}", response.status, response.url);

        if !response.is_success() {
            return Err(UpstreamError::Status {
                status: response.status,
                body: response.text,
            }
            .into());
        }

        let payload: FuzzySearchResponse = response.json()?;
        Ok(payload.into_results())
    }
}

#[async_trait]
impl AddressSearch for SearchClient {
    async fn fuzzy_search(
        &self,
        address: &str,
        countries: &[String],
        limit: u32,
    ) -> Result<Vec<AutoCompleteResult>> {
        SearchClient::fuzzy_search(self, address, countries, limit).await
    }
}
