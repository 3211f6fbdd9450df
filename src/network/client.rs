//! HTTP client for making requests to the search provider

use crate::config::OutgoingSettings;
use anyhow::{bail, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::time::Duration;

/// HTTP client wrapper configured from [`OutgoingSettings`]
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
    extra_headers: HeaderMap,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let timeout = request_timeout(settings.request_timeout)?;

        let mut builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let mut extra_headers = HeaderMap::new();
        for (key, value) in &settings.extra_headers {
            extra_headers.insert(
                HeaderName::from_bytes(key.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            user_agent: settings.useragent.clone(),
            extra_headers,
        })
    }

    /// GET request with ordered query parameters
    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> std::result::Result<HttpResponse, reqwest::Error> {
        let mut req_builder = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .headers(self.extra_headers.clone());

        if !params.is_empty() {
            req_builder = req_builder.query(params);
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> std::result::Result<HttpResponse, reqwest::Error> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(HttpResponse { status, text, url })
    }

    /// Get current user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

/// Timeout must be a positive, finite number of seconds
fn request_timeout(seconds: f64) -> Result<Duration> {
    if seconds.is_nan() || seconds <= 0.0 {
        bail!("request_timeout must be greater than 0, got {}", seconds);
    }
    Ok(Duration::try_from_secs_f64(seconds)?)
}

/// HTTP response as seen by the search client
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl HttpResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_custom_user_agent() {
        let settings = OutgoingSettings {
            useragent: "custom-agent/1.0".to_string(),
            ..Default::default()
        };
        let client = HttpClient::with_settings(&settings).unwrap();
        assert_eq!(client.user_agent(), "custom-agent/1.0");
    }

    #[test]
    fn test_invalid_proxy_is_rejected() {
        let mut settings = OutgoingSettings::default();
        settings.proxies.all = Some("not a proxy url".to_string());
        assert!(HttpClient::with_settings(&settings).is_err());
    }

    #[test]
    fn test_invalid_request_timeout_is_rejected() {
        for timeout in [-1.0, 0.0, f64::NAN, f64::INFINITY] {
            let settings = OutgoingSettings {
                request_timeout: timeout,
                ..Default::default()
            };
            assert!(
                HttpClient::with_settings(&settings).is_err(),
                "timeout {} should be rejected",
                timeout
            );
        }
    }

    #[test]
    fn test_invalid_extra_header_is_rejected() {
        let mut settings = OutgoingSettings::default();
        settings
            .extra_headers
            .insert("bad header".to_string(), "1".to_string());
        assert!(HttpClient::with_settings(&settings).is_err());

        let mut settings = OutgoingSettings::default();
        settings
            .extra_headers
            .insert("X-Trace".to_string(), "line\nbreak".to_string());
        assert!(HttpClient::with_settings(&settings).is_err());

        let mut settings = OutgoingSettings::default();
        settings
            .extra_headers
            .insert("X-Trace".to_string(), "1".to_string());
        assert!(HttpClient::with_settings(&settings).is_ok());
    }

    #[test]
    fn test_response_status() {
        let response = HttpResponse {
            status: 204,
            text: String::new(),
            url: "http://localhost/".to_string(),
        };
        assert!(response.is_success());

        let response = HttpResponse {
            status: 403,
            ..response
        };
        assert!(!response.is_success());
    }
}
