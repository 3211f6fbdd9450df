//! Configuration module
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are passed explicitly to the components that need them; there is
//! no process-wide settings instance.

mod settings;

pub use settings::*;

/// Environment variable holding the provider API key
pub const API_KEY_ENV: &str = "TOMTOM_API_KEY";

/// Environment variable overriding the provider base URL
pub const BASE_URL_ENV: &str = "ADDRESS_AUTOCOMPLETE_BASE_URL";

/// Environment variable overriding the outgoing request timeout (seconds)
pub const REQUEST_TIMEOUT_ENV: &str = "ADDRESS_AUTOCOMPLETE_REQUEST_TIMEOUT";

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "ADDRESS_AUTOCOMPLETE_SETTINGS_PATH";
