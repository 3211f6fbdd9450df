//! Result type definitions

use serde::{Deserialize, Serialize};

/// A single normalized address candidate
///
/// Values are built once per provider response and never mutated afterwards.
/// `street_number` is the only field the provider may omit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoCompleteResult {
    place_id: String,
    street_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    street_number: Option<String>,
    municipality: String,
    postal_code: String,
    freeform_address: String,
    country: String,
    country_code: String,
}

impl AutoCompleteResult {
    /// Create a result without a street number
    pub fn new(
        place_id: impl Into<String>,
        street_name: impl Into<String>,
        municipality: impl Into<String>,
        postal_code: impl Into<String>,
        freeform_address: impl Into<String>,
        country: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            place_id: place_id.into(),
            street_name: street_name.into(),
            street_number: None,
            municipality: municipality.into(),
            postal_code: postal_code.into(),
            freeform_address: freeform_address.into(),
            country: country.into(),
            country_code: country_code.into(),
        }
    }

    /// Set the street number
    pub fn with_street_number(mut self, street_number: impl Into<String>) -> Self {
        self.street_number = Some(street_number.into());
        self
    }

    /// Provider-assigned place identifier
    pub fn place_id(&self) -> &str {
        &self.place_id
    }

    pub fn street_name(&self) -> &str {
        &self.street_name
    }

    pub fn street_number(&self) -> Option<&str> {
        self.street_number.as_deref()
    }

    pub fn municipality(&self) -> &str {
        &self.municipality
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Human-readable full address
    pub fn freeform_address(&self) -> &str {
        &self.freeform_address
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// ISO country code
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}
