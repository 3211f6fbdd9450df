//! Provider payload models
//!
//! Shape of the fuzzy search response, see
//! <https://developer.tomtom.com/search-api/documentation/search-service/fuzzy-search>.
//! Only the fields the autocomplete needs are modelled; everything else the
//! provider sends is ignored.

use crate::results::AutoCompleteResult;
use serde::Deserialize;

/// Top-level fuzzy search response
#[derive(Debug, Clone, Deserialize)]
pub struct FuzzySearchResponse {
    pub results: Vec<ProviderResult>,
}

/// A single record in the `results` array
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResult {
    pub id: String,
    pub address: ProviderAddress,
}

/// The nested `address` object of a record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderAddress {
    pub street_name: String,
    #[serde(default)]
    pub street_number: Option<String>,
    pub municipality: String,
    pub postal_code: String,
    pub freeform_address: String,
    pub country: String,
    pub country_code: String,
}

impl From<ProviderResult> for AutoCompleteResult {
    fn from(result: ProviderResult) -> Self {
        let address = result.address;
        let normalized = AutoCompleteResult::new(
            result.id,
            address.street_name,
            address.municipality,
            address.postal_code,
            address.freeform_address,
            address.country,
            address.country_code,
        );

        match address.street_number {
            Some(number) => normalized.with_street_number(number),
            None => normalized,
        }
    }
}

impl FuzzySearchResponse {
    /// Normalize every record, keeping provider order
    pub fn into_results(self) -> Vec<AutoCompleteResult> {
        self.results.into_iter().map(AutoCompleteResult::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_provider_fields_are_ignored() {
        let payload = r#"{
            "summary": {"query": "test", "numResults": 1},
            "results": [{
                "type": "Street",
                "id": "AU/STR/p0/123",
                "score": 2.1,
                "address": {
                    "streetName": "Great Charlotte Street",
                    "municipality": "Liverpool",
                    "countrySubdivision": "NSW",
                    "postalCode": "2000",
                    "countryCode": "AU",
                    "country": "Australia",
                    "freeformAddress": "Great Charlotte Street, Liverpool, 2000 NSW"
                },
                "position": {"lat": -33.9, "lon": 150.9}
            }]
        }"#;

        let response: FuzzySearchResponse = serde_json::from_str(payload).unwrap();
        let results = response.into_results();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].place_id(), "AU/STR/p0/123");
        assert_eq!(results[0].municipality(), "Liverpool");
        assert_eq!(results[0].street_number(), None);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let payload = r#"{
            "results": [{
                "id": "test1",
                "address": {
                    "streetName": "Great Charlotte Street",
                    "municipality": "Liverpool",
                    "countryCode": "AU",
                    "country": "Australia",
                    "freeformAddress": "Great Charlotte Street, Liverpool, 2000 NSW"
                }
            }]
        }"#;

        let err = serde_json::from_str::<FuzzySearchResponse>(payload).unwrap_err();
        assert!(err.to_string().contains("postalCode"));
    }

    #[test]
    fn test_missing_results_array_is_rejected() {
        assert!(serde_json::from_str::<FuzzySearchResponse>(r#"{"summary": {}}"#).is_err());
    }
}
