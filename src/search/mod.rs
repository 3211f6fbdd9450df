//! Fuzzy search against the geocoding provider
//!
//! Builds the provider query, performs the request and maps the provider's
//! records into [`AutoCompleteResult`](crate::results::AutoCompleteResult)s.

mod client;
mod models;

pub use client::{SearchClient, SearchRequest, DEFAULT_LIMIT};
pub use models::*;
