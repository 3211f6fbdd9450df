//! HTTP networking module
//!
//! Provides the HTTP client used to talk to the search provider.

mod client;

pub use client::{HttpClient, HttpResponse};
