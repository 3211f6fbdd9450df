//! Normalized autocomplete results

mod types;

pub use types::*;
