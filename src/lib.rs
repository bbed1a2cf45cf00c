//! homeseek: the front-of-house engine of a real-estate marketplace.
//!
//! Listings are fetched once from the marketplace REST API and browsed as an
//! immutable in-memory snapshot (`browse`, `query`); the location picker is
//! a four-level cascade with stale-response protection (`cascade`); the
//! calculators (`convert`, `loan`) are pure. UI rendering, authentication,
//! and storage live elsewhere; this crate is what they call into.

pub mod api;
pub mod browse;
pub mod cache;
pub mod cascade;
pub mod convert;
pub mod domain;
pub mod errors;
pub mod loan;
pub mod notify;
pub mod query;

#[cfg(test)]
mod tests;

pub use api::{ApiConfig, ApiError, MarketplaceClient};
pub use browse::BrowseSession;
pub use cache::ResponseCache;
pub use cascade::{CascadeController, CascadeSelection, LocationCascade, LocationFetcher};
pub use domain::{FilterSpec, ListingRecord, LocationLevel, LocationNode, SortKey, TransactionType};
pub use errors::MarketError;
