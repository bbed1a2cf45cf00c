// src/browse.rs

use crate::api::MarketplaceClient;
use crate::cache::ResponseCache;
use crate::domain::filter::{FilterSpec, SortKey};
use crate::domain::listing::ListingRecord;
use crate::errors::MarketError;
use crate::query;
use std::collections::BTreeMap;

/// One browsing session over the listings page.
///
/// The collection is fetched once and held as an immutable snapshot;
/// filter/sort changes run purely in memory against it, with no further
/// network round-trips. If `load` fails the page shows its retry affordance
/// and simply calls `load` again.
#[derive(Debug)]
pub struct BrowseSession {
    snapshot: Vec<ListingRecord>,
    filter: FilterSpec,
    sort: Option<SortKey>,
}

impl BrowseSession {
    /// Fetches the listing snapshot through the injected cache and restores
    /// filter state from the page's URL query string.
    pub fn load(
        client: &MarketplaceClient,
        cache: &mut ResponseCache,
        url_query: &str,
    ) -> Result<Self, MarketError> {
        let snapshot = client.properties(cache)?;
        log::debug!("Loaded {} listings into the session snapshot", snapshot.len());

        Ok(Self {
            snapshot,
            filter: FilterSpec::from_query_string(url_query),
            sort: Some(SortKey::Newest),
        })
    }

    /// Builds a session directly over records already in hand (tests, server
    /// pre-rendering).
    pub fn from_snapshot(snapshot: Vec<ListingRecord>) -> Self {
        Self {
            snapshot,
            filter: FilterSpec::default(),
            sort: Some(SortKey::Newest),
        }
    }

    /// The visible ordered subset under the current filter and sort.
    pub fn visible(&self) -> Vec<ListingRecord> {
        query::query(&self.snapshot, &self.filter, self.sort)
    }

    /// The grouped/carousel presentation of the visible listings.
    pub fn grouped(&self) -> BTreeMap<String, Vec<ListingRecord>> {
        query::group_by_property_type(&self.visible())
    }

    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    pub fn snapshot(&self) -> &[ListingRecord] {
        &self.snapshot
    }

    /// The URL-encoded filter state; the page writes this into the address
    /// bar on every change (state → URL, one-way).
    pub fn query_string(&self) -> String {
        self.filter.to_query_string()
    }
}
