// src/query.rs
//
// The in-memory query pipeline behind the browse page: the listing snapshot
// never goes back to the network once loaded; filtering and sorting run
// purely over it.

use crate::domain::filter::{FilterSpec, SortKey};
use crate::domain::listing::ListingRecord;
use std::collections::BTreeMap;

/// Whether a numeric bound participates in filtering.
///
/// The marketplace has always treated a zero bound as "no constraint", which
/// conflates zero with unset (minPrice=0 cannot mean "free properties
/// only"). Every predicate below goes through this one helper so the policy
/// lives in exactly one place if product ever distinguishes the two.
fn bound_active(bound: u64) -> bool {
    bound > 0
}

fn matches(record: &ListingRecord, filter: &FilterSpec) -> bool {
    if let Some(t) = filter.transaction_type {
        if record.transaction_type != t {
            return false;
        }
    }

    if let Some(pt) = &filter.property_type {
        if !record.property_type.eq_ignore_ascii_case(pt) {
            return false;
        }
    }

    if let Some(needle) = &filter.location {
        let needle = needle.to_lowercase();
        let hit = record.location.to_lowercase().contains(&needle)
            || record.address.to_lowercase().contains(&needle)
            || record.title.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }

    if bound_active(filter.min_price) && record.price < filter.min_price {
        return false;
    }
    if bound_active(filter.max_price) && record.price > filter.max_price {
        return false;
    }
    if bound_active(filter.min_beds as u64) && record.beds < filter.min_beds {
        return false;
    }
    if bound_active(filter.min_baths as u64) && record.baths < filter.min_baths {
        return false;
    }

    true
}

/// Produces the visible ordered subset of `records`: the conjunction of all
/// active predicates in `filter`, then the requested ordering. `None` sort
/// keeps the filtered order untouched; sorting is stable, so equal keys keep
/// their snapshot order. Idempotent: re-running the same filter over the
/// output returns it unchanged.
pub fn query(
    records: &[ListingRecord],
    filter: &FilterSpec,
    sort: Option<SortKey>,
) -> Vec<ListingRecord> {
    let mut out: Vec<ListingRecord> = records
        .iter()
        .filter(|r| matches(r, filter))
        .cloned()
        .collect();

    match sort {
        Some(SortKey::Newest) => out.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        Some(SortKey::PriceLow) => out.sort_by(|a, b| a.price.cmp(&b.price)),
        Some(SortKey::PriceHigh) => out.sort_by(|a, b| b.price.cmp(&a.price)),
        None => {}
    }

    out
}

/// Partitions an already filtered+sorted list by property type for the
/// grouped/carousel presentation, preserving within-group order. The
/// canonical list is cloned from, never mutated.
pub fn group_by_property_type(
    records: &[ListingRecord],
) -> BTreeMap<String, Vec<ListingRecord>> {
    let mut groups: BTreeMap<String, Vec<ListingRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.property_type.clone())
            .or_default()
            .push(record.clone());
    }
    groups
}
