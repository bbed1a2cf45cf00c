// src/tests/pipeline_tests.rs

use crate::domain::filter::{FilterSpec, SortKey};
use crate::domain::listing::TransactionType;
use crate::query::{group_by_property_type, query};
use crate::tests::utils::listing;

#[test]
fn unset_filter_with_newest_returns_everything_newest_first() {
    let records = vec![listing(1, 100, 5), listing(2, 50, 20), listing(3, 200, 11)];

    let out = query(&records, &FilterSpec::default(), Some(SortKey::Newest));

    assert_eq!(out.len(), records.len());
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(query(&[], &FilterSpec::default(), Some(SortKey::Newest)).is_empty());
}

#[test]
fn price_low_orders_ascending() {
    let records = vec![listing(1, 100, 1), listing(2, 50, 2), listing(3, 200, 3)];

    let out = query(&records, &FilterSpec::default(), Some(SortKey::PriceLow));
    let prices: Vec<u64> = out.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![50, 100, 200]);

    let out = query(&records, &FilterSpec::default(), Some(SortKey::PriceHigh));
    let prices: Vec<u64> = out.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![200, 100, 50]);
}

#[test]
fn no_sort_preserves_snapshot_order() {
    let records = vec![listing(3, 200, 3), listing(1, 100, 1), listing(2, 50, 2)];

    let out = query(&records, &FilterSpec::default(), None);
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn predicates_are_a_conjunction() {
    let mut cheap_rental = listing(1, 8_000, 1);
    cheap_rental.transaction_type = TransactionType::Rent;
    let mut pricey_rental = listing(2, 60_000, 2);
    pricey_rental.transaction_type = TransactionType::Rent;
    let sale = listing(3, 8_000, 3);

    let filter = FilterSpec {
        transaction_type: Some(TransactionType::Rent),
        max_price: 10_000,
        ..FilterSpec::default()
    };

    let out = query(&[cheap_rental, pricey_rental, sale], &filter, None);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 1);
}

#[test]
fn bounds_are_inclusive_and_zero_means_unconstrained() {
    let records = vec![listing(1, 100, 1), listing(2, 200, 2)];

    let exact = FilterSpec {
        min_price: 100,
        max_price: 100,
        ..FilterSpec::default()
    };
    assert_eq!(query(&records, &exact, None).len(), 1);

    // Zero bounds constrain nothing, even though every listing has beds > 0.
    let unset = FilterSpec::default();
    assert_eq!(query(&records, &unset, None).len(), 2);
}

#[test]
fn location_substring_matches_location_address_or_title_case_insensitively() {
    let mut by_location = listing(1, 100, 1);
    by_location.location = "Hinjewadi Phase 2".to_string();
    let mut by_address = listing(2, 100, 2);
    by_address.address = "7, HINJEWADI Road".to_string();
    let mut by_title = listing(3, 100, 3);
    by_title.title = "2BHK near hinjewadi IT park".to_string();
    let elsewhere = listing(4, 100, 4);

    let filter = FilterSpec {
        location: Some("hinjewadi".to_string()),
        ..FilterSpec::default()
    };

    let out = query(&[by_location, by_address, by_title, elsewhere], &filter, None);
    let ids: Vec<i64> = out.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn unmatched_filter_is_an_empty_list_not_an_error() {
    let records = vec![listing(1, 100, 1)];
    let filter = FilterSpec {
        min_price: 1_000_000,
        ..FilterSpec::default()
    };
    assert!(query(&records, &filter, Some(SortKey::Newest)).is_empty());
}

#[test]
fn query_is_idempotent() {
    let records = vec![listing(1, 100, 5), listing(2, 50, 20), listing(3, 200, 11)];
    let filter = FilterSpec {
        min_price: 60,
        ..FilterSpec::default()
    };

    let once = query(&records, &filter, Some(SortKey::PriceLow));
    let twice = query(&once, &filter, Some(SortKey::PriceLow));
    assert_eq!(once, twice);
}

#[test]
fn min_beds_and_baths_filter() {
    let mut studio = listing(1, 100, 1);
    studio.beds = 1;
    studio.baths = 1;
    let mut family = listing(2, 100, 2);
    family.beds = 3;
    family.baths = 2;

    let filter = FilterSpec {
        min_beds: 2,
        min_baths: 2,
        ..FilterSpec::default()
    };
    let out = query(&[studio, family], &filter, None);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].id, 2);
}

#[test]
fn grouping_partitions_by_type_preserving_order() {
    let mut flat_a = listing(1, 100, 1);
    flat_a.property_type = "Flat".to_string();
    let mut plot = listing(2, 100, 2);
    plot.property_type = "Plot".to_string();
    let mut flat_b = listing(3, 100, 3);
    flat_b.property_type = "Flat".to_string();

    let records = vec![flat_a, plot, flat_b];
    let groups = group_by_property_type(&records);

    assert_eq!(groups.len(), 2);
    let flats: Vec<i64> = groups["Flat"].iter().map(|r| r.id).collect();
    assert_eq!(flats, vec![1, 3]);
    assert_eq!(groups["Plot"].len(), 1);

    // Idempotent, and the canonical list is untouched.
    assert_eq!(group_by_property_type(&records), groups);
    assert_eq!(records.len(), 3);
}

#[test]
fn property_type_filter_is_case_insensitive() {
    let mut bungalow = listing(1, 100, 1);
    bungalow.property_type = "Bungalow".to_string();

    let filter = FilterSpec {
        property_type: Some("bungalow".to_string()),
        ..FilterSpec::default()
    };
    assert_eq!(query(&[bungalow], &filter, None).len(), 1);
}
