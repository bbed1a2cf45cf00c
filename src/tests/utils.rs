use crate::convert::AreaUnit;
use crate::domain::listing::{ListingRecord, TransactionType};
use crate::domain::location::LocationNode;
use chrono::{NaiveDate, NaiveDateTime};

/// Timestamp helper: midnight on the given day of Jan 2025.
pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// A plausible buy listing; tests tweak the fields they care about.
pub fn listing(id: i64, price: u64, created_day: u32) -> ListingRecord {
    ListingRecord {
        id,
        transaction_type: TransactionType::Buy,
        property_type: "Flat".to_string(),
        title: format!("Listing {id}"),
        price,
        beds: 2,
        baths: 1,
        area_value: 900.0,
        area_unit: AreaUnit::SquareFeet,
        location: "Pune".to_string(),
        address: format!("{id} MG Road"),
        features: vec![],
        images: vec![],
        created_at: day(created_day),
    }
}

pub fn node(id: i64, name: &str, parent_id: Option<i64>) -> LocationNode {
    LocationNode {
        id,
        name: name.to_string(),
        parent_id,
    }
}
