// src/domain/listing.rs

use crate::convert::AreaUnit;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a listing is offered for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Buy,
    Rent,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Buy => "buy",
            TransactionType::Rent => "rent",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(TransactionType::Buy),
            "rent" => Ok(TransactionType::Rent),
            other => Err(format!("Unknown transaction type: {other}")),
        }
    }
}

/// One property listing, flattened and normalized, as the query pipeline
/// consumes it. Produced from the wire shape in `api::models`; the rest of
/// the crate only ever reads these.
///
/// `id` is stable and unique within a snapshot for the lifetime of a
/// browsing session.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingRecord {
    pub id: i64,
    pub transaction_type: TransactionType,
    pub property_type: String,
    pub title: String,

    pub price: u64,
    pub beds: u32,
    pub baths: u32,

    pub area_value: f64,
    pub area_unit: AreaUnit,

    pub location: String,
    pub address: String,

    // Normalized at the API boundary; wire payloads carry these as either
    // an array or a JSON-encoded string.
    pub features: Vec<String>,
    pub images: Vec<String>,

    pub created_at: NaiveDateTime,
}
