// src/domain/filter.rs

use crate::domain::listing::TransactionType;
use std::str::FromStr;
use url::form_urlencoded;

/// The user-chosen constraints narrowing the listing collection.
///
/// All numeric bounds are inclusive, and `0` means "no constraint"; the
/// marketplace UI has always conflated zero with unset, so a genuinely
/// zero-valued bound cannot be expressed. That policy is owned by
/// `query::bound_active`, not re-decided per call site.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub transaction_type: Option<TransactionType>,
    pub property_type: Option<String>,
    /// Case-insensitive substring, matched against location, address, and
    /// title.
    pub location: Option<String>,
    pub min_price: u64,
    pub max_price: u64,
    pub min_beds: u32,
    pub min_baths: u32,
}

/// How to order the filtered listings. `None` at the call site keeps the
/// filtered order untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Newest,
    PriceLow,
    PriceHigh,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortKey::Newest),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            other => Err(format!("Unknown sort key: {other}")),
        }
    }
}

impl FilterSpec {
    /// Rebuilds a FilterSpec from URL query pairs (page load). A missing key
    /// means unset; an unparseable value is treated the same way rather than
    /// failing the page.
    pub fn from_query_string(query: &str) -> Self {
        let mut spec = FilterSpec::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "type" => spec.transaction_type = value.parse().ok(),
                "propertyType" => {
                    if !value.is_empty() {
                        spec.property_type = Some(value.into_owned());
                    }
                }
                "location" => {
                    if !value.is_empty() {
                        spec.location = Some(value.into_owned());
                    }
                }
                "minPrice" => spec.min_price = value.parse().unwrap_or(0),
                "maxPrice" => spec.max_price = value.parse().unwrap_or(0),
                "minBeds" => spec.min_beds = value.parse().unwrap_or(0),
                "minBaths" => spec.min_baths = value.parse().unwrap_or(0),
                _ => {}
            }
        }

        spec
    }

    /// Serializes the active fields back to a URL query string (state → URL,
    /// one-way). Unset and zero-valued fields are omitted entirely so the
    /// address bar only ever shows what the user actually constrained.
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());

        if let Some(t) = self.transaction_type {
            ser.append_pair("type", t.as_str());
        }
        if let Some(pt) = &self.property_type {
            ser.append_pair("propertyType", pt);
        }
        if let Some(loc) = &self.location {
            ser.append_pair("location", loc);
        }
        if self.min_price > 0 {
            ser.append_pair("minPrice", &self.min_price.to_string());
        }
        if self.max_price > 0 {
            ser.append_pair("maxPrice", &self.max_price.to_string());
        }
        if self.min_beds > 0 {
            ser.append_pair("minBeds", &self.min_beds.to_string());
        }
        if self.min_baths > 0 {
            ser.append_pair("minBaths", &self.min_baths.to_string());
        }

        ser.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_round_trips() {
        let spec = FilterSpec {
            transaction_type: Some(TransactionType::Rent),
            property_type: Some("Flat".to_string()),
            location: Some("pune camp".to_string()),
            min_price: 10_000,
            max_price: 45_000,
            min_beds: 2,
            min_baths: 0,
        };

        let qs = spec.to_query_string();
        assert_eq!(FilterSpec::from_query_string(&qs), spec);
    }

    #[test]
    fn zero_bounds_are_omitted() {
        let spec = FilterSpec {
            transaction_type: Some(TransactionType::Buy),
            ..FilterSpec::default()
        };

        assert_eq!(spec.to_query_string(), "type=buy");
    }

    #[test]
    fn empty_query_string_is_all_unset() {
        assert_eq!(FilterSpec::from_query_string(""), FilterSpec::default());
    }

    #[test]
    fn bad_numbers_and_unknown_keys_are_ignored() {
        let spec = FilterSpec::from_query_string("minPrice=abc&page=3&type=rent");
        assert_eq!(spec.min_price, 0);
        assert_eq!(spec.transaction_type, Some(TransactionType::Rent));
    }

    #[test]
    fn location_is_percent_decoded() {
        let spec = FilterSpec::from_query_string("location=MG%20Road");
        assert_eq!(spec.location.as_deref(), Some("MG Road"));
    }
}
