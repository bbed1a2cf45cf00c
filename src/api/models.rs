// src/api/models.rs

use crate::domain::listing::{ListingRecord, TransactionType};
use chrono::DateTime;
use serde::{Deserialize, Serialize};

// listing (wire)
//  ├── id, type ("buy"|"rent")
//  ├── propertyType, title
//  ├── price, beds, baths
//  ├── area, areaUnit ("sqft"|"acres")
//  ├── location, address
//  ├── features, images   <- array OR JSON-encoded string, source-dependent
//  └── createdAt          <- RFC3339

/// A listing exactly as the API serves it. Everything optional so one
/// malformed record can be rejected on its own instead of failing the whole
/// page; `normalize` is the anti-corruption layer that produces the clean
/// `ListingRecord` the rest of the crate reads.
#[derive(Debug, Deserialize)]
pub struct WireListing {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    #[serde(rename = "propertyType")]
    pub property_type: Option<String>,
    pub title: Option<String>,

    pub price: Option<f64>,
    pub beds: Option<f64>,
    pub baths: Option<f64>,

    pub area: Option<f64>,
    #[serde(rename = "areaUnit")]
    pub area_unit: Option<String>,

    pub location: Option<String>,
    pub address: Option<String>,

    pub features: Option<StringList>,
    pub images: Option<StringList>,

    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

/// Collection-valued listing fields arrive as either a real JSON array or a
/// JSON-encoded string, depending on which backend wrote the row. Decoded
/// once here; consumers only ever see `Vec<String>`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Many(Vec<String>),
    Encoded(String),
}

impl StringList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringList::Many(items) => items,
            StringList::Encoded(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(items) => items,
                // Not an encoded array after all; keep the bare value.
                Err(_) if !raw.trim().is_empty() => vec![raw],
                Err(_) => Vec::new(),
            },
        }
    }
}

impl WireListing {
    /// Flattens and validates the wire shape into a `ListingRecord`,
    /// checking the fields the pipeline cannot do without.
    pub fn normalize(self) -> Result<ListingRecord, String> {
        let id = self.id.ok_or("Missing listing id")?;

        let transaction_type: TransactionType = self
            .transaction_type
            .as_deref()
            .ok_or("Missing transaction type")?
            .parse()?;

        let property_type = self
            .property_type
            .filter(|s| !s.is_empty())
            .ok_or("Missing or empty property type")?;

        let area_unit = self
            .area_unit
            .as_deref()
            .unwrap_or("sqft")
            .parse()
            .map_err(|e| format!("{e}"))?;

        let created_at = self
            .created_at
            .as_deref()
            .ok_or("Missing createdAt")
            .and_then(|s| {
                DateTime::parse_from_rfc3339(s).map_err(|_| "Unparseable createdAt")
            })
            .map(|dt| dt.naive_utc())?;

        let non_negative = |name: &str, v: f64| -> Result<f64, String> {
            if v.is_finite() && v >= 0.0 {
                Ok(v)
            } else {
                Err(format!("Negative or non-finite {name}: {v}"))
            }
        };

        let price = non_negative("price", self.price.unwrap_or(0.0))? as u64;
        let beds = non_negative("beds", self.beds.unwrap_or(0.0))? as u32;
        let baths = non_negative("baths", self.baths.unwrap_or(0.0))? as u32;
        let area_value = non_negative("area", self.area.unwrap_or(0.0))?;

        Ok(ListingRecord {
            id,
            transaction_type,
            property_type,
            title: self.title.unwrap_or_default(),
            price,
            beds,
            baths,
            area_value,
            area_unit,
            location: self.location.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            features: self.features.map(StringList::into_vec).unwrap_or_default(),
            images: self.images.map(StringList::into_vec).unwrap_or_default(),
            created_at,
        })
    }
}

/// A listing agent, as the agents endpoint serves them.
#[derive(Debug, Clone, Deserialize)]
pub struct Agent {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "photoUrl")]
    pub photo_url: Option<String>,
}

/// One entry of the property-type catalogue (feeds the filter dropdown).
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyTypeRef {
    pub id: i64,
    pub name: String,
}

/// Buyer inquiry on a specific listing.
#[derive(Debug, Serialize)]
pub struct InquiryPayload {
    #[serde(rename = "propertyId")]
    pub property_id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub message: String,
}

/// General contact-form submission.
#[derive(Debug, Serialize)]
pub struct ContactMessagePayload {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Home-loan lead, carrying the EMI figures the calculator showed the user.
#[derive(Debug, Serialize)]
pub struct HomeLoanInquiryPayload {
    pub name: String,
    pub phone: String,
    pub principal: f64,
    #[serde(rename = "annualRatePercent")]
    pub annual_rate_percent: f64,
    #[serde(rename = "termYears")]
    pub term_years: f64,
    #[serde(rename = "monthlyPayment")]
    pub monthly_payment: f64,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::AreaUnit;
    use crate::domain::listing::TransactionType;
    use serde_json::json;

    fn wire(value: serde_json::Value) -> WireListing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn normalizes_a_full_record() {
        let listing = wire(json!({
            "id": 7,
            "type": "buy",
            "propertyType": "Bungalow",
            "title": "3BHK near MG Road",
            "price": 7500000.0,
            "beds": 3,
            "baths": 2,
            "area": 1850.0,
            "areaUnit": "sqft",
            "location": "Pune",
            "address": "14 MG Road",
            "features": ["parking", "garden"],
            "images": "[\"a.jpg\",\"b.jpg\"]",
            "createdAt": "2025-11-03T10:15:00Z"
        }))
        .normalize()
        .unwrap();

        assert_eq!(listing.id, 7);
        assert_eq!(listing.transaction_type, TransactionType::Buy);
        assert_eq!(listing.area_unit, AreaUnit::SquareFeet);
        assert_eq!(listing.features, vec!["parking", "garden"]);
        // JSON-encoded string decoded at the boundary
        assert_eq!(listing.images, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn rejects_missing_id_and_bad_type() {
        assert!(wire(json!({"type": "buy", "propertyType": "Flat", "createdAt": "2025-01-01T00:00:00Z"}))
            .normalize()
            .is_err());
        assert!(wire(json!({"id": 1, "type": "lease", "propertyType": "Flat", "createdAt": "2025-01-01T00:00:00Z"}))
            .normalize()
            .is_err());
    }

    #[test]
    fn bare_string_field_is_kept_as_single_entry() {
        let listing = wire(json!({
            "id": 2,
            "type": "rent",
            "propertyType": "Flat",
            "features": "lift",
            "createdAt": "2025-01-01T00:00:00Z"
        }))
        .normalize()
        .unwrap();
        assert_eq!(listing.features, vec!["lift"]);
        assert!(listing.images.is_empty());
    }
}
