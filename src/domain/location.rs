// src/domain/location.rs

use serde::Deserialize;
use std::fmt;

/// The four levels of the location hierarchy, ordered from the top down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LocationLevel {
    State,
    District,
    Taluka,
    Tehsil,
}

impl LocationLevel {
    /// The level directly below this one, if any.
    pub fn child(&self) -> Option<LocationLevel> {
        match self {
            LocationLevel::State => Some(LocationLevel::District),
            LocationLevel::District => Some(LocationLevel::Taluka),
            LocationLevel::Taluka => Some(LocationLevel::Tehsil),
            LocationLevel::Tehsil => None,
        }
    }

    pub const ALL: [LocationLevel; 4] = [
        LocationLevel::State,
        LocationLevel::District,
        LocationLevel::Taluka,
        LocationLevel::Tehsil,
    ];
}

impl fmt::Display for LocationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocationLevel::State => "state",
            LocationLevel::District => "district",
            LocationLevel::Taluka => "taluka",
            LocationLevel::Tehsil => "tehsil",
        };
        f.write_str(name)
    }
}

/// One node of the location hierarchy (a state, district, taluka, or
/// tehsil). `parent_id` is `None` only for states.
///
/// A child list is only meaningful under a selected parent; nodes are
/// fetched per parent-selection change and not cached across the chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationNode {
    pub id: i64,
    pub name: String,
    #[serde(default, rename = "parentId")]
    pub parent_id: Option<i64>,
}
