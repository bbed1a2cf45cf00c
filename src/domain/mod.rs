pub mod filter;
pub mod listing;
pub mod location;

pub use filter::{FilterSpec, SortKey};
pub use listing::{ListingRecord, TransactionType};
pub use location::{LocationLevel, LocationNode};
