pub mod model;
pub mod seed;
pub mod store;

pub use model::{Category, Condition, Listing};
pub use store::{InMemoryListingStore, ListingStore};
