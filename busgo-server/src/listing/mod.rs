//! Bus listing filters.
//!
//! The listing shows the whole fleet narrowed by three independent
//! predicates: price range, departure window and bus type.

mod config;
mod filter;

pub use config::ListingConfig;
pub use filter::{BusFilter, PriceRange, filter_buses};
