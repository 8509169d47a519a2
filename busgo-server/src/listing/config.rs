//! Listing configuration.

use crate::domain::Rupees;

use super::PriceRange;

/// Bounds of the price slider on the listing page.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    /// Lowest selectable price.
    pub min_price: Rupees,

    /// Highest selectable price.
    pub max_price: Rupees,

    /// Slider step in rupees.
    pub price_step: u32,
}

impl ListingConfig {
    /// The price range used when the query gives none.
    pub fn default_price_range(&self) -> PriceRange {
        PriceRange {
            min: self.min_price,
            max: self.max_price,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            min_price: Rupees(200),
            max_price: Rupees(1500),
            price_step: 50,
        }
    }
}
