//! Filter predicates over the fleet.

use crate::domain::{Bus, BusTypeTag, DepartureWindow, DomainError, Rupees};

/// An inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Rupees,
    pub max: Rupees,
}

impl PriceRange {
    /// Create a range, rejecting `min > max`.
    pub fn new(min: Rupees, max: Rupees) -> Result<Self, DomainError> {
        if min > max {
            return Err(DomainError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn contains(&self, price: Rupees) -> bool {
        self.min <= price && price <= self.max
    }
}

/// The filters selected on the listing page.
///
/// - price: the bus price must lie in the range
/// - windows: the departure must fall in any one of them (none = any time)
/// - types: the bus type must carry every tag (none = any type)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusFilter {
    pub price: PriceRange,
    pub windows: Vec<DepartureWindow>,
    pub types: Vec<BusTypeTag>,
}

impl BusFilter {
    /// A filter that only applies the price range.
    pub fn new(price: PriceRange) -> Self {
        Self {
            price,
            windows: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Add a departure window, ignoring duplicates.
    pub fn with_window(mut self, window: DepartureWindow) -> Self {
        if !self.windows.contains(&window) {
            self.windows.push(window);
        }
        self
    }

    /// Add a bus type tag, ignoring duplicates.
    pub fn with_type(mut self, tag: BusTypeTag) -> Self {
        if !self.types.contains(&tag) {
            self.types.push(tag);
        }
        self
    }

    pub fn matches_price(&self, bus: &Bus) -> bool {
        self.price.contains(bus.price)
    }

    pub fn matches_departure(&self, bus: &Bus) -> bool {
        self.windows.is_empty() || self.windows.iter().any(|w| w.contains(bus.departure))
    }

    pub fn matches_type(&self, bus: &Bus) -> bool {
        self.types.iter().all(|t| t.matches(bus.bus_type))
    }

    /// Whether a bus passes every filter.
    pub fn matches(&self, bus: &Bus) -> bool {
        self.matches_price(bus) && self.matches_departure(bus) && self.matches_type(bus)
    }
}

/// Buses passing `filter`, in listing order.
pub fn filter_buses<'a>(buses: &'a [Bus], filter: &BusFilter) -> Vec<&'a Bus> {
    buses.iter().filter(|b| filter.matches(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::demo_fleet;
    use crate::listing::ListingConfig;

    fn default_filter() -> BusFilter {
        BusFilter::new(ListingConfig::default().default_price_range())
    }

    fn ids(buses: &[&Bus]) -> Vec<String> {
        buses.iter().map(|b| b.id.to_string()).collect()
    }

    #[test]
    fn price_range_rejects_inverted() {
        assert!(PriceRange::new(Rupees(500), Rupees(400)).is_err());
        assert!(PriceRange::new(Rupees(400), Rupees(400)).is_ok());
    }

    #[test]
    fn default_filter_lists_everything() {
        let fleet = demo_fleet();
        assert_eq!(filter_buses(fleet.buses(), &default_filter()).len(), 6);
    }

    #[test]
    fn price_range_is_inclusive() {
        let fleet = demo_fleet();
        let filter = BusFilter::new(PriceRange::new(Rupees(400), Rupees(650)).unwrap());
        assert_eq!(
            ids(&filter_buses(fleet.buses(), &filter)),
            ["bus1", "bus3", "bus5", "bus6"]
        );
    }

    #[test]
    fn windows_combine_with_or() {
        let fleet = demo_fleet();

        let morning = default_filter().with_window(DepartureWindow::Morning);
        assert_eq!(
            ids(&filter_buses(fleet.buses(), &morning)),
            ["bus1", "bus2", "bus3"]
        );

        let morning_or_night = morning.with_window(DepartureWindow::Night);
        assert_eq!(
            ids(&filter_buses(fleet.buses(), &morning_or_night)),
            ["bus1", "bus2", "bus3", "bus6"]
        );
    }

    #[test]
    fn types_combine_with_and() {
        let fleet = demo_fleet();

        let ac = default_filter().with_type(BusTypeTag::Ac);
        assert_eq!(
            ids(&filter_buses(fleet.buses(), &ac)),
            ["bus1", "bus3", "bus4", "bus6"]
        );

        let ac_seater = ac.with_type(BusTypeTag::Seater);
        assert_eq!(ids(&filter_buses(fleet.buses(), &ac_seater)), ["bus3"]);
    }

    #[test]
    fn ac_does_not_match_non_ac() {
        let fleet = demo_fleet();
        let ac = default_filter().with_type(BusTypeTag::Ac);
        assert!(
            filter_buses(fleet.buses(), &ac)
                .iter()
                .all(|b| b.bus_type.to_string().starts_with("AC"))
        );
    }

    #[test]
    fn all_filters_compose() {
        let fleet = demo_fleet();
        let filter = BusFilter::new(PriceRange::new(Rupees(300), Rupees(700)).unwrap())
            .with_window(DepartureWindow::Afternoon)
            .with_type(BusTypeTag::Sleeper);
        assert_eq!(ids(&filter_buses(fleet.buses(), &filter)), ["bus5"]);
    }

    #[test]
    fn builder_ignores_duplicates() {
        let filter = default_filter()
            .with_window(DepartureWindow::Evening)
            .with_window(DepartureWindow::Evening)
            .with_type(BusTypeTag::Seater)
            .with_type(BusTypeTag::Seater);
        assert_eq!(filter.windows.len(), 1);
        assert_eq!(filter.types.len(), 1);
    }

    #[test]
    fn no_match_gives_empty_list() {
        let fleet = demo_fleet();
        let filter = default_filter()
            .with_type(BusTypeTag::Ac)
            .with_type(BusTypeTag::NonAc);
        assert!(filter_buses(fleet.buses(), &filter).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::fleet::demo_fleet;
    use proptest::prelude::*;

    fn tag() -> impl Strategy<Value = BusTypeTag> {
        proptest::sample::select(BusTypeTag::ALL.to_vec())
    }

    fn window() -> impl Strategy<Value = DepartureWindow> {
        proptest::sample::select(DepartureWindow::ALL.to_vec())
    }

    fn filter() -> impl Strategy<Value = BusFilter> {
        (
            0u32..2000,
            0u32..2000,
            proptest::collection::vec(window(), 0..4),
            proptest::collection::vec(tag(), 0..3),
        )
            .prop_map(|(a, b, windows, types)| {
                let range = PriceRange::new(Rupees(a.min(b)), Rupees(a.max(b))).unwrap();
                let mut f = BusFilter::new(range);
                for w in windows {
                    f = f.with_window(w);
                }
                for t in types {
                    f = f.with_type(t);
                }
                f
            })
    }

    proptest! {
        /// Narrowing the price range never adds buses
        #[test]
        fn narrowing_price_is_monotonic(f in filter(), shrink_min in 0u32..500, shrink_max in 0u32..500) {
            let fleet = demo_fleet();
            let before = filter_buses(fleet.buses(), &f).len();

            let min = f.price.min.0 + shrink_min;
            let max = f.price.max.0.saturating_sub(shrink_max);
            prop_assume!(min <= max);
            let narrowed = BusFilter {
                price: PriceRange::new(Rupees(min), Rupees(max)).unwrap(),
                ..f
            };
            prop_assert!(filter_buses(fleet.buses(), &narrowed).len() <= before);
        }

        /// Adding a bus type tag never adds buses
        #[test]
        fn adding_type_is_monotonic(f in filter(), extra in tag()) {
            let fleet = demo_fleet();
            let before = filter_buses(fleet.buses(), &f).len();
            let after = filter_buses(fleet.buses(), &f.with_type(extra)).len();
            prop_assert!(after <= before);
        }

        /// Every listed bus satisfies each predicate separately
        #[test]
        fn results_satisfy_all_predicates(f in filter()) {
            let fleet = demo_fleet();
            for bus in filter_buses(fleet.buses(), &f) {
                prop_assert!(f.matches_price(bus));
                prop_assert!(f.matches_departure(bus));
                prop_assert!(f.matches_type(bus));
            }
        }
    }
}
