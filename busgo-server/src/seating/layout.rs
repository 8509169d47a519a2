//! Seat map generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Rupees, Seat, SeatId, SeatPosition, SeatStatus};

use super::SeatMap;

/// Shape and pricing of a generated seat map.
#[derive(Debug, Clone)]
pub struct SeatLayoutConfig {
    /// Number of lower berths (L1..Ln).
    pub lower_berths: u8,

    /// Number of upper berths (U1..Un).
    pub upper_berths: u8,

    /// Number of upright seats (S1..Sn).
    pub seaters: u8,

    pub lower_berth_price: Rupees,
    pub upper_berth_price: Rupees,
    pub seater_price: Rupees,

    /// Chance that any one seat is already booked, in `[0, 1]`.
    pub booked_probability: f64,
}

impl SeatLayoutConfig {
    /// Price of a seat in the given position.
    pub fn price_for(&self, position: SeatPosition) -> Rupees {
        match position {
            SeatPosition::LowerBerth => self.lower_berth_price,
            SeatPosition::UpperBerth => self.upper_berth_price,
            SeatPosition::Seater => self.seater_price,
        }
    }

    /// Total number of seats in the layout.
    pub fn capacity(&self) -> usize {
        self.lower_berths as usize + self.upper_berths as usize + self.seaters as usize
    }
}

impl Default for SeatLayoutConfig {
    fn default() -> Self {
        Self {
            lower_berths: 10,
            upper_berths: 10,
            seaters: 20,
            lower_berth_price: Rupees(650),
            upper_berth_price: Rupees(600),
            seater_price: Rupees(550),
            booked_probability: 0.3,
        }
    }
}

/// Generate a seat map with randomly booked seats.
///
/// The same `seed` and config always give the same map. Berths are laid
/// out pairwise (L1, U1, L2, U2, ...) followed by the seaters.
pub fn generate_seat_map(config: &SeatLayoutConfig, seed: u64) -> SeatMap {
    let mut rng = StdRng::seed_from_u64(seed);
    let p = config.booked_probability.clamp(0.0, 1.0);
    let mut seats = Vec::with_capacity(config.capacity());

    let mut push = |position: SeatPosition, number: u8, rng: &mut StdRng| {
        let Ok(id) = SeatId::new(position, number) else {
            return;
        };
        let status = if rng.random_bool(p) {
            SeatStatus::Booked
        } else {
            SeatStatus::Available
        };
        seats.push(Seat::new(id, status, config.price_for(position)));
    };

    let berth_rows = config.lower_berths.max(config.upper_berths);
    for i in 1..=berth_rows {
        if i <= config.lower_berths {
            push(SeatPosition::LowerBerth, i, &mut rng);
        }
        if i <= config.upper_berths {
            push(SeatPosition::UpperBerth, i, &mut rng);
        }
    }
    for i in 1..=config.seaters {
        push(SeatPosition::Seater, i, &mut rng);
    }

    SeatMap::new(seats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_layout() -> SeatLayoutConfig {
        SeatLayoutConfig {
            booked_probability: 0.0,
            ..SeatLayoutConfig::default()
        }
    }

    #[test]
    fn default_layout() {
        let config = SeatLayoutConfig::default();
        assert_eq!(config.capacity(), 40);
        assert_eq!(config.price_for(SeatPosition::LowerBerth), Rupees(650));
        assert_eq!(config.price_for(SeatPosition::UpperBerth), Rupees(600));
        assert_eq!(config.price_for(SeatPosition::Seater), Rupees(550));
    }

    #[test]
    fn generates_every_seat_in_order() {
        let map = generate_seat_map(&SeatLayoutConfig::default(), 1);
        let ids: Vec<String> = map.seats().iter().map(|s| s.id.to_string()).collect();

        assert_eq!(ids.len(), 40);
        assert_eq!(&ids[..4], ["L1", "U1", "L2", "U2"]);
        assert_eq!(ids[19], "U10");
        assert_eq!(ids[20], "S1");
        assert_eq!(ids[39], "S20");
    }

    #[test]
    fn same_seed_same_map() {
        let config = SeatLayoutConfig::default();
        let a = generate_seat_map(&config, 42);
        let b = generate_seat_map(&config, 42);
        assert_eq!(a.seats(), b.seats());
    }

    #[test]
    fn nothing_selected_after_generation() {
        let map = generate_seat_map(&SeatLayoutConfig::default(), 9);
        assert!(map.selected().is_empty());
        assert!(map.seats().iter().all(|s| !s.is_selected()));
    }

    #[test]
    fn probability_zero_books_nothing() {
        let map = generate_seat_map(&open_layout(), 3);
        assert!(map.seats().iter().all(|s| s.status == SeatStatus::Available));
    }

    #[test]
    fn probability_one_books_everything() {
        let config = SeatLayoutConfig {
            booked_probability: 1.0,
            ..SeatLayoutConfig::default()
        };
        let map = generate_seat_map(&config, 3);
        assert!(map.seats().iter().all(Seat::is_booked));
    }

    #[test]
    fn out_of_range_probability_is_clamped() {
        let config = SeatLayoutConfig {
            booked_probability: 7.5,
            ..SeatLayoutConfig::default()
        };
        let map = generate_seat_map(&config, 3);
        assert!(map.seats().iter().all(Seat::is_booked));
    }

    #[test]
    fn uneven_berth_counts() {
        let config = SeatLayoutConfig {
            lower_berths: 2,
            upper_berths: 1,
            seaters: 0,
            ..open_layout()
        };
        let map = generate_seat_map(&config, 0);
        let ids: Vec<String> = map.seats().iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, ["L1", "U1", "L2"]);
    }

    #[test]
    fn prices_follow_position() {
        let map = generate_seat_map(&open_layout(), 5);
        for seat in map.seats() {
            let expected = SeatLayoutConfig::default().price_for(seat.id.position());
            assert_eq!(seat.price, expected, "price of {}", seat.id);
        }
    }
}
