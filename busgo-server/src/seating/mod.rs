//! Seat inventory and selection.
//!
//! A seat map is generated per page visit from a seed, then the selection
//! carried in the URL is replayed onto it. Nothing is persisted and no seat
//! is ever locked: two visitors can select the same seat.

mod layout;
mod map;

pub use layout::{SeatLayoutConfig, generate_seat_map};
pub use map::{SeatMap, ToggleOutcome};
