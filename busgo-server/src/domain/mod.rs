//! Domain types for the bus booking flow.
//!
//! This module contains the core domain model types: cities, buses, seats,
//! money and ticket numbers. Value types enforce their invariants at
//! construction time, so code that receives them can trust their validity.

mod bus;
mod bus_type;
mod city;
mod clock;
mod error;
mod money;
mod seat;
mod ticket;

pub use bus::{Bus, BusId, InvalidBusId};
pub use bus_type::{BerthClass, BusType, BusTypeTag, Climate, InvalidBusTypeTag};
pub use city::{City, InvalidCity};
pub use clock::{ClockTime, DepartureWindow, InvalidClockTime, InvalidDepartureWindow};
pub use error::DomainError;
pub use money::Rupees;
pub use seat::{InvalidSeatId, Seat, SeatCategory, SeatId, SeatPosition, SeatStatus};
pub use ticket::{InvalidTicketNumber, TicketNumber};
