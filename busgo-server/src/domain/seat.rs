//! Seat identifiers and seat state.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::Rupees;

/// Error returned when parsing an invalid seat identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat id: {reason}")]
pub struct InvalidSeatId {
    reason: &'static str,
}

/// Where in the coach a seat is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SeatPosition {
    LowerBerth,
    UpperBerth,
    Seater,
}

impl SeatPosition {
    /// The letter that prefixes seat numbers in this position.
    pub fn prefix(&self) -> char {
        match self {
            SeatPosition::LowerBerth => 'L',
            SeatPosition::UpperBerth => 'U',
            SeatPosition::Seater => 'S',
        }
    }

    pub fn category(&self) -> SeatCategory {
        match self {
            SeatPosition::LowerBerth | SeatPosition::UpperBerth => SeatCategory::Sleeper,
            SeatPosition::Seater => SeatCategory::Seater,
        }
    }
}

/// A seat identifier such as `L1`, `U10` or `S3`.
///
/// The letter gives the position (lower berth, upper berth, seater) and the
/// number runs from 1 within that position. The identifier doubles as the
/// seat number printed on the ticket.
///
/// # Examples
///
/// ```
/// use busgo_server::domain::{SeatId, SeatPosition};
///
/// let id = SeatId::parse("U7").unwrap();
/// assert_eq!(id.position(), SeatPosition::UpperBerth);
/// assert_eq!(id.number(), 7);
/// assert_eq!(id.to_string(), "U7");
///
/// assert!(SeatId::parse("X1").is_err());
/// assert!(SeatId::parse("L0").is_err());
/// assert!(SeatId::parse("L01").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    position: SeatPosition,
    number: u8,
}

impl SeatId {
    /// Create a seat id, rejecting seat number zero.
    pub fn new(position: SeatPosition, number: u8) -> Result<Self, InvalidSeatId> {
        if number == 0 {
            return Err(InvalidSeatId {
                reason: "seat numbers start at 1",
            });
        }
        Ok(Self { position, number })
    }

    /// Parse a seat id like "L1".
    ///
    /// The number must not have leading zeros, so each seat has exactly one
    /// spelling.
    pub fn parse(s: &str) -> Result<Self, InvalidSeatId> {
        let mut chars = s.chars();
        let position = match chars.next() {
            Some('L') => SeatPosition::LowerBerth,
            Some('U') => SeatPosition::UpperBerth,
            Some('S') => SeatPosition::Seater,
            Some(_) => {
                return Err(InvalidSeatId {
                    reason: "must start with L, U or S",
                });
            }
            None => {
                return Err(InvalidSeatId {
                    reason: "must not be empty",
                });
            }
        };

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidSeatId {
                reason: "must be followed by a seat number",
            });
        }
        if digits.starts_with('0') {
            return Err(InvalidSeatId {
                reason: "seat number must not have leading zeros",
            });
        }
        let number: u8 = digits.parse().map_err(|_| InvalidSeatId {
            reason: "seat number out of range",
        })?;

        Self::new(position, number)
    }

    pub fn position(&self) -> SeatPosition {
        self.position
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn category(&self) -> SeatCategory {
        self.position.category()
    }
}

impl fmt::Debug for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeatId({self})")
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.position.prefix(), self.number)
    }
}

impl FromStr for SeatId {
    type Err = InvalidSeatId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeatId::parse(s)
    }
}

impl Serialize for SeatId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Seat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatCategory {
    Sleeper,
    Seater,
}

/// Booking state of a seat within one page visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Booked,
    Selected,
}

/// A seat in a generated seat map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    pub id: SeatId,
    pub status: SeatStatus,
    pub price: Rupees,
}

impl Seat {
    pub fn new(id: SeatId, status: SeatStatus, price: Rupees) -> Self {
        Self { id, status, price }
    }

    pub fn category(&self) -> SeatCategory {
        self.id.category()
    }

    pub fn is_booked(&self) -> bool {
        self.status == SeatStatus::Booked
    }

    pub fn is_selected(&self) -> bool {
        self.status == SeatStatus::Selected
    }
}
