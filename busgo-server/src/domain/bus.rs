//! Bus listings.

use std::fmt;

use serde::Serialize;

use super::{BusType, ClockTime, Rupees};

/// Error returned when parsing an invalid bus identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid bus id: {reason}")]
pub struct InvalidBusId {
    reason: &'static str,
}

/// Identifier of a bus in the fleet, e.g. `bus3`.
///
/// Identifiers appear in URL paths, so they are restricted to lowercase
/// ASCII letters and digits.
///
/// # Examples
///
/// ```
/// use busgo_server::domain::BusId;
///
/// let id = BusId::parse("bus1").unwrap();
/// assert_eq!(id.as_str(), "bus1");
///
/// assert!(BusId::parse("").is_err());
/// assert!(BusId::parse("bus 1").is_err());
/// assert!(BusId::parse("Bus1").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BusId(String);

impl BusId {
    const MAX_LEN: usize = 32;

    pub fn parse(s: &str) -> Result<Self, InvalidBusId> {
        if s.is_empty() {
            return Err(InvalidBusId {
                reason: "must not be empty",
            });
        }
        if s.len() > Self::MAX_LEN {
            return Err(InvalidBusId {
                reason: "must be at most 32 characters",
            });
        }
        if !s
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        {
            return Err(InvalidBusId {
                reason: "must be lowercase ASCII letters and digits",
            });
        }
        Ok(BusId(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BusId({})", self.0)
    }
}

impl fmt::Display for BusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for BusId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A scheduled bus on the searched route.
///
/// Buses come from the fixed fleet and are never mutated. `seats_available`
/// is the advertised figure; it is not derived from any seat map.
#[derive(Debug, Clone)]
pub struct Bus {
    pub id: BusId,
    pub operator: String,
    pub bus_type: BusType,
    pub departure: ClockTime,
    pub arrival: ClockTime,
    /// Travel time in minutes.
    pub duration_mins: u32,
    /// Starting fare.
    pub price: Rupees,
    pub seats_available: u32,
    /// Passenger rating out of 5.
    pub rating: f32,
    pub amenities: Vec<String>,
}

impl Bus {
    /// Travel time formatted as e.g. "4h 30m".
    pub fn duration_display(&self) -> String {
        format!("{}h {:02}m", self.duration_mins / 60, self.duration_mins % 60)
    }
}
