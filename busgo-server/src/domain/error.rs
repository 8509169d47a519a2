//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from HTTP errors, which the web layer derives from them.

use super::{
    InvalidBusId, InvalidBusTypeTag, InvalidCity, InvalidDepartureWindow, InvalidSeatId, Rupees,
    SeatId,
};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    #[error(transparent)]
    City(#[from] InvalidCity),

    #[error(transparent)]
    BusId(#[from] InvalidBusId),

    #[error(transparent)]
    SeatId(#[from] InvalidSeatId),

    #[error(transparent)]
    BusType(#[from] InvalidBusTypeTag),

    #[error(transparent)]
    DepartureWindow(#[from] InvalidDepartureWindow),

    /// Travel date is not a `YYYY-MM-DD` date
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Amount is not a whole number of rupees
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Price range lower bound above upper bound
    #[error("invalid price range: {min} is above {max}")]
    InvalidPriceRange { min: Rupees, max: Rupees },

    /// Seat does not exist in the seat map
    #[error("seat {0} is not on this bus")]
    UnknownSeat(SeatId),

    /// A trip past seat selection carries no seats
    #[error("no seats selected")]
    NoSeatsSelected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::InvalidDate("2024-13-01".into());
        assert_eq!(err.to_string(), "invalid date: 2024-13-01");

        let err = DomainError::InvalidAmount("12x".into());
        assert_eq!(err.to_string(), "invalid amount: 12x");

        let err = DomainError::InvalidPriceRange {
            min: Rupees(900),
            max: Rupees(300),
        };
        assert_eq!(err.to_string(), "invalid price range: ₹900 is above ₹300");

        let err = DomainError::UnknownSeat(SeatId::parse("S99").unwrap());
        assert_eq!(err.to_string(), "seat S99 is not on this bus");
    }

    #[test]
    fn wraps_parse_errors() {
        let err: DomainError = SeatId::parse("Q1").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid seat id: must start with L, U or S");
    }
}
