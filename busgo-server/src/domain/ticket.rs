//! Ticket numbers.

use std::fmt;

use rand::Rng;

/// Error returned for a serial that does not fit in six digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ticket number: {reason}")]
pub struct InvalidTicketNumber {
    reason: &'static str,
}

/// A ticket number: "BG" followed by six digits, e.g. `BG004217`.
///
/// # Examples
///
/// ```
/// use busgo_server::domain::TicketNumber;
///
/// let t = TicketNumber::from_serial(4217).unwrap();
/// assert_eq!(t.to_string(), "BG004217");
///
/// assert!(TicketNumber::from_serial(1_000_000).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketNumber(u32);

impl TicketNumber {
    const PREFIX: &'static str = "BG";
    const MAX_SERIAL: u32 = 999_999;

    /// Build a ticket number from its numeric part.
    pub fn from_serial(serial: u32) -> Result<Self, InvalidTicketNumber> {
        if serial > Self::MAX_SERIAL {
            return Err(InvalidTicketNumber {
                reason: "serial must be at most six digits",
            });
        }
        Ok(Self(serial))
    }

    /// Draw a random ticket number.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(0..=Self::MAX_SERIAL))
    }
}

impl fmt::Debug for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TicketNumber({self})")
    }
}

impl fmt::Display for TicketNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:06}", Self::PREFIX, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn zero_padded() {
        assert_eq!(TicketNumber::from_serial(0).unwrap().to_string(), "BG000000");
        assert_eq!(
            TicketNumber::from_serial(999_999).unwrap().to_string(),
            "BG999999"
        );
    }

    #[test]
    fn reject_oversized_serial() {
        assert!(TicketNumber::from_serial(1_000_000).is_err());
    }

    #[test]
    fn random_numbers_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let ticket = TicketNumber::random(&mut rng);
            let text = ticket.to_string();
            assert_eq!(text.len(), 8);
            assert!(text.starts_with("BG"));
            assert!(text[2..].bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
