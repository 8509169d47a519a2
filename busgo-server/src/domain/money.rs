//! Whole-rupee amounts.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

/// An amount in whole Indian rupees.
///
/// All fares in the system are whole rupees, so there is no paise
/// component. Displayed with the rupee sign, e.g. `₹1200`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rupees(pub u32);

impl Rupees {
    pub const ZERO: Rupees = Rupees(0);

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Subtract, stopping at zero.
    pub fn saturating_sub(self, other: Rupees) -> Rupees {
        Rupees(self.0.saturating_sub(other.0))
    }
}

impl Add for Rupees {
    type Output = Rupees;

    fn add(self, rhs: Rupees) -> Rupees {
        Rupees(self.0 + rhs.0)
    }
}

impl Sum for Rupees {
    fn sum<I: Iterator<Item = Rupees>>(iter: I) -> Rupees {
        iter.fold(Rupees::ZERO, Add::add)
    }
}

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}
