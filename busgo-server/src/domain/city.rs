//! City name type.

use std::fmt;

/// Error returned when a city name is missing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid city: {reason}")]
pub struct InvalidCity {
    reason: &'static str,
}

/// A non-empty city name, e.g. "Mumbai".
///
/// City names are free text typed by the user. The only check is presence:
/// surrounding whitespace is trimmed and the result must not be empty.
///
/// # Examples
///
/// ```
/// use busgo_server::domain::City;
///
/// let pune = City::parse("  Pune ").unwrap();
/// assert_eq!(pune.as_str(), "Pune");
///
/// assert!(City::parse("").is_err());
/// assert!(City::parse("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct City(String);

impl City {
    /// Parse a city name, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidCity> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidCity {
                reason: "must not be empty",
            });
        }
        Ok(City(trimmed.to_string()))
    }

    /// Returns the city name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City({})", self.0)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_city() {
        assert_eq!(City::parse("Mumbai").unwrap().as_str(), "Mumbai");
        assert_eq!(City::parse("New Delhi").unwrap().as_str(), "New Delhi");
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(City::parse("\tPune \n").unwrap().as_str(), "Pune");
    }

    #[test]
    fn reject_blank() {
        assert!(City::parse("").is_err());
        assert!(City::parse("  ").is_err());
    }

    #[test]
    fn display_and_debug() {
        let city = City::parse("Surat").unwrap();
        assert_eq!(format!("{}", city), "Surat");
        assert_eq!(format!("{:?}", city), "City(Surat)");
    }
}
