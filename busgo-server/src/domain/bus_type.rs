//! Bus type: climate control plus berth class.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Whether the coach is air-conditioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Climate {
    #[serde(rename = "AC")]
    Ac,
    #[serde(rename = "Non-AC")]
    NonAc,
}

/// Whether passengers travel in berths or upright seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BerthClass {
    Sleeper,
    Seater,
}

/// A bus type such as "AC Sleeper" or "Non-AC Seater".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BusType {
    pub climate: Climate,
    pub berth: BerthClass,
}

impl BusType {
    pub const fn new(climate: Climate, berth: BerthClass) -> Self {
        Self { climate, berth }
    }
}

impl fmt::Display for BusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let climate = match self.climate {
            Climate::Ac => "AC",
            Climate::NonAc => "Non-AC",
        };
        let berth = match self.berth {
            BerthClass::Sleeper => "Sleeper",
            BerthClass::Seater => "Seater",
        };
        write!(f, "{climate} {berth}")
    }
}

impl Serialize for BusType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Error returned when parsing an unknown bus type tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bus type: {0}")]
pub struct InvalidBusTypeTag(pub String);

/// One facet of a bus type, as offered by the listing filter.
///
/// "AC" matches only air-conditioned buses; it does not match "Non-AC".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusTypeTag {
    Ac,
    NonAc,
    Sleeper,
    Seater,
}

impl BusTypeTag {
    pub const ALL: [BusTypeTag; 4] = [
        BusTypeTag::Ac,
        BusTypeTag::NonAc,
        BusTypeTag::Sleeper,
        BusTypeTag::Seater,
    ];

    /// Whether a bus of type `bus_type` carries this tag.
    pub fn matches(&self, bus_type: BusType) -> bool {
        match self {
            BusTypeTag::Ac => bus_type.climate == Climate::Ac,
            BusTypeTag::NonAc => bus_type.climate == Climate::NonAc,
            BusTypeTag::Sleeper => bus_type.berth == BerthClass::Sleeper,
            BusTypeTag::Seater => bus_type.berth == BerthClass::Seater,
        }
    }

    /// The query-string token for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BusTypeTag::Ac => "ac",
            BusTypeTag::NonAc => "non-ac",
            BusTypeTag::Sleeper => "sleeper",
            BusTypeTag::Seater => "seater",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BusTypeTag::Ac => "AC",
            BusTypeTag::NonAc => "Non-AC",
            BusTypeTag::Sleeper => "Sleeper",
            BusTypeTag::Seater => "Seater",
        }
    }
}

impl FromStr for BusTypeTag {
    type Err = InvalidBusTypeTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ac" => Ok(BusTypeTag::Ac),
            "non-ac" | "nonac" => Ok(BusTypeTag::NonAc),
            "sleeper" => Ok(BusTypeTag::Sleeper),
            "seater" => Ok(BusTypeTag::Seater),
            _ => Err(InvalidBusTypeTag(s.to_string())),
        }
    }
}

impl fmt::Display for BusTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
