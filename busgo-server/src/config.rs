//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::listing::ListingConfig;
use crate::seating::SeatLayoutConfig;

/// Error returned when an environment variable cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Configuration for the whole application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address to listen on.
    pub listen_addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// How long a payment "takes".
    pub payment_delay: Duration,

    /// How long a ticket number is remembered for its trip.
    pub ticket_ttl: Duration,

    /// Maximum number of remembered ticket numbers.
    pub ticket_capacity: u64,

    pub seat_layout: SeatLayoutConfig,

    pub listing: ListingConfig,
}

impl AppConfig {
    pub const ADDR_VAR: &'static str = "BUSGO_ADDR";
    pub const STATIC_DIR_VAR: &'static str = "BUSGO_STATIC_DIR";
    pub const PAYMENT_DELAY_VAR: &'static str = "BUSGO_PAYMENT_DELAY_MS";
    pub const TICKET_TTL_VAR: &'static str = "BUSGO_TICKET_TTL_SECS";
    pub const TICKET_CAPACITY_VAR: &'static str = "BUSGO_TICKET_CAPACITY";

    /// Read configuration from the process environment.
    ///
    /// Unset variables take their defaults; set but unparseable ones are an
    /// error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(Self::ADDR_VAR) {
            config.listen_addr = parse_var(Self::ADDR_VAR, value)?;
        }
        if let Some(value) = lookup(Self::STATIC_DIR_VAR) {
            config.static_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup(Self::PAYMENT_DELAY_VAR) {
            config.payment_delay = Duration::from_millis(parse_var(Self::PAYMENT_DELAY_VAR, value)?);
        }
        if let Some(value) = lookup(Self::TICKET_TTL_VAR) {
            config.ticket_ttl = Duration::from_secs(parse_var(Self::TICKET_TTL_VAR, value)?);
        }
        if let Some(value) = lookup(Self::TICKET_CAPACITY_VAR) {
            config.ticket_capacity = parse_var(Self::TICKET_CAPACITY_VAR, value)?;
        }

        Ok(config)
    }
}

fn parse_var<T>(var: &'static str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let parsed = value.trim().parse::<T>();
    parsed.map_err(|e| ConfigError {
        var,
        reason: e.to_string(),
        value,
    })
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from("static"),
            payment_delay: Duration::from_secs(2),
            ticket_ttl: Duration::from_secs(15 * 60),
            ticket_capacity: 10_000,
            seat_layout: SeatLayoutConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}
