//! Ticket numbers and receipts.
//!
//! Ticket numbers are made up on the confirmation screen. To keep a reload
//! from showing a different number, the number issued for a trip query is
//! remembered for a while.

use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::domain::{Bus, BusId, TicketNumber};

use super::{TripQuery, display_date};

/// Notes printed under every ticket.
pub const TRAVEL_NOTES: [&str; 3] = [
    "Please arrive at the boarding point 15 minutes before departure.",
    "Carry a valid ID proof for verification.",
    "Cancellation charges apply as per policy.",
];

/// Issues ticket numbers, one per distinct trip query.
#[derive(Clone)]
pub struct TicketIssuer {
    /// Ticket numbers keyed by `TripQuery::cache_key`.
    tickets: MokaCache<String, TicketNumber>,
}

impl TicketIssuer {
    /// Create an issuer that remembers up to `max_capacity` tickets for `ttl`.
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        let tickets = MokaCache::builder()
            .time_to_live(ttl)
            .max_capacity(max_capacity)
            .build();
        Self { tickets }
    }

    /// The ticket number for `trip` on `bus`.
    ///
    /// Returns the remembered number if this exact trip was confirmed
    /// within the TTL, otherwise draws a new one.
    pub async fn issue(&self, bus: &BusId, trip: &TripQuery) -> TicketNumber {
        let key = trip.cache_key(bus);
        let fresh = TicketNumber::random(&mut rand::rng());
        let ticket = self.tickets.get_with(key, async move { fresh }).await;
        debug!(bus = %bus, ticket = %ticket, "ticket issued");
        ticket
    }
}

/// Everything the confirmation screen prints.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub ticket: TicketNumber,
    pub bus: Bus,
    pub trip: TripQuery,
}

impl Receipt {
    pub fn new(ticket: TicketNumber, bus: Bus, trip: TripQuery) -> Self {
        Self { ticket, bus, trip }
    }

    /// "07:30, Sat, 01 Jun 2024"
    pub fn departure_display(&self) -> String {
        format!("{}, {}", self.bus.departure, display_date(self.trip.route.date))
    }

    /// Arrival time with the travel date, as the ticket prints it.
    ///
    /// Overnight buses arrive the next day, but the ticket shows the travel
    /// date for both ends.
    pub fn arrival_display(&self) -> String {
        format!("{}, {}", self.bus.arrival, display_date(self.trip.route.date))
    }

    /// "AC Sleeper | 4h 00m"
    pub fn bus_summary(&self) -> String {
        format!("{} | {}", self.bus.bus_type, self.bus.duration_display())
    }
}
