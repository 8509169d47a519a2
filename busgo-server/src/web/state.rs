//! Application state for the web layer.

use std::sync::Arc;

use crate::booking::{PaymentProcessor, TicketIssuer};
use crate::config::AppConfig;
use crate::fleet::Fleet;
use crate::listing::ListingConfig;
use crate::seating::SeatLayoutConfig;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Buses offered on every route
    pub fleet: Arc<Fleet>,

    /// Shape and pricing of generated seat maps
    pub seat_layout: Arc<SeatLayoutConfig>,

    /// Price slider bounds
    pub listing: Arc<ListingConfig>,

    /// Simulated payment processor
    pub payments: Arc<PaymentProcessor>,

    /// Ticket numbers by trip
    pub tickets: TicketIssuer,
}

impl AppState {
    /// Create a new app state.
    pub fn new(fleet: Fleet, config: &AppConfig) -> Self {
        Self {
            fleet: Arc::new(fleet),
            seat_layout: Arc::new(config.seat_layout.clone()),
            listing: Arc::new(config.listing.clone()),
            payments: Arc::new(PaymentProcessor::new(config.payment_delay)),
            tickets: TicketIssuer::new(config.ticket_ttl, config.ticket_capacity),
        }
    }
}
