//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::booking::{PaymentForm, PaymentMethod, UpiMode, WalletProvider};
use crate::domain::{Bus, BusId, BusType, Rupees, Seat, SeatCategory, SeatId, SeatStatus};

/// Search form submission.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,

    /// Present when the swap button was pressed instead of search.
    pub swap: Option<String>,
}

/// Listing query.
///
/// `windows` and `types` may be comma-joined, repeated, or both, so this is
/// parsed from the raw query string rather than through serde.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListingRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub windows: Vec<String>,
    pub types: Vec<String>,
}

impl ListingRequest {
    /// Parse a raw query string. Unknown keys are ignored; for single-valued
    /// keys the last occurrence wins.
    pub fn from_query(query: &str) -> Self {
        let mut req = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let value = value.into_owned();
            match key.as_ref() {
                "from" => req.from = Some(value),
                "to" => req.to = Some(value),
                "date" => req.date = Some(value),
                "min_price" => req.min_price = Some(value),
                "max_price" => req.max_price = Some(value),
                "windows" => req.windows.extend(split_list(&value)),
                "types" => req.types.extend(split_list(&value)),
                _ => {}
            }
        }
        req
    }
}

fn split_list(value: &str) -> impl Iterator<Item = String> + '_ {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Seat page query.
#[derive(Debug, Default, Deserialize)]
pub struct SeatsRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,

    /// Seat map seed; absent on the first visit. Parsed by the handler so a
    /// malformed value gets the usual error page.
    pub seed: Option<String>,

    /// Comma-joined selected seat ids
    pub seats: Option<String>,
}

/// Payment and confirmation page query.
#[derive(Debug, Default, Deserialize)]
pub struct TripRequest {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
    pub seats: Option<String>,
    pub amount: Option<String>,

    /// Payment tab to show
    pub method: Option<String>,
}

/// Payment form body.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaymentRequest {
    pub from: String,
    pub to: String,
    pub date: String,
    pub seats: String,
    pub amount: String,

    pub method: String,
    pub upi_id: String,
    pub upi_mode: String,
    pub card_number: String,
    pub card_name: String,
    pub card_expiry: String,
    pub card_cvv: String,
    pub wallet: String,
}

impl PaymentRequest {
    /// The payment part of the submission.
    ///
    /// Unknown method, mode or wallet values fall back to the defaults
    /// (UPI, pay, no wallet).
    pub fn payment_form(&self) -> PaymentForm {
        PaymentForm {
            method: self.method.parse().unwrap_or(PaymentMethod::Upi),
            upi_id: self.upi_id.clone(),
            upi_mode: self.upi_mode.parse().unwrap_or(UpiMode::Pay),
            card_number: self.card_number.clone(),
            card_name: self.card_name.clone(),
            card_expiry: self.card_expiry.clone(),
            card_cvv: self.card_cvv.clone(),
            wallet: self.wallet.parse::<WalletProvider>().ok(),
        }
    }
}

/// A bus in listing results.
#[derive(Debug, Serialize)]
pub struct BusResult {
    pub id: BusId,
    pub operator: String,
    pub bus_type: BusType,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub price: Rupees,
    pub seats_available: u32,
    pub rating: f32,
    pub amenities: Vec<String>,
}

impl BusResult {
    pub fn from_bus(bus: &Bus) -> Self {
        Self {
            id: bus.id.clone(),
            operator: bus.operator.clone(),
            bus_type: bus.bus_type,
            departure: bus.departure.to_string(),
            arrival: bus.arrival.to_string(),
            duration: bus.duration_display(),
            price: bus.price,
            seats_available: bus.seats_available,
            rating: bus.rating,
            amenities: bus.amenities.clone(),
        }
    }
}

/// Response for the listing API.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    /// Buses passing the filters, in listing order
    pub buses: Vec<BusResult>,

    /// Number of buses before filtering
    pub total: usize,
}

/// A seat in the seat map API.
#[derive(Debug, Serialize)]
pub struct SeatResult {
    pub id: SeatId,
    /// Seat number within its deck, e.g. 3 for `U3`
    pub number: u8,
    pub category: SeatCategory,
    pub status: SeatStatus,
    pub price: Rupees,
}

impl SeatResult {
    pub fn from_seat(seat: &Seat) -> Self {
        Self {
            id: seat.id,
            number: seat.id.number(),
            category: seat.category(),
            status: seat.status,
            price: seat.price,
        }
    }
}

/// Response for the seat map API.
#[derive(Debug, Serialize)]
pub struct SeatMapResponse {
    pub bus_id: BusId,

    /// Seed that reproduces this seat map
    pub seed: u64,

    pub seats: Vec<SeatResult>,

    /// Seats neither booked nor selected
    pub available: usize,

    /// Selected seat ids in selection order
    pub selected: Vec<SeatId>,

    /// Sum of selected seat prices
    pub total: Rupees,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
