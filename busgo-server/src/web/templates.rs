//! Askama templates for the web frontend.

use askama::Template;

use crate::booking::{FareBreakdown, Receipt, RouteQuery, TRAVEL_NOTES, TripQuery, WalletProvider};
use crate::domain::{
    Bus, BusId, BusTypeTag, City, DepartureWindow, DomainError, Seat, SeatStatus,
};
use crate::fleet::PopularRoute;
use crate::listing::{BusFilter, ListingConfig};
use crate::seating::SeatMap;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with search form and popular routes.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub from: String,
    pub to: String,
    pub date: String,
    /// Earliest selectable date (today), `YYYY-MM-DD`.
    pub min_date: String,
    pub routes: Vec<PopularRouteView>,
}

/// Bus listing with filters.
#[derive(Template)]
#[template(path = "buses.html")]
pub struct BusesTemplate {
    pub header: String,
    pub from: String,
    pub to: String,
    pub date: String,
    pub modify_url: String,
    pub filter: FilterView,
    pub buses: Vec<BusView>,
}

/// Seat selection.
#[derive(Template)]
#[template(path = "seats.html")]
pub struct SeatsTemplate {
    pub header: String,
    pub bus: BusView,
    pub travel_date: String,
    pub back_url: String,
    pub lower: Vec<SeatView>,
    pub upper: Vec<SeatView>,
    pub seaters: Vec<SeatView>,
    pub selected: Vec<SeatView>,
    /// Seats still free to pick.
    pub available: usize,
    pub total: String,
    /// `None` while nothing is selected, which disables the button.
    pub proceed_url: Option<String>,
}

/// Payment form and summary.
#[derive(Template)]
#[template(path = "payment.html")]
pub struct PaymentTemplate {
    pub header: String,
    pub action_url: String,
    pub back_url: String,
    pub trip: TripFields,
    pub method: String,
    pub tabs: Vec<TabView>,
    pub upi_id: String,
    pub upi_collect: bool,
    pub card_number: String,
    pub card_name: String,
    pub card_expiry: String,
    pub wallets: Vec<OptionView>,
    pub seats: String,
    pub base_fare: String,
    pub service_fee: String,
    pub total: String,
}

/// Booking confirmation.
#[derive(Template)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub ticket: String,
    pub header: String,
    pub from: String,
    pub to: String,
    pub operator: String,
    pub bus_summary: String,
    pub departure: String,
    pub arrival: String,
    pub seats: String,
    pub total: String,
    pub notes: Vec<&'static str>,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Popular route card.
#[derive(Debug, Clone)]
pub struct PopularRouteView {
    pub from: String,
    pub to: String,
    pub price: String,
    pub time: String,
    pub href: String,
}

impl PopularRouteView {
    /// Create from a popular route, linking to the listing for `date`.
    pub fn from_route(route: &PopularRoute, date: chrono::NaiveDate) -> Result<Self, DomainError> {
        let href = RouteQuery {
            from: City::parse(route.from)?,
            to: City::parse(route.to)?,
            date,
        }
        .listing_url();

        Ok(Self {
            from: route.from.to_string(),
            to: route.to.to_string(),
            price: route.price.to_string(),
            time: route.time.to_string(),
            href,
        })
    }
}

/// Bus card view model.
#[derive(Debug, Clone)]
pub struct BusView {
    pub id: String,
    pub operator: String,
    pub bus_type: String,
    pub departure: String,
    pub arrival: String,
    pub duration: String,
    pub price: String,
    pub seats_available: u32,
    pub rating: String,
    pub amenities: Vec<String>,
    /// Link to seat selection; empty on the seat page itself.
    pub seats_url: String,
}

impl BusView {
    /// Create from a domain Bus.
    pub fn from_bus(bus: &Bus, route: &RouteQuery) -> Self {
        Self {
            id: bus.id.to_string(),
            operator: bus.operator.clone(),
            bus_type: bus.bus_type.to_string(),
            departure: bus.departure.to_string(),
            arrival: bus.arrival.to_string(),
            duration: bus.duration_display(),
            price: bus.price.to_string(),
            seats_available: bus.seats_available,
            rating: format!("{:.1}", bus.rating),
            amenities: bus.amenities.clone(),
            seats_url: route.seats_url(&bus.id, None, &[]),
        }
    }
}

/// A checkbox or radio option.
#[derive(Debug, Clone)]
pub struct OptionView {
    pub value: String,
    pub label: String,
    pub checked: bool,
}

/// Listing filter panel.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub min_price: u32,
    pub max_price: u32,
    pub slider_min: u32,
    pub slider_max: u32,
    pub step: u32,
    pub windows: Vec<OptionView>,
    pub types: Vec<OptionView>,
}

impl FilterView {
    pub fn new(filter: &BusFilter, config: &ListingConfig) -> Self {
        let windows = DepartureWindow::ALL
            .iter()
            .map(|w| OptionView {
                value: w.as_str().to_string(),
                label: w.label().to_string(),
                checked: filter.windows.contains(w),
            })
            .collect();
        let types = BusTypeTag::ALL
            .iter()
            .map(|t| OptionView {
                value: t.as_str().to_string(),
                label: t.label().to_string(),
                checked: filter.types.contains(t),
            })
            .collect();

        Self {
            min_price: filter.price.min.value(),
            max_price: filter.price.max.value(),
            slider_min: config.min_price.value(),
            slider_max: config.max_price.value(),
            step: config.price_step,
            windows,
            types,
        }
    }
}

/// One seat button.
#[derive(Debug, Clone)]
pub struct SeatView {
    pub id: String,
    pub price: String,
    /// "available", "booked" or "selected"; doubles as the CSS class.
    pub status: &'static str,
    /// Link that applies this seat's toggle; empty for booked seats.
    pub toggle_url: String,
}

impl SeatView {
    pub fn from_seat(
        seat: &Seat,
        map: &SeatMap,
        bus: &BusId,
        route: &RouteQuery,
        seed: u64,
    ) -> Self {
        let status = match seat.status {
            SeatStatus::Available => "available",
            SeatStatus::Booked => "booked",
            SeatStatus::Selected => "selected",
        };
        let toggle_url = if seat.is_booked() {
            String::new()
        } else {
            route.seats_url(bus, Some(seed), &map.selection_after_toggle(seat.id))
        };

        Self {
            id: seat.id.to_string(),
            price: seat.price.to_string(),
            status,
            toggle_url,
        }
    }

    pub fn is_booked(&self) -> bool {
        self.status == "booked"
    }
}

/// Trip values carried through the payment form as hidden fields.
#[derive(Debug, Clone)]
pub struct TripFields {
    pub from: String,
    pub to: String,
    pub date: String,
    pub seats: String,
    pub amount: String,
}

impl TripFields {
    pub fn from_trip(trip: &TripQuery) -> Self {
        Self {
            from: trip.route.from.to_string(),
            to: trip.route.to.to_string(),
            date: trip.route.date.format("%Y-%m-%d").to_string(),
            seats: crate::booking::format_seat_list(&trip.seats),
            amount: trip.amount.value().to_string(),
        }
    }
}

/// A payment method tab.
#[derive(Debug, Clone)]
pub struct TabView {
    pub value: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

impl PaymentTemplate {
    /// Build the payment page for `trip`, pre-filled from `form`.
    pub fn new(bus: &BusId, trip: &TripQuery, form: &crate::booking::PaymentForm) -> Self {
        use crate::booking::{PaymentMethod, UpiMode};

        let payment_url = trip.payment_url(bus);
        let tabs = [
            (PaymentMethod::Upi, "UPI"),
            (PaymentMethod::Card, "Card"),
            (PaymentMethod::Wallet, "Wallet"),
        ]
        .into_iter()
        .map(|(method, label)| TabView {
            value: method.as_str(),
            label,
            href: format!("{payment_url}&method={}", method.as_str()),
            active: method == form.method,
        })
        .collect();

        let wallets = WalletProvider::ALL
            .iter()
            .map(|w| OptionView {
                value: w.as_str().to_string(),
                label: w.label().to_string(),
                checked: form.wallet == Some(*w),
            })
            .collect();

        let fare = FareBreakdown::for_amount(trip.amount);

        Self {
            header: trip.route.header(),
            action_url: format!("/buses/{bus}/payment"),
            back_url: trip.route.seats_url(bus, None, &[]),
            trip: TripFields::from_trip(trip),
            method: form.method.as_str().to_string(),
            tabs,
            upi_id: form.upi_id.clone(),
            upi_collect: form.upi_mode == UpiMode::Collect,
            card_number: form.card_number.clone(),
            card_name: form.card_name.clone(),
            card_expiry: form.card_expiry.clone(),
            wallets,
            seats: trip.seats_display(),
            base_fare: fare.base_fare.to_string(),
            service_fee: fare.service_fee.to_string(),
            total: fare.total.to_string(),
        }
    }
}

impl ConfirmationTemplate {
    pub fn from_receipt(receipt: &Receipt) -> Self {
        Self {
            ticket: receipt.ticket.to_string(),
            header: receipt.trip.route.header(),
            from: receipt.trip.route.from.to_string(),
            to: receipt.trip.route.to.to_string(),
            operator: receipt.bus.operator.clone(),
            bus_summary: receipt.bus_summary(),
            departure: receipt.departure_display(),
            arrival: receipt.arrival_display(),
            seats: receipt.trip.seats_display(),
            total: receipt.trip.amount.to_string(),
            notes: TRAVEL_NOTES.to_vec(),
        }
    }
}
