//! Trip queries, payment and ticketing.
//!
//! The trip query is the only state that travels between screens. Each
//! screen parses it from the query string, and builds the next screen's
//! URL from it.

mod payment;
mod query;
mod receipt;

pub use payment::{
    FareBreakdown, IncompletePayment, PaymentDetails, PaymentForm, PaymentMethod,
    PaymentProcessor, SERVICE_FEE, UpiMode, WalletProvider,
};
pub use query::{
    RouteQuery, TripQuery, display_date, format_seat_list, parse_amount, parse_date,
    parse_seat_list,
};
pub use receipt::{Receipt, TRAVEL_NOTES, TicketIssuer};
