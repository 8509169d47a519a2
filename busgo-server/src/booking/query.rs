//! Trip query parsing and URL building.

use chrono::NaiveDate;
use url::form_urlencoded;

use crate::domain::{BusId, City, DomainError, Rupees, SeatId};

/// Parse a travel date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(s.to_string()))
}

/// Format a date for headers and tickets, e.g. "Sat, 01 Jun 2024".
pub fn display_date(date: NaiveDate) -> String {
    date.format("%a, %d %b %Y").to_string()
}

/// Parse a comma-joined seat list such as "L1,S3".
///
/// Empty entries are skipped, so "" is the empty selection.
pub fn parse_seat_list(s: &str) -> Result<Vec<SeatId>, DomainError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| SeatId::parse(part).map_err(DomainError::from))
        .collect()
}

/// Join seat ids with commas, the inverse of [`parse_seat_list`].
pub fn format_seat_list(seats: &[SeatId]) -> String {
    seats
        .iter()
        .map(SeatId::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse an amount in whole rupees.
pub fn parse_amount(s: &str) -> Result<Rupees, DomainError> {
    s.trim()
        .parse::<u32>()
        .map(Rupees)
        .map_err(|_| DomainError::InvalidAmount(s.to_string()))
}

/// Origin, destination and date: the part of the trip every screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    pub from: City,
    pub to: City,
    pub date: NaiveDate,
}

impl RouteQuery {
    /// Parse from raw query values. All three must be present.
    pub fn parse(from: &str, to: &str, date: &str) -> Result<Self, DomainError> {
        Ok(Self {
            from: City::parse(from)?,
            to: City::parse(to)?,
            date: parse_date(date)?,
        })
    }

    /// "Mumbai to Pune | Sat, 01 Jun 2024"
    pub fn header(&self) -> String {
        format!("{} to {} | {}", self.from, self.to, display_date(self.date))
    }

    fn append_to(&self, query: &mut form_urlencoded::Serializer<'_, String>) {
        query
            .append_pair("from", self.from.as_str())
            .append_pair("to", self.to.as_str())
            .append_pair("date", &self.date.format("%Y-%m-%d").to_string());
    }

    fn query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.append_to(&mut query);
        query.finish()
    }

    /// URL of the bus listing for this route.
    pub fn listing_url(&self) -> String {
        format!("/buses?{}", self.query_string())
    }

    /// URL of the seat page for `bus`.
    ///
    /// Without a seed the seat page draws a fresh seat map.
    pub fn seats_url(&self, bus: &BusId, seed: Option<u64>, seats: &[SeatId]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.append_to(&mut query);
        if let Some(seed) = seed {
            query.append_pair("seed", &seed.to_string());
        }
        if !seats.is_empty() {
            query.append_pair("seats", &format_seat_list(seats));
        }
        format!("/buses/{}/seats?{}", bus, query.finish())
    }
}

/// A trip with seats chosen and a total to pay.
///
/// The amount is whatever the URL says. Nothing checks it against the seat
/// prices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TripQuery {
    pub route: RouteQuery,
    pub seats: Vec<SeatId>,
    pub amount: Rupees,
}

impl TripQuery {
    /// Parse from raw query values. At least one seat is required.
    pub fn parse(
        from: &str,
        to: &str,
        date: &str,
        seats: &str,
        amount: &str,
    ) -> Result<Self, DomainError> {
        let route = RouteQuery::parse(from, to, date)?;
        let seats = parse_seat_list(seats)?;
        if seats.is_empty() {
            return Err(DomainError::NoSeatsSelected);
        }
        Ok(Self {
            route,
            seats,
            amount: parse_amount(amount)?,
        })
    }

    /// Seats as printed on screen, e.g. "L1, S3".
    pub fn seats_display(&self) -> String {
        self.seats
            .iter()
            .map(SeatId::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        self.route.append_to(&mut query);
        query
            .append_pair("seats", &format_seat_list(&self.seats))
            .append_pair("amount", &self.amount.value().to_string());
        query.finish()
    }

    /// URL of the payment page for `bus`.
    pub fn payment_url(&self, bus: &BusId) -> String {
        format!("/buses/{}/payment?{}", bus, self.query_string())
    }

    /// URL of the confirmation page for `bus`.
    pub fn confirmation_url(&self, bus: &BusId) -> String {
        format!("/buses/{}/confirmation?{}", bus, self.query_string())
    }

    /// A stable key identifying this trip on `bus`.
    pub fn cache_key(&self, bus: &BusId) -> String {
        format!("{}?{}", bus, self.query_string())
    }
}
