//! HTTP route handlers.

use std::path::Path;

use askama::Template;
use axum::{
    Form, Json, Router,
    extract::{Path as UrlPath, Query, RawQuery, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};
use url::form_urlencoded;

use crate::booking::{PaymentForm, Receipt, RouteQuery, TripQuery, display_date, parse_seat_list};
use crate::domain::{Bus, BusId, BusTypeTag, DepartureWindow, DomainError, Rupees, Seat, SeatPosition};
use crate::fleet::popular_routes;
use crate::listing::{BusFilter, ListingConfig, PriceRange, filter_buses};
use crate::seating::{SeatMap, generate_seat_map};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/search", get(search))
        .route("/buses", get(listing_page))
        .route("/buses/:id/seats", get(seats_page))
        .route("/buses/:id/payment", get(payment_page).post(submit_payment))
        .route("/buses/:id/confirmation", get(confirmation_page))
        .route("/api/buses", get(api_listing))
        .route("/api/buses/:id/seats", get(api_seats))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn render<T: Template>(template: &T) -> Result<Html<String>, AppError> {
    template.render().map(Html).map_err(|e| AppError::Internal {
        message: format!("Template error: {e}"),
    })
}

fn index_template(from: String, to: String, date: String) -> IndexTemplate {
    let today = today();
    let routes = popular_routes()
        .iter()
        .filter_map(|r| PopularRouteView::from_route(r, today).ok())
        .collect();

    IndexTemplate {
        from,
        to,
        date,
        min_date: today.format("%Y-%m-%d").to_string(),
        routes,
    }
}

/// Home page with the search form, optionally pre-filled.
async fn index_page(Query(req): Query<SearchRequest>) -> Result<Html<String>, PageError> {
    let page = index_template(
        req.from.unwrap_or_default(),
        req.to.unwrap_or_default(),
        req.date.unwrap_or_default(),
    );
    Ok(render(&page)?)
}

/// Search form submission.
///
/// A complete search redirects to the listing. Anything else (a swap, a
/// missing field, a past date) shows the form again with the values kept.
async fn search(Query(req): Query<SearchRequest>) -> Result<Response, PageError> {
    let from = req.from.unwrap_or_default();
    let to = req.to.unwrap_or_default();
    let date = req.date.unwrap_or_default();

    if req.swap.is_some() {
        return Ok(render(&index_template(to, from, date))?.into_response());
    }

    match RouteQuery::parse(&from, &to, &date) {
        Ok(route) if route.date >= today() => Ok(Redirect::to(&route.listing_url()).into_response()),
        _ => {
            debug!(%from, %to, %date, "search incomplete");
            Ok(render(&index_template(from, to, date))?.into_response())
        }
    }
}

/// Parse an optional price bound. Blank counts as absent.
fn parse_price(value: Option<&str>) -> Result<Option<Rupees>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v.parse().map(|p| Some(Rupees(p))).map_err(|_| AppError::BadRequest {
            message: format!("Invalid price: {v}"),
        }),
    }
}

/// Build the listing filter from a request, defaulting to the full slider
/// range.
fn build_filter(req: &ListingRequest, config: &ListingConfig) -> Result<BusFilter, AppError> {
    let min = parse_price(req.min_price.as_deref())?.unwrap_or(config.min_price);
    let max = parse_price(req.max_price.as_deref())?.unwrap_or(config.max_price);
    let mut filter = BusFilter::new(PriceRange::new(min, max)?);

    for window in &req.windows {
        filter = filter.with_window(window.parse::<DepartureWindow>().map_err(DomainError::from)?);
    }
    for tag in &req.types {
        filter = filter.with_type(tag.parse::<BusTypeTag>().map_err(DomainError::from)?);
    }
    Ok(filter)
}

/// Bus listing page.
async fn listing_page(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, PageError> {
    let req = ListingRequest::from_query(query.as_deref().unwrap_or(""));
    let from = req.from.clone().unwrap_or_default();
    let to = req.to.clone().unwrap_or_default();

    // Without a route there is nothing to list; go back to the search form.
    if from.trim().is_empty() || to.trim().is_empty() {
        let mut back = form_urlencoded::Serializer::new(String::new());
        back.append_pair("from", &from).append_pair("to", &to);
        if let Some(date) = &req.date {
            back.append_pair("date", date);
        }
        return Ok(Redirect::to(&format!("/?{}", back.finish())).into_response());
    }

    let date = match req.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => d.to_string(),
        None => today().format("%Y-%m-%d").to_string(),
    };
    let route = RouteQuery::parse(&from, &to, &date).map_err(AppError::from)?;
    let filter = build_filter(&req, &state.listing)?;

    let buses: Vec<BusView> = filter_buses(state.fleet.buses(), &filter)
        .into_iter()
        .map(|b| BusView::from_bus(b, &route))
        .collect();
    info!(
        from = %route.from,
        to = %route.to,
        date = %route.date,
        shown = buses.len(),
        total = state.fleet.len(),
        "listing buses"
    );

    let mut modify = form_urlencoded::Serializer::new(String::new());
    modify
        .append_pair("from", route.from.as_str())
        .append_pair("to", route.to.as_str())
        .append_pair("date", &date);

    let page = BusesTemplate {
        header: route.header(),
        from: route.from.to_string(),
        to: route.to.to_string(),
        date,
        modify_url: format!("/?{}", modify.finish()),
        filter: FilterView::new(&filter, &state.listing),
        buses,
    };
    Ok(render(&page)?.into_response())
}

/// Parse the seat map seed. Blank counts as absent.
fn parse_seed(value: Option<&str>) -> Result<Option<u64>, AppError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(v) => v.parse().map(Some).map_err(|_| AppError::BadRequest {
            message: format!("Invalid seed: {v}"),
        }),
    }
}

/// Look up a bus by the id in the URL path.
fn find_bus<'a>(state: &'a AppState, id: &str) -> Result<(BusId, &'a Bus), AppError> {
    BusId::parse(id)
        .ok()
        .and_then(|bus_id| state.fleet.get(&bus_id).map(|bus| (bus_id, bus)))
        .ok_or_else(|| AppError::NotFound {
            message: format!("Bus {id} not found"),
        })
}

/// Generate the seat map for `seed` and replay the selection from the URL.
fn seat_map_for(state: &AppState, bus_id: &BusId, seed: u64, seats: Option<&str>) -> Result<SeatMap, AppError> {
    let selection = parse_seat_list(seats.unwrap_or(""))?;
    let mut map = generate_seat_map(&state.seat_layout, seed);
    let dropped = map.apply_selection(&selection);
    if !dropped.is_empty() {
        debug!(
            bus = %bus_id,
            seed,
            dropped = ?dropped,
            "dropped unavailable seats from selection"
        );
    }
    Ok(map)
}

/// Seat selection page.
///
/// The first visit has no seed; it picks one and redirects, so that every
/// click within the visit sees the same seat map.
async fn seats_page(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Query(req): Query<SeatsRequest>,
) -> Result<Response, PageError> {
    let (bus_id, bus) = find_bus(&state, &id)?;
    let route = RouteQuery::parse(
        req.from.as_deref().unwrap_or(""),
        req.to.as_deref().unwrap_or(""),
        req.date.as_deref().unwrap_or(""),
    )
    .map_err(AppError::from)?;

    let Some(seed) = parse_seed(req.seed.as_deref())? else {
        let seed: u64 = rand::random();
        let selection = parse_seat_list(req.seats.as_deref().unwrap_or("")).map_err(AppError::from)?;
        debug!(bus = %bus_id, seed, "new seat map");
        return Ok(Redirect::to(&route.seats_url(&bus_id, Some(seed), &selection)).into_response());
    };

    let map = seat_map_for(&state, &bus_id, seed, req.seats.as_deref())?;

    let view = |seat: &Seat| SeatView::from_seat(seat, &map, &bus_id, &route, seed);
    let lower = map.seats_in(SeatPosition::LowerBerth).map(view).collect();
    let upper = map.seats_in(SeatPosition::UpperBerth).map(view).collect();
    let seaters = map.seats_in(SeatPosition::Seater).map(view).collect();
    let selected = map.selected_seats().map(view).collect();

    let proceed_url = if map.selected().is_empty() {
        None
    } else {
        let trip = TripQuery {
            route: route.clone(),
            seats: map.selected().to_vec(),
            amount: map.total(),
        };
        Some(trip.payment_url(&bus_id))
    };

    let page = SeatsTemplate {
        header: route.header(),
        bus: BusView::from_bus(bus, &route),
        travel_date: display_date(route.date),
        back_url: route.listing_url(),
        lower,
        upper,
        seaters,
        selected,
        available: map.available_count(),
        total: map.total().to_string(),
        proceed_url,
    };
    Ok(render(&page)?.into_response())
}

fn parse_trip(req: &TripRequest) -> Result<TripQuery, AppError> {
    Ok(TripQuery::parse(
        req.from.as_deref().unwrap_or(""),
        req.to.as_deref().unwrap_or(""),
        req.date.as_deref().unwrap_or(""),
        req.seats.as_deref().unwrap_or(""),
        req.amount.as_deref().unwrap_or(""),
    )?)
}

/// Payment page.
async fn payment_page(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Query(req): Query<TripRequest>,
) -> Result<Html<String>, PageError> {
    let (bus_id, _) = find_bus(&state, &id)?;
    let trip = parse_trip(&req)?;

    let form = PaymentForm {
        method: req
            .method
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or_default(),
        ..PaymentForm::default()
    };
    Ok(render(&PaymentTemplate::new(&bus_id, &trip, &form))?)
}

/// Payment submission.
///
/// An incomplete form comes back pre-filled. A complete one waits out the
/// processing delay and redirects to the confirmation.
async fn submit_payment(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Form(req): Form<PaymentRequest>,
) -> Result<Response, PageError> {
    let (bus_id, _) = find_bus(&state, &id)?;
    let trip = TripQuery::parse(&req.from, &req.to, &req.date, &req.seats, &req.amount)
        .map_err(AppError::from)?;
    let form = req.payment_form();

    match form.validate() {
        Err(incomplete) => {
            debug!(bus = %bus_id, missing = ?incomplete.missing, "payment form incomplete");
            let page = render(&PaymentTemplate::new(&bus_id, &trip, &form))?;
            Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
        }
        Ok(details) => {
            state.payments.process(&bus_id, &trip, &details).await;
            Ok(Redirect::to(&trip.confirmation_url(&bus_id)).into_response())
        }
    }
}

/// Confirmation page with the ticket.
async fn confirmation_page(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Query(req): Query<TripRequest>,
) -> Result<Html<String>, PageError> {
    let (bus_id, bus) = find_bus(&state, &id)?;
    let trip = parse_trip(&req)?;

    let ticket = state.tickets.issue(&bus_id, &trip).await;
    info!(
        bus = %bus_id,
        ticket = %ticket,
        seats = %trip.seats_display(),
        amount = trip.amount.value(),
        "booking confirmed"
    );

    let receipt = Receipt::new(ticket, bus.clone(), trip);
    Ok(render(&ConfirmationTemplate::from_receipt(&receipt))?)
}

/// Listing as JSON. No route is required.
async fn api_listing(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<ListingResponse>, AppError> {
    let req = ListingRequest::from_query(query.as_deref().unwrap_or(""));
    let filter = build_filter(&req, &state.listing)?;

    let buses = filter_buses(state.fleet.buses(), &filter)
        .into_iter()
        .map(BusResult::from_bus)
        .collect();

    Ok(Json(ListingResponse {
        buses,
        total: state.fleet.len(),
    }))
}

/// Seat map as JSON. Without a seed a fresh one is drawn and returned.
async fn api_seats(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Query(req): Query<SeatsRequest>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let (bus_id, _) = find_bus(&state, &id)?;
    let seed = parse_seed(req.seed.as_deref())?.unwrap_or_else(rand::random);
    let map = seat_map_for(&state, &bus_id, seed, req.seats.as_deref())?;

    Ok(Json(SeatMapResponse {
        bus_id,
        seed,
        selected: map.selected().to_vec(),
        total: map.total(),
        available: map.available_count(),
        seats: map.seats().iter().map(SeatResult::from_seat).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });
        (status, body).into_response()
    }
}

/// An [`AppError`] rendered as an HTML error page.
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        PageError(e)
    }
}

impl From<DomainError> for PageError {
    fn from(e: DomainError) -> Self {
        PageError(e.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, message) = self.0.status_and_message();
        warn!(%status, %message, "page request failed");

        let title = match status {
            StatusCode::BAD_REQUEST => "Invalid booking details",
            StatusCode::NOT_FOUND => "Not found",
            _ => "Something went wrong",
        };
        let page = ErrorTemplate {
            title: title.to_string(),
            message: message.to_string(),
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(e) => (status, format!("{message} (template error: {e})")).into_response(),
        }
    }
}
