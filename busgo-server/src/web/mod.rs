//! Web layer for the bus booking flow.
//!
//! Provides the HTML screens (search, listing, seats, payment,
//! confirmation) and a small JSON API over the same data.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use templates::*;
