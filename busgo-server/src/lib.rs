//! Bus ticket booking demo server.
//!
//! A web application that walks a visitor through booking a bus seat:
//! search a route, pick a bus, pick seats, pay (simulated), and get a
//! ticket. All booking state travels in the URL.

pub mod booking;
pub mod config;
pub mod domain;
pub mod fleet;
pub mod listing;
pub mod seating;
pub mod web;
