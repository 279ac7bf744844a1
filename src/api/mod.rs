//! HTTP API for the payroll engine.
//!
//! This module provides the axum-based HTTP surface: the router, request
//! and response types, and shared application state.

pub mod handlers;
pub mod request;
pub mod response;
pub mod state;

pub use handlers::create_router;
pub use state::AppState;
