//! HTTP API module for the tool rental engine.
//!
//! This module provides the REST endpoints for listing the tool catalog
//! and checking tools out.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequest;
pub use response::ApiError;
pub use state::AppState;
