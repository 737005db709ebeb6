//! HTTP API module for the tool rental engine.
//!
//! This module provides the REST endpoints for checking out tools and
//! refreshing the tool catalog.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::{ApiError, ApiResponse};
pub use state::AppState;
