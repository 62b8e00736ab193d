//! Web layer for the flight route planner.
//!
//! Provides JSON endpoints for traversals and route queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
