//! Domain types for the flight route planner.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod flight;
mod ids;
mod route;
mod time;

pub use error::DomainError;
pub use flight::{Flight, FlightDetails, InvalidMarket, Market};
pub use ids::{AirportId, FlightId, InvalidId};
pub use route::Route;
pub use time::{TimeError, Timestamp};
