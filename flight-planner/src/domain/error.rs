//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from ingestion and I/O errors.

use super::{FlightId, Timestamp};

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A flight must land strictly after it takes off
    #[error("flight {flight} arrives at {arrival}, not after its departure at {departure}")]
    ArrivalNotAfterDeparture {
        flight: FlightId,
        departure: Timestamp,
        arrival: Timestamp,
    },
}
