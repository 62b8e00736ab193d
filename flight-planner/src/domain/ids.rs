//! Airport and flight identifiers.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} id: {value:?}")]
pub struct InvalidId {
    kind: &'static str,
    value: String,
}

/// An opaque airport identifier.
///
/// # Examples
///
/// ```
/// use flight_planner::domain::AirportId;
///
/// let id: AirportId = "49".parse().unwrap();
/// assert_eq!(id, AirportId(49));
/// assert!("-3".parse::<AirportId>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AirportId(pub u32);

/// An opaque flight identifier, unique within a catalog.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightId(pub u32);

fn parse_id(s: &str, kind: &'static str) -> Result<u32, InvalidId> {
    s.trim().parse().map_err(|_| InvalidId {
        kind,
        value: s.to_string(),
    })
}

impl FromStr for AirportId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(s, "airport").map(AirportId)
    }
}

impl FromStr for FlightId {
    type Err = InvalidId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(s, "flight").map(FlightId)
    }
}

impl fmt::Debug for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirportId({})", self.0)
    }
}

impl fmt::Display for AirportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightId({})", self.0)
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
