//! Itineraries as flight-id sequences.

use std::fmt;

use super::FlightId;

/// An itinerary: the flights taken, in order.
///
/// An empty route is valid and means "already there".
///
/// # Examples
///
/// ```
/// use flight_planner::domain::{FlightId, Route};
///
/// let route = Route::one_stop(FlightId(1), FlightId(2));
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.to_string(), "1 2");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Route(Vec<FlightId>);

impl Route {
    /// The empty route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single direct flight.
    pub fn direct(flight: FlightId) -> Self {
        Self(vec![flight])
    }

    /// Two flights with one connection between them.
    pub fn one_stop(first: FlightId, second: FlightId) -> Self {
        Self(vec![first, second])
    }

    /// The flights in travel order.
    pub fn flight_ids(&self) -> &[FlightId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<FlightId>> for Route {
    fn from(flights: Vec<FlightId>) -> Self {
        Self(flights)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
