//! Flight records.

use std::fmt;

use chrono::Duration;

use super::{AirportId, DomainError, FlightId, Timestamp};

/// Error returned when parsing an invalid market code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid market code: {0:?} (expected Dome or Intl)")]
pub struct InvalidMarket(String);

/// Whether a flight is domestic or international.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Market {
    Domestic,
    International,
}

impl Market {
    /// Parse the catalog's `Dome`/`Intl` column, ignoring case.
    pub fn parse(s: &str) -> Result<Self, InvalidMarket> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("dome") {
            Ok(Market::Domestic)
        } else if s.eq_ignore_ascii_case("intl") {
            Ok(Market::International)
        } else {
            Err(InvalidMarket(s.to_string()))
        }
    }

    /// The catalog code for this market.
    pub fn code(&self) -> &'static str {
        match self {
            Market::Domestic => "Dome",
            Market::International => "Intl",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Descriptive metadata carried by catalog rows.
///
/// None of it affects routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightDetails {
    /// Departure date as written in the catalog.
    pub departure_date: String,
    pub market: Market,
    /// Marketing flight number, e.g. "CA1234".
    pub flight_number: String,
    pub aircraft_id: u32,
    pub aircraft_model: String,
}

/// A scheduled flight: one edge of the route graph.
///
/// Arrival is always strictly after departure; [`Flight::new`] enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub id: FlightId,
    pub departure_airport: AirportId,
    pub arrival_airport: AirportId,
    pub departure: Timestamp,
    pub arrival: Timestamp,
    pub fare: u32,
    pub details: Option<FlightDetails>,
}

impl Flight {
    /// Create a flight, rejecting schedules that do not move forward in time.
    pub fn new(
        id: FlightId,
        departure_airport: AirportId,
        arrival_airport: AirportId,
        departure: Timestamp,
        arrival: Timestamp,
        fare: u32,
    ) -> Result<Self, DomainError> {
        if arrival <= departure {
            return Err(DomainError::ArrivalNotAfterDeparture {
                flight: id,
                departure,
                arrival,
            });
        }

        Ok(Self {
            id,
            departure_airport,
            arrival_airport,
            departure,
            arrival,
            fare,
            details: None,
        })
    }

    /// Attach catalog metadata.
    pub fn with_details(mut self, details: FlightDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Time in the air.
    pub fn duration(&self) -> Duration {
        self.arrival.signed_duration_since(self.departure)
    }

    /// Returns true if this flight departs and arrives within `[start, end]`.
    pub fn within(&self, start: Timestamp, end: Timestamp) -> bool {
        self.departure >= start && self.arrival <= end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn flight(dep: &str, arr: &str) -> Result<Flight, DomainError> {
        Flight::new(FlightId(1), AirportId(10), AirportId(20), ts(dep), ts(arr), 300)
    }

    #[test]
    fn new_valid_flight() {
        let f = flight("5/5/2017 10:00", "5/5/2017 12:30").unwrap();
        assert_eq!(f.duration(), Duration::minutes(150));
        assert!(f.details.is_none());
    }

    #[test]
    fn reject_arrival_before_departure() {
        let err = flight("5/5/2017 12:00", "5/5/2017 10:00").unwrap_err();
        assert!(matches!(
            err,
            DomainError::ArrivalNotAfterDeparture { flight: FlightId(1), .. }
        ));
    }

    #[test]
    fn reject_zero_duration() {
        assert!(flight("5/5/2017 12:00", "5/5/2017 12:00").is_err());
    }

    #[test]
    fn overnight_flight() {
        let f = flight("5/5/2017 23:00", "5/6/2017 2:00").unwrap();
        assert_eq!(f.duration(), Duration::hours(3));
    }

    #[test]
    fn within_window() {
        let f = flight("5/5/2017 10:00", "5/5/2017 12:00").unwrap();
        assert!(f.within(ts("5/5/2017 10:00"), ts("5/5/2017 12:00")));
        assert!(f.within(ts("5/5/2017 9:00"), ts("5/5/2017 13:00")));
        assert!(!f.within(ts("5/5/2017 10:01"), ts("5/5/2017 13:00")));
        assert!(!f.within(ts("5/5/2017 9:00"), ts("5/5/2017 11:59")));
    }

    #[test]
    fn market_codes() {
        assert_eq!(Market::parse("Dome").unwrap(), Market::Domestic);
        assert_eq!(Market::parse("INTL").unwrap(), Market::International);
        assert_eq!(Market::parse(" intl ").unwrap(), Market::International);
        assert!(Market::parse("Regional").is_err());
        assert_eq!(Market::Domestic.to_string(), "Dome");
    }

    #[test]
    fn with_details() {
        let details = FlightDetails {
            departure_date: "5/5/2017".to_string(),
            market: Market::Domestic,
            flight_number: "CA1234".to_string(),
            aircraft_id: 77,
            aircraft_model: "737".to_string(),
        };
        let f = flight("5/5/2017 10:00", "5/5/2017 12:30")
            .unwrap()
            .with_details(details.clone());
        assert_eq!(f.details, Some(details));
    }
}
