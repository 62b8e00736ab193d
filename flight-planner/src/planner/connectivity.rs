//! Direct and one-stop route search.
//!
//! Two related queries. [`connectivity`] asks whether any direct or one-stop
//! itinerary exists at all, ignoring the clock except for the transfer
//! itself. [`all_paths`] enumerates the itineraries that fit inside a travel
//! window, checking both legs against it.
//!
//! For connectivity, an itinerary from an airport back to itself only counts
//! as a single flight that departs and lands there. The windowed enumeration
//! has no such exclusion: a round trip through another airport that fits the
//! window is returned like any other one-stop pair.

use tracing::debug;

use crate::domain::{AirportId, Route, Timestamp};

use super::config::LayoverRule;
use super::graph::RouteGraph;

/// Result of a connectivity query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connectivity {
    /// Every qualifying route: direct flights first, then one-stop pairs,
    /// each in graph order.
    pub routes: Vec<Route>,
}

impl Connectivity {
    /// Returns true if at least one route qualifies.
    pub fn exists(&self) -> bool {
        !self.routes.is_empty()
    }
}

/// Find every direct and one-stop route from `origin` to `destination`.
///
/// Any direct flight qualifies regardless of time. A pair qualifies when the
/// second flight leaves the transfer airport in time under `layover`.
pub fn connectivity(
    graph: &RouteGraph,
    origin: AirportId,
    destination: AirportId,
    layover: LayoverRule,
) -> Connectivity {
    let outbound = graph.flights_from(origin);
    let mut routes: Vec<Route> = outbound
        .iter()
        .filter(|f| f.arrival_airport == destination)
        .map(|f| Route::direct(f.id))
        .collect();

    if origin != destination {
        for first in outbound {
            for second in graph.flights_from(first.arrival_airport) {
                if second.arrival_airport == destination
                    && layover.allows(first.arrival, second.departure)
                {
                    routes.push(Route::one_stop(first.id, second.id));
                }
            }
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        routes = routes.len(),
        "Connectivity search complete"
    );

    Connectivity { routes }
}

/// Enumerate direct and one-stop routes inside the window `[start, end]`.
///
/// Every route's first flight departs at or after `start` and its last
/// flight lands at or before `end`. A connection may depart at the same
/// minute the first flight lands.
pub fn all_paths(
    graph: &RouteGraph,
    origin: AirportId,
    destination: AirportId,
    start: Timestamp,
    end: Timestamp,
) -> Vec<Route> {
    let outbound = graph.departures_after(origin, start);

    let mut routes: Vec<Route> = outbound
        .iter()
        .filter(|f| f.arrival_airport == destination && f.within(start, end))
        .map(|f| Route::direct(f.id))
        .collect();

    for first in outbound {
        // The connection lands after the first flight does.
        if first.arrival > end {
            continue;
        }
        for second in graph.departures_after(first.arrival_airport, first.arrival) {
            if second.arrival_airport == destination && second.arrival <= end {
                routes.push(Route::one_stop(first.id, second.id));
            }
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        routes = routes.len(),
        "All-paths enumeration complete"
    );

    routes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightId;
    use crate::planner::fixtures::{at, flight, graph};

    fn routes(list: &[Route]) -> Vec<String> {
        list.iter().map(|r| r.to_string()).collect()
    }

    #[test]
    fn one_stop_scenario() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "09:00", 100),
            flight(2, 2, 3, "10:00", "11:00", 50),
        ]);

        let result = connectivity(&g, AirportId(1), AirportId(3), LayoverRule::default());
        assert!(result.exists());
        assert_eq!(routes(&result.routes), vec!["1 2"]);
    }

    #[test]
    fn direct_flights_ignore_time() {
        let g = graph(vec![
            flight(1, 1, 2, "1/1/2017 8:00", "1/1/2017 9:00", 100),
            flight(2, 1, 2, "12/31/2017 8:00", "12/31/2017 9:00", 100),
        ]);

        let result = connectivity(&g, AirportId(1), AirportId(2), LayoverRule::default());
        assert_eq!(routes(&result.routes), vec!["1", "2"]);
    }

    #[test]
    fn directs_come_before_one_stops() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "09:00", 100),
            flight(2, 2, 3, "10:00", "11:00", 100),
            flight(3, 1, 3, "12:00", "14:00", 100),
        ]);

        let result = connectivity(&g, AirportId(1), AirportId(3), LayoverRule::default());
        assert_eq!(routes(&result.routes), vec!["3", "1 2"]);
    }

    #[test]
    fn missed_connection_does_not_count() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "10:00", 100),
            flight(2, 2, 3, "09:00", "11:00", 100),
        ]);

        let result = connectivity(&g, AirportId(1), AirportId(3), LayoverRule::default());
        assert!(!result.exists());
        assert!(result.routes.is_empty());
    }

    #[test]
    fn all_qualifying_pairs_are_collected() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "09:00", 100),
            flight(2, 1, 4, "08:30", "09:30", 100),
            flight(3, 2, 3, "10:00", "11:00", 100),
            flight(4, 2, 3, "12:00", "13:00", 100),
            flight(5, 4, 3, "10:00", "11:00", 100),
        ]);

        let result = connectivity(&g, AirportId(1), AirportId(3), LayoverRule::default());
        assert_eq!(routes(&result.routes), vec!["1 3", "1 4", "2 5"]);
    }

    #[test]
    fn zero_minute_layover_depends_on_rule() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "09:00", 100),
            flight(2, 2, 3, "09:00", "10:00", 100),
        ]);

        let inclusive = connectivity(&g, AirportId(1), AirportId(3), LayoverRule::AtOrAfterArrival);
        assert_eq!(routes(&inclusive.routes), vec!["1 2"]);

        let strict =
            connectivity(&g, AirportId(1), AirportId(3), LayoverRule::StrictlyAfterArrival);
        assert!(!strict.exists());
    }

    #[test]
    fn round_trip_is_not_a_route_to_self() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "09:00", 100),
            flight(2, 2, 1, "10:00", "11:00", 100),
        ]);

        let result = connectivity(&g, AirportId(1), AirportId(1), LayoverRule::default());
        assert!(!result.exists());
    }

    #[test]
    fn self_loop_is_a_route_to_self() {
        let g = graph(vec![flight(1, 1, 1, "08:00", "09:00", 100)]);

        let result = connectivity(&g, AirportId(1), AirportId(1), LayoverRule::default());
        assert_eq!(routes(&result.routes), vec!["1"]);
    }

    #[test]
    fn unknown_airports_have_no_routes() {
        let g = graph(vec![flight(1, 1, 2, "08:00", "09:00", 100)]);

        assert!(!connectivity(&g, AirportId(9), AirportId(2), LayoverRule::default()).exists());
        assert!(!connectivity(&g, AirportId(1), AirportId(9), LayoverRule::default()).exists());
    }

    #[test]
    fn all_paths_enforces_window_on_both_legs() {
        let g = graph(vec![
            flight(1, 1, 3, "07:00", "09:00", 100), // departs before window
            flight(2, 1, 3, "08:00", "10:00", 100),
            flight(3, 1, 3, "11:00", "13:00", 100), // lands after window
            flight(4, 1, 2, "08:00", "09:00", 100),
            flight(5, 2, 3, "09:30", "11:00", 100),
            flight(6, 2, 3, "11:00", "12:30", 100), // lands after window
            flight(7, 1, 2, "06:00", "07:00", 100), // departs before window
            flight(8, 2, 3, "07:30", "08:30", 100),
        ]);

        let result = all_paths(&g, AirportId(1), AirportId(3), at("08:00"), at("12:00"));
        assert_eq!(routes(&result), vec!["2", "4 5"]);
    }

    #[test]
    fn all_paths_window_is_inclusive() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "09:00", 100),
            flight(2, 2, 3, "09:00", "10:00", 100),
        ]);

        let result = all_paths(&g, AirportId(1), AirportId(3), at("08:00"), at("10:00"));
        assert_eq!(routes(&result), vec!["1 2"]);

        let result = all_paths(&g, AirportId(1), AirportId(3), at("08:00"), at("09:59"));
        assert!(result.is_empty());

        let result = all_paths(&g, AirportId(1), AirportId(3), at("08:01"), at("10:00"));
        assert!(result.is_empty());
    }

    #[test]
    fn all_paths_needs_feasible_transfer() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "10:00", 100),
            flight(2, 2, 3, "09:00", "11:00", 100),
        ]);

        assert!(all_paths(&g, AirportId(1), AirportId(3), at("00:00"), at("23:00")).is_empty());
    }

    #[test]
    fn all_paths_unknown_origin_is_empty() {
        let g = graph(vec![flight(1, 1, 2, "08:00", "09:00", 100)]);
        assert!(all_paths(&g, AirportId(7), AirportId(2), at("00:00"), at("23:00")).is_empty());
    }

    #[test]
    fn all_paths_includes_round_trips() {
        let g = graph(vec![
            flight(1, 1, 2, "08:00", "09:00", 100),
            flight(2, 2, 1, "10:00", "11:00", 100),
            flight(3, 2, 1, "11:30", "12:30", 100), // lands after window
        ]);

        let result = all_paths(&g, AirportId(1), AirportId(1), at("07:00"), at("12:00"));
        assert_eq!(result, vec![Route::one_stop(FlightId(1), FlightId(2))]);
    }

    #[test]
    fn all_paths_inverted_window_is_empty() {
        let g = graph(vec![flight(1, 1, 2, "08:00", "09:00", 100)]);
        assert!(all_paths(&g, AirportId(1), AirportId(2), at("12:00"), at("06:00")).is_empty());
    }
}
