//! Shared builders for planner tests.

use chrono::Duration;
use proptest::prelude::*;

use crate::domain::{AirportId, Flight, FlightId, Timestamp};

use super::RouteGraph;

/// A timestamp on 5/5/2017, or a full `M/D/YYYY H:MM` string.
pub fn at(s: &str) -> Timestamp {
    if s.contains('/') {
        Timestamp::parse(s).unwrap()
    } else {
        Timestamp::parse(&format!("5/5/2017 {s}")).unwrap()
    }
}

pub fn flight(id: u32, from: u32, to: u32, dep: &str, arr: &str, fare: u32) -> Flight {
    Flight::new(
        FlightId(id),
        AirportId(from),
        AirportId(to),
        at(dep),
        at(arr),
        fare,
    )
    .unwrap()
}

pub fn graph(flights: Vec<Flight>) -> RouteGraph {
    RouteGraph::new(flights)
}

pub fn ids(flights: &[FlightId]) -> Vec<u32> {
    flights.iter().map(|f| f.0).collect()
}

pub fn airports(airports: &[AirportId]) -> Vec<u32> {
    airports.iter().map(|a| a.0).collect()
}

/// Small random catalogs over airports 0..5 within one day.
///
/// Flight ids are the list positions, so they are unique.
pub fn arb_flights(max_len: usize) -> impl Strategy<Value = Vec<Flight>> {
    prop::collection::vec(
        (0u32..5, 0u32..5, 0i64..600, 1i64..240, 0u32..500),
        0..=max_len,
    )
    .prop_map(|specs| {
        let base = at("06:00");
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (from, to, dep, dur, fare))| {
                let departure = base.checked_add(Duration::minutes(dep)).unwrap();
                let arrival = departure.checked_add(Duration::minutes(dur)).unwrap();
                Flight::new(
                    FlightId(i as u32),
                    AirportId(from),
                    AirportId(to),
                    departure,
                    arrival,
                    fare,
                )
                .unwrap()
            })
            .collect()
    })
}

/// Minutes after 06:00 on the fixture day.
pub fn minutes_after_base(mins: i64) -> Timestamp {
    at("06:00").checked_add(Duration::minutes(mins)).unwrap()
}
