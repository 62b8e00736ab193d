//! Minimum-time and minimum-fare route search.
//!
//! One label-setting search, generic over the edge weight. A label records
//! how a traveller reached an airport: the accumulated metric, the time they
//! are available to leave, and the flight that brought them there. Because
//! an airport reached later but cheaper may still make a connection that an
//! earlier arrival misses (or the reverse), each airport keeps every label
//! not dominated by another on both metric and available time.
//!
//! Labels are popped in ascending metric order, ties in discovery order, and
//! the search stops at the first label popped at the destination. Weights are
//! never negative, so that label is optimal.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::ops::Add;

use chrono::Duration;
use tracing::debug;

use crate::domain::{AirportId, Flight, FlightId, Route, Timestamp};

use super::graph::{AirportIdx, RouteGraph};

/// Cost of taking a single flight.
pub trait EdgeWeight {
    /// Accumulated cost of a route.
    type Metric: Copy + Ord + Add<Output = Self::Metric> + fmt::Debug;

    /// Cost of the empty route.
    fn zero(&self) -> Self::Metric;

    /// Cost of one flight. Never negative.
    fn weight(&self, flight: &Flight) -> Self::Metric;
}

/// Weight a flight by its time in the air.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByDuration;

impl EdgeWeight for ByDuration {
    type Metric = Duration;

    fn zero(&self) -> Duration {
        Duration::zero()
    }

    fn weight(&self, flight: &Flight) -> Duration {
        flight.duration()
    }
}

/// Weight a flight by its fare.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByFare;

impl EdgeWeight for ByFare {
    type Metric = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn weight(&self, flight: &Flight) -> u64 {
        u64::from(flight.fare)
    }
}

/// An optimal route and its total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimalRoute<M> {
    pub route: Route,
    pub total: M,
}

#[derive(Debug)]
struct Label<M> {
    airport: AirportIdx,
    metric: M,
    available: Timestamp,
    /// Predecessor label and the flight taken from it.
    parent: Option<(usize, FlightId)>,
    /// Cleared when a later label at the same airport dominates this one.
    live: bool,
}

impl<M: Ord> Label<M> {
    fn dominates(&self, metric: &M, available: Timestamp) -> bool {
        self.metric <= *metric && self.available <= available
    }
}

/// Find a route from `origin` to `destination` minimising `weight`.
///
/// Every flight on the route departs at or after `start` (and after the
/// previous flight lands) and lands at or before `end`. Returns `None` when
/// no such route exists. A route from an airport to itself is the empty
/// route at zero cost, whatever the window.
pub fn optimal_route<W: EdgeWeight>(
    graph: &RouteGraph,
    origin: AirportId,
    destination: AirportId,
    start: Timestamp,
    end: Timestamp,
    weight: &W,
) -> Option<OptimalRoute<W::Metric>> {
    if origin == destination {
        return Some(OptimalRoute {
            route: Route::empty(),
            total: weight.zero(),
        });
    }

    let origin_idx = graph.index_of(origin)?;
    let destination_idx = graph.index_of(destination)?;

    let mut labels: Vec<Label<W::Metric>> = vec![Label {
        airport: origin_idx,
        metric: weight.zero(),
        available: start,
        parent: None,
        live: true,
    }];
    let mut frontier: Vec<Vec<usize>> = vec![Vec::new(); graph.airport_count()];
    frontier[origin_idx].push(0);

    let mut heap = BinaryHeap::from([Reverse((weight.zero(), 0usize))]);
    let mut popped = 0usize;

    while let Some(Reverse((metric, current))) = heap.pop() {
        if !labels[current].live {
            continue;
        }
        popped += 1;

        let airport = labels[current].airport;
        if airport == destination_idx {
            debug!(
                origin = %origin,
                destination = %destination,
                labels = labels.len(),
                popped,
                total = ?metric,
                "Optimal route found"
            );
            return Some(OptimalRoute {
                route: trace_back(&labels, current),
                total: metric,
            });
        }

        let available = labels[current].available;
        for flight in graph.departures_at_after(airport, available) {
            if flight.arrival > end {
                continue;
            }
            let Some(to) = graph.index_of(flight.arrival_airport) else {
                continue;
            };

            let candidate = metric + weight.weight(flight);
            let arrival = flight.arrival;

            if frontier[to]
                .iter()
                .any(|&idx| labels[idx].dominates(&candidate, arrival))
            {
                continue;
            }

            frontier[to].retain(|&idx| {
                let keep = !(candidate <= labels[idx].metric && arrival <= labels[idx].available);
                if !keep {
                    labels[idx].live = false;
                }
                keep
            });

            let idx = labels.len();
            labels.push(Label {
                airport: to,
                metric: candidate,
                available: arrival,
                parent: Some((current, flight.id)),
                live: true,
            });
            frontier[to].push(idx);
            heap.push(Reverse((candidate, idx)));
        }
    }

    debug!(
        origin = %origin,
        destination = %destination,
        labels = labels.len(),
        popped,
        "No route within window"
    );
    None
}

fn trace_back<M>(labels: &[Label<M>], mut current: usize) -> Route {
    let mut flights = Vec::new();
    while let Some((parent, flight)) = labels[current].parent {
        flights.push(flight);
        current = parent;
    }
    flights.reverse();
    Route::from(flights)
}
