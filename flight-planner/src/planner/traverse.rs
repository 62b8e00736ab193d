//! Time-gated depth-first and breadth-first traversal.
//!
//! A flight is usable from an airport only if it departs at or after the
//! traveller's available time there: the query start time at the start
//! airport, or the arrival time of the flight that reached the airport.
//! Only reachability order is reported; no paths or costs are tracked.

use std::collections::VecDeque;
use std::slice;

use tracing::trace;

use crate::domain::{AirportId, Flight, Timestamp};

use super::graph::{AirportIdx, RouteGraph};

/// Airports in pre-order depth-first visitation order.
///
/// The start airport comes first; every other airport appears at most once,
/// at the position of its first visit. The walk uses an explicit stack of
/// flight iterators, so arbitrarily deep graphs cannot overflow the call
/// stack, but the order is the same as the recursive formulation: recurse
/// into the first unvisited eligible destination before looking at the next
/// sibling flight.
pub fn depth_first(graph: &RouteGraph, start: AirportId, start_time: Timestamp) -> Vec<AirportId> {
    let mut order = vec![start];
    let Some(start_idx) = graph.index_of(start) else {
        return order;
    };

    let mut visited = vec![false; graph.airport_count()];
    visited[start_idx] = true;

    let mut stack: Vec<slice::Iter<'_, Flight>> =
        vec![graph.departures_at_after(start_idx, start_time).iter()];

    while let Some(flights) = stack.last_mut() {
        let next = flights.find_map(|flight| {
            let to = graph.index_of(flight.arrival_airport)?;
            (!visited[to]).then_some((to, flight.arrival))
        });

        match next {
            Some((to, available)) => {
                visited[to] = true;
                order.push(graph.airport_at(to));
                trace!(airport = %graph.airport_at(to), depth = stack.len(), "DFS visiting airport");
                stack.push(graph.departures_at_after(to, available).iter());
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Airports in breadth-first visitation order.
///
/// Airports are marked visited when enqueued, so each appears once. Within
/// a layer, order follows the expanding airports' order and then their
/// flight order.
pub fn breadth_first(
    graph: &RouteGraph,
    start: AirportId,
    start_time: Timestamp,
) -> Vec<AirportId> {
    let mut order = vec![start];
    let Some(start_idx) = graph.index_of(start) else {
        return order;
    };

    let mut visited = vec![false; graph.airport_count()];
    visited[start_idx] = true;

    let mut queue: VecDeque<(AirportIdx, Timestamp)> = VecDeque::from([(start_idx, start_time)]);

    while let Some((current, available)) = queue.pop_front() {
        for flight in graph.departures_at_after(current, available) {
            let Some(to) = graph.index_of(flight.arrival_airport) else {
                continue;
            };
            if visited[to] {
                continue;
            }
            visited[to] = true;
            order.push(flight.arrival_airport);
            queue.push_back((to, flight.arrival));
        }
    }

    order
}
