//! Flight route planner.
//!
//! Answers reachability and routing questions over a fixed set of scheduled
//! flights: time-gated depth-first and breadth-first traversal, direct and
//! one-stop connectivity, minimum-time and minimum-fare routes under a
//! deadline, and enumeration of every direct or one-stop route inside a
//! travel window.
//!
//! Every query is a pure function of an immutable [`RouteGraph`], so a
//! single graph can serve any number of concurrent queries.

mod config;
mod connectivity;
mod graph;
mod optimal;
mod query;
mod traverse;

#[cfg(test)]
mod fixtures;

pub use config::{LayoverRule, QueryConfig};
pub use connectivity::{Connectivity, all_paths, connectivity};
pub use graph::RouteGraph;
pub use optimal::{ByDuration, ByFare, EdgeWeight, OptimalRoute, optimal_route};
pub use query::Planner;
pub use traverse::{breadth_first, depth_first};
