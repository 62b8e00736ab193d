//! Query front end over a route graph.

use chrono::Duration;

use crate::domain::{AirportId, Route, Timestamp};

use super::config::QueryConfig;
use super::connectivity::{self, Connectivity};
use super::graph::RouteGraph;
use super::optimal::{self, ByDuration, ByFare, OptimalRoute};
use super::traverse;

/// Route planner bound to a graph and a query configuration.
///
/// Cheap to construct; holds only borrows, so one per request is fine.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    config: &'a QueryConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(graph: &'a RouteGraph, config: &'a QueryConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &RouteGraph {
        self.graph
    }

    /// Airports reachable from `start`, depth-first.
    pub fn traverse_depth_first(&self, start: AirportId, start_time: Timestamp) -> Vec<AirportId> {
        traverse::depth_first(self.graph, start, start_time)
    }

    /// Airports reachable from `start`, breadth-first.
    pub fn traverse_breadth_first(
        &self,
        start: AirportId,
        start_time: Timestamp,
    ) -> Vec<AirportId> {
        traverse::breadth_first(self.graph, start, start_time)
    }

    /// Direct and one-stop routes, under the configured layover rule.
    pub fn connectivity(&self, origin: AirportId, destination: AirportId) -> Connectivity {
        connectivity::connectivity(self.graph, origin, destination, self.config.layover)
    }

    /// Route with the least total air time inside the window.
    pub fn shortest_path_time(
        &self,
        origin: AirportId,
        destination: AirportId,
        start: Timestamp,
        end: Timestamp,
    ) -> Option<OptimalRoute<Duration>> {
        optimal::optimal_route(self.graph, origin, destination, start, end, &ByDuration)
    }

    /// Route with the lowest total fare inside the window.
    pub fn shortest_path_cost(
        &self,
        origin: AirportId,
        destination: AirportId,
        start: Timestamp,
        end: Timestamp,
    ) -> Option<OptimalRoute<u64>> {
        optimal::optimal_route(self.graph, origin, destination, start, end, &ByFare)
    }

    /// Direct and one-stop routes inside the window.
    pub fn all_paths(
        &self,
        origin: AirportId,
        destination: AirportId,
        start: Timestamp,
        end: Timestamp,
    ) -> Vec<Route> {
        connectivity::all_paths(self.graph, origin, destination, start, end)
    }
}
