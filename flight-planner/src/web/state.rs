//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::{Planner, QueryConfig, RouteGraph};

/// Shared application state.
///
/// The graph is immutable once built, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// Flight graph every query runs against
    pub graph: Arc<RouteGraph>,

    /// Route query configuration
    pub config: Arc<QueryConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: RouteGraph, config: QueryConfig) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
        }
    }

    /// A planner over the shared graph.
    pub fn planner(&self) -> Planner<'_> {
        Planner::new(&self.graph, &self.config)
    }
}
