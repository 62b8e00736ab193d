//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{AirportId, Route};
use crate::planner::{Connectivity, OptimalRoute};

/// Query for a traversal from one airport.
#[derive(Debug, Deserialize)]
pub struct TraverseRequest {
    /// Start airport id
    pub airport: u32,

    /// Earliest departure, `M/D/YYYY H:MM`
    pub start: String,
}

/// Query naming an origin and a destination.
#[derive(Debug, Deserialize)]
pub struct PairRequest {
    pub from: u32,
    pub to: u32,
}

/// Query naming an origin, a destination and a travel window.
#[derive(Debug, Deserialize)]
pub struct WindowRequest {
    pub from: u32,
    pub to: u32,

    /// Earliest departure, `M/D/YYYY H:MM`
    pub start: String,

    /// Latest arrival, `M/D/YYYY H:MM`
    pub end: String,
}

/// Airports in visitation order.
#[derive(Debug, Serialize)]
pub struct TraverseResponse {
    pub airports: Vec<u32>,
}

/// Known airports and flight count.
#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    pub airports: Vec<u32>,
    pub flights: usize,
}

/// Result of a connectivity query.
#[derive(Debug, Serialize)]
pub struct ConnectivityResponse {
    pub exists: bool,

    /// Each route as its flight ids
    pub routes: Vec<Vec<u32>>,
}

/// Result of a minimum-time query.
#[derive(Debug, Serialize)]
pub struct FastestResponse {
    pub exists: bool,
    pub flight_ids: Vec<u32>,

    /// Total air time in seconds, when a route exists
    pub total_seconds: Option<i64>,
}

/// Result of a minimum-fare query.
#[derive(Debug, Serialize)]
pub struct CheapestResponse {
    pub exists: bool,
    pub flight_ids: Vec<u32>,

    /// Total fare, when a route exists
    pub total_cost: Option<u64>,
}

/// Every route inside a window.
#[derive(Debug, Serialize)]
pub struct AllPathsResponse {
    pub count: usize,
    pub routes: Vec<Vec<u32>>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

fn route_ids(route: &Route) -> Vec<u32> {
    route.flight_ids().iter().map(|id| id.0).collect()
}

fn airport_ids(airports: &[AirportId]) -> Vec<u32> {
    airports.iter().map(|a| a.0).collect()
}

impl TraverseResponse {
    pub fn from_airports(airports: &[AirportId]) -> Self {
        Self {
            airports: airport_ids(airports),
        }
    }
}

impl AirportsResponse {
    pub fn new(airports: &[AirportId], flights: usize) -> Self {
        Self {
            airports: airport_ids(airports),
            flights,
        }
    }
}

impl From<&Connectivity> for ConnectivityResponse {
    fn from(result: &Connectivity) -> Self {
        Self {
            exists: result.exists(),
            routes: result.routes.iter().map(route_ids).collect(),
        }
    }
}

impl From<Option<OptimalRoute<chrono::Duration>>> for FastestResponse {
    fn from(found: Option<OptimalRoute<chrono::Duration>>) -> Self {
        match found {
            Some(found) => Self {
                exists: true,
                flight_ids: route_ids(&found.route),
                total_seconds: Some(found.total.num_seconds()),
            },
            None => Self {
                exists: false,
                flight_ids: Vec::new(),
                total_seconds: None,
            },
        }
    }
}

impl From<Option<OptimalRoute<u64>>> for CheapestResponse {
    fn from(found: Option<OptimalRoute<u64>>) -> Self {
        match found {
            Some(found) => Self {
                exists: true,
                flight_ids: route_ids(&found.route),
                total_cost: Some(found.total),
            },
            None => Self {
                exists: false,
                flight_ids: Vec::new(),
                total_cost: None,
            },
        }
    }
}

impl From<&[Route]> for AllPathsResponse {
    fn from(routes: &[Route]) -> Self {
        Self {
            count: routes.len(),
            routes: routes.iter().map(route_ids).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightId;
    use chrono::Duration;

    #[test]
    fn fastest_reports_seconds() {
        let found = OptimalRoute {
            route: Route::one_stop(FlightId(1), FlightId(2)),
            total: Duration::minutes(185),
        };
        let response = FastestResponse::from(Some(found));
        assert!(response.exists);
        assert_eq!(response.flight_ids, vec![1, 2]);
        assert_eq!(response.total_seconds, Some(185 * 60));
    }

    #[test]
    fn missing_route_has_no_total() {
        let response = CheapestResponse::from(None);
        assert!(!response.exists);
        assert!(response.flight_ids.is_empty());

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["total_cost"], serde_json::Value::Null);
    }

    #[test]
    fn connectivity_serializes_routes_as_id_lists() {
        let result = Connectivity {
            routes: vec![
                Route::direct(FlightId(3)),
                Route::one_stop(FlightId(1), FlightId(2)),
            ],
        };
        let json = serde_json::to_value(ConnectivityResponse::from(&result)).unwrap();
        assert_eq!(json["exists"], true);
        assert_eq!(json["routes"], serde_json::json!([[3], [1, 2]]));
    }

    #[test]
    fn all_paths_counts_routes() {
        let routes = vec![Route::direct(FlightId(4))];
        let response = AllPathsResponse::from(routes.as_slice());
        assert_eq!(response.count, 1);
        assert_eq!(response.routes, vec![vec![4]]);
    }
}
