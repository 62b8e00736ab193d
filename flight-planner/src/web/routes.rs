//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::domain::{AirportId, TimeError, Timestamp};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/airports", get(list_airports))
        .route("/traverse/dfs", get(traverse_dfs))
        .route("/traverse/bfs", get(traverse_bfs))
        .route("/connectivity", get(connectivity))
        .route("/route/fastest", get(fastest_route))
        .route("/route/cheapest", get(cheapest_route))
        .route("/routes/all", get(all_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Every airport in the graph.
async fn list_airports(State(state): State<AppState>) -> Json<AirportsResponse> {
    Json(AirportsResponse::new(
        state.graph.airports(),
        state.graph.flight_count(),
    ))
}

async fn traverse_dfs(
    State(state): State<AppState>,
    query: Result<Query<TraverseRequest>, QueryRejection>,
) -> Result<Json<TraverseResponse>, AppError> {
    let Query(req) = query?;
    let start = parse_timestamp("start", &req.start)?;

    let order = state
        .planner()
        .traverse_depth_first(AirportId(req.airport), start);
    Ok(Json(TraverseResponse::from_airports(&order)))
}

async fn traverse_bfs(
    State(state): State<AppState>,
    query: Result<Query<TraverseRequest>, QueryRejection>,
) -> Result<Json<TraverseResponse>, AppError> {
    let Query(req) = query?;
    let start = parse_timestamp("start", &req.start)?;

    let order = state
        .planner()
        .traverse_breadth_first(AirportId(req.airport), start);
    Ok(Json(TraverseResponse::from_airports(&order)))
}

/// Direct and one-stop routes, ignoring the clock.
async fn connectivity(
    State(state): State<AppState>,
    query: Result<Query<PairRequest>, QueryRejection>,
) -> Result<Json<ConnectivityResponse>, AppError> {
    let Query(req) = query?;

    let result = state
        .planner()
        .connectivity(AirportId(req.from), AirportId(req.to));
    debug!(from = req.from, to = req.to, exists = result.exists(), "Connectivity query");
    Ok(Json(ConnectivityResponse::from(&result)))
}

/// Minimum air time route inside a window.
async fn fastest_route(
    State(state): State<AppState>,
    query: Result<Query<WindowRequest>, QueryRejection>,
) -> Result<Json<FastestResponse>, AppError> {
    let Query(req) = query?;
    let (start, end) = parse_window(&req)?;

    let found = state
        .planner()
        .shortest_path_time(AirportId(req.from), AirportId(req.to), start, end);
    Ok(Json(FastestResponse::from(found)))
}

/// Minimum fare route inside a window.
async fn cheapest_route(
    State(state): State<AppState>,
    query: Result<Query<WindowRequest>, QueryRejection>,
) -> Result<Json<CheapestResponse>, AppError> {
    let Query(req) = query?;
    let (start, end) = parse_window(&req)?;

    let found = state
        .planner()
        .shortest_path_cost(AirportId(req.from), AirportId(req.to), start, end);
    Ok(Json(CheapestResponse::from(found)))
}

/// Every direct and one-stop route inside a window.
async fn all_routes(
    State(state): State<AppState>,
    query: Result<Query<WindowRequest>, QueryRejection>,
) -> Result<Json<AllPathsResponse>, AppError> {
    let Query(req) = query?;
    let (start, end) = parse_window(&req)?;

    let routes = state
        .planner()
        .all_paths(AirportId(req.from), AirportId(req.to), start, end);
    Ok(Json(AllPathsResponse::from(routes.as_slice())))
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<Timestamp, AppError> {
    Timestamp::parse(value).map_err(|source| AppError::InvalidTimestamp { field, source })
}

fn parse_window(req: &WindowRequest) -> Result<(Timestamp, Timestamp), AppError> {
    Ok((
        parse_timestamp("start", &req.start)?,
        parse_timestamp("end", &req.end)?,
    ))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid query: {0}")]
    BadQuery(String),

    #[error("invalid {field}: {source}")]
    InvalidTimestamp {
        field: &'static str,
        #[source]
        source: TimeError,
    },
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadQuery(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::BAD_REQUEST;
        let message = self.to_string();

        warn!(%status, error = %message, "Rejected request");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
