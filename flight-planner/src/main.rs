use std::error::Error;
use std::io;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use flight_planner::catalog::FlightCatalog;
use flight_planner::config::{AppConfig, Mode};
use flight_planner::console;
use flight_planner::planner::{Planner, RouteGraph};
use flight_planner::web::{AppState, create_router};

fn main() -> ExitCode {
    // Logs go to stderr so console results on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Flight planner failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?.with_args(std::env::args().skip(1))?;

    let report = FlightCatalog::from_path(&config.data_path)?;

    let graph = RouteGraph::from(&report.catalog);
    info!(
        path = %config.data_path.display(),
        airports = graph.airport_count(),
        flights = graph.flight_count(),
        rejected = report.rejected.len(),
        "Route graph ready"
    );

    match config.mode {
        Mode::Console => {
            let planner = Planner::new(&graph, &config.query);
            console::run(&planner, io::stdin().lock(), io::stdout().lock())?;
        }
        Mode::Server => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(serve(graph, &config))?;
        }
    }

    Ok(())
}

async fn serve(graph: RouteGraph, config: &AppConfig) -> io::Result<()> {
    let app = create_router(AppState::new(graph, config.query.clone()));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %config.addr, "Flight planner listening");
    info!("API endpoints: /health /airports /traverse/dfs /traverse/bfs /connectivity /route/fastest /route/cheapest /routes/all");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
