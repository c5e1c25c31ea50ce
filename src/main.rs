// Main entry point - Dependency injection and server setup
use std::{sync::Arc, time::Duration};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use employee_dashboard::application::dashboard_service::DashboardService;
use employee_dashboard::application::employee_source::EmployeeSource;
use employee_dashboard::infrastructure::config::{load_dashboard_config, DataSettings, SourceKind};
use employee_dashboard::infrastructure::file_source::JsonFileSource;
use employee_dashboard::infrastructure::http_source::HttpSource;
use employee_dashboard::presentation::app_state::AppState;
use employee_dashboard::presentation::handlers::{
    get_active_chart, get_dashboard, get_statistics, health_check, preview_chart, select_chart,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create data source (infrastructure layer)
    let source = build_source(&config.data)?;

    // Create service and run the single data load (application layer)
    let dashboard_service = DashboardService::new(source);
    if dashboard_service.load().await.is_err() {
        tracing::warn!("Serving an empty dashboard");
    }

    let state = Arc::new(AppState { dashboard_service });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/statistics", get(get_statistics))
        .route("/dashboard/chart", get(get_active_chart))
        .route("/dashboard/chart/:kind", post(select_chart))
        .route("/charts/:kind", get(preview_chart))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server.socket_addr()?;
    tracing::info!("Starting employee-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

fn build_source(data: &DataSettings) -> anyhow::Result<Arc<dyn EmployeeSource>> {
    let source: Arc<dyn EmployeeSource> = match data.source {
        SourceKind::File => Arc::new(JsonFileSource::new(data.path.clone())),
        SourceKind::Http => {
            let url = data
                .url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("data.url is not set"))?;
            Arc::new(HttpSource::new(url, Duration::from_secs(data.timeout_secs))?)
        }
    };

    Ok(source)
}
