// HTTP request handlers
use crate::domain::chart::ChartKind;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard: grid columns and rows, statistics, selectors and the active chart
pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let snapshot = state.dashboard_service.snapshot().await;
    into_response(json_response(&snapshot, accepts_brotli(&headers)).await)
}

pub async fn get_statistics(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let statistics = state.dashboard_service.statistics().await;
    into_response(json_response(&statistics, accepts_brotli(&headers)).await)
}

pub async fn get_active_chart(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let chart = state.dashboard_service.active_chart().await;
    into_response(json_response(&chart, accepts_brotli(&headers)).await)
}

/// Switch the active chart. Unknown kinds fall back to bar.
pub async fn select_chart(
    Path(kind): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let chart = state
        .dashboard_service
        .select_chart(ChartKind::from_name(&kind))
        .await;
    into_response(json_response(&chart, accepts_brotli(&headers)).await)
}

/// Build a chart of the given kind without touching the selection
pub async fn preview_chart(
    Path(kind): Path<String>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let chart = state
        .dashboard_service
        .preview_chart(ChartKind::from_name(&kind))
        .await;
    into_response(json_response(&chart, accepts_brotli(&headers)).await)
}

fn into_response(
    result: Result<axum::response::Response, axum::http::StatusCode>,
) -> axum::response::Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
