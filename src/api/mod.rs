use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use url::Url;

use crate::core::Dispatcher;
use crate::dashboard::{self, DashboardData};
use crate::report::Report;
use crate::stats::DispatchStats;

pub const DISPATCH_MESSAGE: &str = "Triggered all upstream targets";

#[derive(Clone)]
pub struct AppState {
    dispatcher: Arc<Dispatcher>,
    targets: Arc<Vec<Url>>,
}

impl AppState {
    pub fn new(dispatcher: Arc<Dispatcher>, targets: Vec<Url>) -> Self {
        Self {
            dispatcher,
            targets: Arc::new(targets),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RunAllResponse {
    pub message: String,
    pub results: Report,
}

/// The dashboard view runs in a browser on another origin, hence the
/// permissive CORS layer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/run-all", get(run_all))
        .route("/api/dashboard", get(dashboard_data))
        .route("/api/stats", get(stats))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Kick every configured upstream once and report what came back. Always
/// answers 200: per-target failures are data inside the report, not endpoint
/// errors.
async fn run_all(State(state): State<AppState>) -> Json<RunAllResponse> {
    let results = state.dispatcher.run(&state.targets).await;
    Json(RunAllResponse {
        message: DISPATCH_MESSAGE.to_string(),
        results,
    })
}

async fn dashboard_data() -> Json<DashboardData> {
    Json(dashboard::sample_data())
}

async fn stats(State(state): State<AppState>) -> Json<DispatchStats> {
    Json(state.dispatcher.stats().snapshot())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
