//! Prometheus metrics infrastructure

use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::config::MetricsConfig;

/// Prometheus metrics handle for serving metrics endpoint
#[derive(Clone)]
pub struct PrometheusMetrics {
    handle: Arc<PrometheusHandle>,
}

impl PrometheusMetrics {
    /// Get the metrics as a string for the /metrics endpoint
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// Initialize Prometheus metrics
pub fn init_metrics(config: &MetricsConfig) -> Option<PrometheusMetrics> {
    if !config.enabled {
        tracing::info!("Prometheus metrics disabled");
        return None;
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            register_default_metrics();

            tracing::info!(path = %config.path, "Prometheus metrics initialized");

            Some(PrometheusMetrics {
                handle: Arc::new(handle),
            })
        }
        Err(e) => {
            tracing::error!("Failed to initialize Prometheus metrics: {}", e);
            None
        }
    }
}

fn register_default_metrics() {
    gauge!("draft_coordinator_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
    gauge!("draft_ready_teams").set(0.0);
}

/// Create the metrics router
pub fn create_metrics_router(metrics: PrometheusMetrics, path: &str) -> Router {
    Router::new()
        .route(path, get(metrics_handler))
        .with_state(metrics)
}

async fn metrics_handler(State(metrics): State<PrometheusMetrics>) -> impl IntoResponse {
    metrics.render()
}

/// Record an HTTP request metric
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_seconds", &labels).record(duration.as_secs_f64());

    if status >= 500 {
        counter!("http_server_errors_total", &labels).increment(1);
    }
}

pub fn record_team_registered() {
    counter!("draft_teams_registered_total").increment(1);
}

pub fn record_draft_entry() {
    counter!("draft_entries_total").increment(1);
}

/// Record a started draft and the number of teams in it
pub fn record_draft_started(teams: usize) {
    counter!("drafts_started_total").increment(1);
    histogram!("draft_size_teams").record(teams as f64);
}

pub fn record_teams_reset(cleared: usize) {
    counter!("draft_resets_total").increment(1);
    counter!("draft_teams_cleared_total").increment(cleared as u64);
}

/// Record a domain error returned to a client
pub fn record_domain_error(operation: &'static str, kind: &'static str) {
    counter!("draft_errors_total", "operation" => operation, "kind" => kind).increment(1);
}

pub fn set_ready_teams(count: usize) {
    gauge!("draft_ready_teams").set(count as f64);
}
