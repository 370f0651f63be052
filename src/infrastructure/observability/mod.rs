//! Observability infrastructure - Prometheus metrics

mod metrics;

pub use metrics::{
    create_metrics_router, init_metrics, record_domain_error, record_draft_entry,
    record_draft_started, record_http_request, record_team_registered, record_teams_reset,
    set_ready_teams, PrometheusMetrics,
};
