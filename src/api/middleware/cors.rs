//! Cross-origin policy: one allowed origin, any method or header, credentials on

use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer for the configured origin.
///
/// Methods and headers are mirrored from the preflight request, since
/// wildcards cannot be combined with credentials.
pub fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(&config.allowed_origin)
        .with_context(|| format!("Invalid CORS origin '{}'", config.allowed_origin))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
