use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{info, info_span, warn, Instrument};
use tracing_subscriber::{fmt, EnvFilter};

/// Logs to stderr so the stdio transport keeps stdout for protocol frames.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// One summary line per request. Upstream manager calls made while serving
/// the request are logged inside its span.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let span = info_span!("http_request", method = %method, path = %path);
    let started_at = Instant::now();

    let response = next.run(request).instrument(span).await;
    let status = response.status();
    let elapsed_ms = started_at.elapsed().as_millis();

    info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = elapsed_ms,
        "request summary"
    );

    match status {
        StatusCode::UNAUTHORIZED => {
            warn!(method = %method, path = %path, "authentication failure")
        }
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE => {
            warn!(method = %method, path = %path, status = status.as_u16(), "hinemos manager unavailable")
        }
        _ => {}
    }

    response
}
