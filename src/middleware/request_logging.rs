//! Per-request tracing, request ids and metrics.
//!
//! Responses leave with an `x-request-id` header; the same id is attached
//! to the request span and to any 5xx capture. Errors raised by inner
//! middleware are counted and logged before they propagate.

use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::middleware::Next;
use actix_web::{web, Error};
use tracing::{info, Instrument, Span};
use uuid::Uuid;

use crate::api::routes::AppState;
use crate::observability::error_tracking::capture_unexpected_5xx;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Get client IP address from request.
///
/// Relies on `realip_remote_addr()`, which only trusts forwarding headers
/// when actix-web is configured to.
pub fn get_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn get_user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

pub fn create_request_span(
    request_id: &str,
    method: &str,
    path: &str,
    client_ip: &str,
    user_agent: &str,
) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        user_agent = %user_agent
    )
}

/// Get HTTP status class for grouping (2xx, 3xx, 4xx, 5xx)
pub fn get_status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}

pub async fn log_requests<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error> {
    let request_id = Uuid::new_v4().to_string();
    let method = req.method().to_string();
    let path = req.path().to_string();
    let metrics = req
        .app_data::<web::Data<AppState>>()
        .map(|state| state.metrics.clone());
    let span = create_request_span(
        &request_id,
        &method,
        &path,
        &get_client_ip(&req),
        &get_user_agent(&req),
    );
    let start = Instant::now();

    let outcome = next.call(req).instrument(span.clone()).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = match &outcome {
        Ok(response) => response.status().as_u16(),
        Err(error) => error.as_response_error().status_code().as_u16(),
    };

    if let Some(metrics) = metrics {
        metrics.record_request(status, latency_ms);
    }

    span.in_scope(|| {
        info!(
            status = status,
            status_class = get_status_class(status),
            latency_ms = latency_ms,
            "request completed"
        )
    });

    if status >= 500 {
        capture_unexpected_5xx(&path, &method, status, &request_id).ok();
    }

    let mut response = outcome?;
    response.headers_mut().insert(
        HeaderName::from_static(REQUEST_ID_HEADER),
        HeaderValue::from_str(&request_id)
            .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
    );

    Ok(response)
}
