use std::any::Any;
use std::panic::AssertUnwindSafe;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Next;
use actix_web::Error;
use futures_util::FutureExt;
use tracing::error;

use crate::error::AppError;

/// Turns a panicking handler into a generic 500 so the worker keeps serving.
///
/// Must not hold on to the `HttpRequest` while the inner service runs: the
/// router needs sole ownership of it to record the matched path.
pub async fn catch_panics<B: MessageBody + 'static>(
    req: ServiceRequest,
    next: Next<B>,
) -> Result<ServiceResponse<B>, Error> {
    let method = req.method().to_string();
    let path = req.path().to_string();

    match AssertUnwindSafe(next.call(req)).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => {
            error!(
                method = %method,
                path = %path,
                panic = %panic_message(payload.as_ref()),
                "handler panicked"
            );
            Err(AppError::InternalError(anyhow::anyhow!("handler panicked")).into())
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
