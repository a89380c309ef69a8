//! Global request throttle for the assistant API

use std::num::NonZeroU32;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::InMemoryState, state::NotKeyed};

use crate::error::AppError;

pub type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Zero is treated as one request per second
pub fn create_rate_limiter(requests_per_second: u32) -> SharedRateLimiter {
    let rps = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);
    Arc::new(RateLimiter::direct(Quota::per_second(rps)))
}

pub async fn rate_limit_middleware(request: Request<Body>, next: Next) -> Response {
    let throttled = request
        .extensions()
        .get::<SharedRateLimiter>()
        .is_some_and(|limiter| limiter.check().is_err());

    if throttled {
        tracing::warn!(path = %request.uri().path(), "Request throttled");
        return AppError::Throttled.into_response();
    }

    next.run(request).await
}
