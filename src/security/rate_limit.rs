use crate::AppState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

/// Global token bucket shared by every request.
///
/// Not keyed by client; one bucket guards the whole process.
pub struct AppRateLimiter {
    limiter: DefaultDirectRateLimiter,
    requests_per_second: f32,
    burst_size: u32,
}

impl fmt::Debug for AppRateLimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppRateLimiter")
            .field("requests_per_second", &self.requests_per_second)
            .field("burst_size", &self.burst_size)
            .finish()
    }
}

impl AppRateLimiter {
    /// Fractional rates are allowed; bursts below one are raised to one.
    pub fn new(requests_per_second: f32, burst_size: u32) -> Self {
        let burst = NonZeroU32::new(burst_size).unwrap_or(NonZeroU32::MIN);
        let period = Duration::from_secs_f64(1.0 / f64::from(requests_per_second.max(0.001)));
        let quota = Quota::with_period(period)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN))
            .allow_burst(burst);

        Self {
            limiter: RateLimiter::direct(quota),
            requests_per_second,
            burst_size: burst.get(),
        }
    }

    /// Take one token, returning whether the request may proceed.
    pub fn check(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

/// Middleware to enforce rate limits
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if state.config.resilience.rate_limit_enabled && !state.rate_limiter.check() {
        tracing::warn!(name: "rate_limit.rejected", path = %req.uri().path(), "Rate limit exceeded");
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_then_reject() {
        let limiter = AppRateLimiter::new(1.0, 3);

        assert!(limiter.check());
        assert!(limiter.check());
        assert!(limiter.check());

        // Bucket drained; refills one token per second.
        assert!(!limiter.check());
    }

    #[test]
    fn zero_burst_still_admits_one() {
        let limiter = AppRateLimiter::new(0.5, 0);
        assert!(limiter.check());
        assert!(!limiter.check());
    }
}
