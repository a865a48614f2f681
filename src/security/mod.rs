//! Request identity and protective middleware.
//!
//! - [`claims`]: JWT payload and the signed-in user
//! - [`middleware`]: bearer-token authentication
//! - [`rate_limit`]: global request throttling
//!
//! Handlers read identity and tenant through the [`RequestContext`] extractor
//! rather than from shared globals.

pub mod claims;
pub mod middleware;
pub mod rate_limit;

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::AppState;
pub use claims::CurrentUser;

/// Who is asking, and on behalf of which community.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub user: Option<CurrentUser>,
    pub tenant_id: i64,
    /// Normalized tenant prefix, `""` or `/hub`.
    pub base_path: String,
    pub features: Vec<String>,
}

impl RequestContext {
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user.as_ref().map(|u| u.id)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    #[must_use]
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.eq_ignore_ascii_case(feature))
    }

    /// Tenant-relative link.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_path)
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let tenant = &state.config.tenant;
        Ok(Self {
            user: parts.extensions.get::<CurrentUser>().cloned(),
            tenant_id: tenant.id,
            base_path: tenant.normalized_base_path(),
            features: tenant.features.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(user: Option<CurrentUser>) -> RequestContext {
        RequestContext {
            user,
            tenant_id: 1,
            base_path: "/hub".into(),
            features: vec!["Volunteering".into()],
        }
    }

    #[test]
    fn feature_lookup_ignores_case() {
        assert!(context(None).has_feature("volunteering"));
        assert!(!context(None).has_feature("wallet"));
    }

    #[test]
    fn urls_are_tenant_relative() {
        assert_eq!(context(None).url("/login"), "/hub/login");
    }

    #[test]
    fn user_id_follows_user() {
        assert_eq!(context(None).user_id(), None);
        let ctx = context(Some(CurrentUser { id: 3, name: None }));
        assert!(ctx.is_signed_in());
        assert_eq!(ctx.user_id(), Some(3));
    }
}
