//! Error types.
//!
//! Rendering errors are values callers degrade from (placeholders, never a
//! blank page). Page errors map to plain-text HTTP responses.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

/// Failure to render a component template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No template is registered under the resolved path.
    #[error("template not found: {path}")]
    TemplateNotFound {
        /// Resolved template path.
        path: String,
    },

    /// The path escapes the components root or is empty.
    #[error("invalid template path: {path:?}")]
    InvalidPath {
        /// Path as requested.
        path: String,
    },

    /// The template panicked while rendering.
    #[error("template panicked: {path}")]
    TemplatePanicked {
        /// Resolved template path.
        path: String,
    },
}

impl RenderError {
    /// Short label used for metrics and logs.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::TemplateNotFound { .. } => "not_found",
            Self::InvalidPath { .. } => "invalid_path",
            Self::TemplatePanicked { .. } => "panicked",
        }
    }
}

/// Errors surfaced by page handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// The tenant has the module switched off.
    #[error("{0} module is disabled for this community.")]
    FeatureDisabled(String),

    /// The page needs a signed-in user.
    #[error("Access Denied")]
    Unauthorized,

    /// Anonymous visitor should log in first.
    #[error("login required")]
    LoginRequired {
        /// Login page location.
        location: String,
    },

    /// The request cannot be served in its current form.
    #[error("{0}")]
    BadRequest(String),

    /// Anything else.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotFound(_) | Self::FeatureDisabled(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::LoginRequired { location } => {
                return Redirect::to(location).into_response();
            }
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(e) => {
                tracing::error!(name: "page.error", error = ?e, "Page handler failed");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    "Something went wrong. Please try again later.",
                )
                    .into_response();
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_disabled_message() {
        let err = AppError::FeatureDisabled("Volunteering".into());
        assert_eq!(
            err.to_string(),
            "Volunteering module is disabled for this community."
        );
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn login_required_redirects() {
        let response = AppError::LoginRequired {
            location: "/hub/login".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/hub/login");
    }

    #[test]
    fn render_error_reasons() {
        let err = RenderError::TemplateNotFound {
            path: "cards/listing-card".into(),
        };
        assert_eq!(err.reason(), "not_found");
        assert_eq!(err.to_string(), "template not found: cards/listing-card");
    }
}
