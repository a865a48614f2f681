use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{StatusCode, header},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, Validation, decode};

use super::claims::{CurrentUser, UserClaims};

/// Decode an HS256 bearer token into the signed-in user.
pub fn decode_user(token: &str, secret: &str) -> Option<CurrentUser> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let claims = decode::<UserClaims>(token, &key, &Validation::default())
        .ok()?
        .claims;
    CurrentUser::try_from(claims).ok()
}

/// Resolve the bearer token, if any, into a [`CurrentUser`] extension.
///
/// A missing token passes through as anonymous unless JWTs are required; a
/// present but invalid token is always rejected.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim);

    let Some(token) = token else {
        if state.config.security.jwt_required {
            return Err(StatusCode::UNAUTHORIZED);
        }
        return Ok(next.run(request).await);
    };

    match decode_user(token, &state.config.security.jwt_secret) {
        Some(user) => {
            tracing::debug!(name: "auth.user", user_id = user.id, "Request authenticated");
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => {
            tracing::info!(name: "auth.rejected", "Invalid bearer token");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token(sub: &str, secret: &str, exp: usize) -> String {
        let claims = UserClaims {
            sub: sub.into(),
            name: Some("Jane Smith".into()),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn far_future() -> usize {
        usize::try_from(chrono::Utc::now().timestamp() + 3600).unwrap()
    }

    #[test]
    fn valid_token_decodes() {
        let user = decode_user(&token("7", "s3cret", far_future()), "s3cret").unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.name.as_deref(), Some("Jane Smith"));
    }

    #[test]
    fn wrong_secret_or_expired_token_is_rejected() {
        assert!(decode_user(&token("7", "s3cret", far_future()), "other").is_none());
        assert!(decode_user(&token("7", "s3cret", 1_000), "s3cret").is_none());
        assert!(decode_user("not-a-jwt", "s3cret").is_none());
    }
}
