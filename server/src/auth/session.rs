//! Session Resolution
//!
//! Turns the bearer token of a request into the access context used for
//! navigation filtering. Any failure falls back to the anonymous context,
//! so a broken session only ever sees public navigation.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use erp_common::UserAccessContext;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::AppState;

use super::error::AuthError;
use super::jwt::validate_access_token;

/// Access context of the current request.
///
/// Use as an extractor in handlers. It never rejects a request.
#[derive(Debug, Clone, Default)]
pub struct SessionAccess {
    /// Authenticated user, if the token was valid.
    pub user_id: Option<Uuid>,
    /// Role and permissions to filter navigation with.
    pub context: UserAccessContext,
}

impl SessionAccess {
    /// Session with no role and no permissions.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Whether a valid access token was presented.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

/// Resolve the session from request headers.
///
/// A missing header is a normal anonymous visit. A malformed header, a bad
/// signature, an expired token or an unparsable subject are logged and also
/// yield the anonymous session.
pub fn resolve_session(headers: &HeaderMap, public_key: &str) -> SessionAccess {
    let Some(header) = headers.get(AUTHORIZATION) else {
        debug!("No authorization header, using anonymous access");
        return SessionAccess::anonymous();
    };

    let Some(token) = header
        .to_str()
        .ok()
        .and_then(|h| h.strip_prefix("Bearer "))
    else {
        warn!(error = %AuthError::InvalidAuthHeader, "Falling back to anonymous access");
        return SessionAccess::anonymous();
    };

    let claims = match validate_access_token(token, public_key) {
        Ok(claims) => claims,
        Err(e) => {
            warn!(error = %e, "Rejected access token, falling back to anonymous access");
            return SessionAccess::anonymous();
        }
    };

    let Ok(user_id) = claims.sub.parse::<Uuid>() else {
        warn!(error = %AuthError::InvalidToken, "Token subject is not a user ID");
        return SessionAccess::anonymous();
    };

    let context = claims.access_context();
    debug!(
        %user_id,
        role = %context.role,
        permissions = context.permissions.len(),
        "Session resolved"
    );

    SessionAccess {
        user_id: Some(user_id),
        context,
    }
}

impl FromRequestParts<AppState> for SessionAccess {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(resolve_session(&parts.headers, &state.config.jwt_public_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::{generate_access_token, TEST_PRIVATE_KEY};
    use crate::config::TEST_JWT_PUBLIC_KEY;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_valid_token_resolves_context() {
        let user_id = Uuid::now_v7();
        let token = generate_access_token(
            user_id,
            "teacher",
            &["mark_attendance".to_string()],
            TEST_PRIVATE_KEY,
            900,
        )
        .unwrap();

        let session =
            resolve_session(&headers_with(&format!("Bearer {token}")), TEST_JWT_PUBLIC_KEY);

        assert!(session.is_authenticated());
        assert_eq!(session.user_id, Some(user_id));
        assert_eq!(session.context, UserAccessContext::new("teacher", ["mark_attendance"]));
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        let session = resolve_session(&HeaderMap::new(), TEST_JWT_PUBLIC_KEY);
        assert!(!session.is_authenticated());
        assert!(session.context.is_anonymous());
    }

    #[test]
    fn test_non_bearer_header_is_anonymous() {
        let session = resolve_session(&headers_with("Basic dXNlcjpwYXNz"), TEST_JWT_PUBLIC_KEY);
        assert!(!session.is_authenticated());
        assert!(session.context.is_anonymous());
    }

    #[test]
    fn test_corrupt_token_is_anonymous() {
        let session = resolve_session(&headers_with("Bearer abc.def.ghi"), TEST_JWT_PUBLIC_KEY);
        assert!(!session.is_authenticated());
        assert!(session.context.is_anonymous());
    }

    #[test]
    fn test_expired_token_is_anonymous() {
        let token =
            generate_access_token(Uuid::now_v7(), "super_admin", &[], TEST_PRIVATE_KEY, -60)
                .unwrap();
        let session =
            resolve_session(&headers_with(&format!("Bearer {token}")), TEST_JWT_PUBLIC_KEY);
        assert!(session.context.is_anonymous());
    }

    #[test]
    fn test_misconfigured_key_is_anonymous() {
        let token =
            generate_access_token(Uuid::now_v7(), "super_admin", &[], TEST_PRIVATE_KEY, 900)
                .unwrap();
        let session = resolve_session(&headers_with(&format!("Bearer {token}")), "not-a-key");
        assert!(session.context.is_anonymous());
    }
}
