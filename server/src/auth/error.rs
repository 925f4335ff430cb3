//! Authentication Error Types

use thiserror::Error;

/// Access token error types.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid or expired token.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Token has expired.
    #[error("Token expired")]
    TokenExpired,

    /// Invalid authorization header format.
    #[error("Invalid authorization header format")]
    InvalidAuthHeader,

    /// JWT error.
    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    /// Internal error (bad key material).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
