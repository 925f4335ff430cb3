//! Authentication
//!
//! Verifies access tokens issued by the identity service and derives the
//! per-request access context. Login and token storage live elsewhere.

mod error;
pub mod jwt;
mod session;

pub use error::{AuthError, AuthResult};
pub use session::{resolve_session, SessionAccess};
