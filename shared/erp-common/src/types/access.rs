//! Access Context Types

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The role and permissions of the user a navigation tree is filtered for.
///
/// Built fresh for every evaluation from whatever the session layer knows.
/// The default value is the anonymous context: no role, no permissions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccessContext {
    /// Active role identifier. Empty for anonymous users.
    pub role: String,
    /// Held permission identifiers.
    #[serde(default)]
    pub permissions: BTreeSet<String>,
}

impl UserAccessContext {
    /// Create a context for a role and its permissions.
    pub fn new<P: Into<String>>(
        role: impl Into<String>,
        permissions: impl IntoIterator<Item = P>,
    ) -> Self {
        Self {
            role: role.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Context used when no trustworthy session is available.
    ///
    /// Only fully unrestricted navigation is visible to it.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// True when the context carries neither a role nor permissions.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.role.is_empty() && self.permissions.is_empty()
    }

    /// Check if the user holds the given permission.
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}
