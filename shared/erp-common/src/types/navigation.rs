//! Navigation Types
//!
//! The sidebar is a two-level tree: groups containing items. Both levels carry
//! the same [`AccessRule`], flattened into the node on the wire.

use serde::{Deserialize, Serialize};

/// Role and permission restrictions attached to a navigation node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessRule {
    /// Roles that may see the node. `None` means not role-restricted.
    /// An empty list is still a restriction and matches no role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_roles: Option<Vec<String>>,
    /// Permissions that grant visibility. `None` or empty means not
    /// permission-restricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_permissions: Option<Vec<String>>,
    /// Require every permission in `required_permissions` instead of any one.
    #[serde(default)]
    pub require_all_permissions: bool,
}

impl AccessRule {
    /// Required permissions as a slice (empty when unset).
    #[must_use]
    pub fn required_permissions(&self) -> &[String] {
        self.required_permissions.as_deref().unwrap_or_default()
    }

    /// True when neither roles nor permissions restrict the node.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.allowed_roles.is_none() && self.required_permissions().is_empty()
    }

    /// Set `require_all_permissions` with no permission to require.
    ///
    /// The flag is inert in that case; tree loaders report it.
    #[must_use]
    pub fn has_vacuous_require_all(&self) -> bool {
        self.require_all_permissions && self.required_permissions().is_empty()
    }
}

/// Anything that carries an [`AccessRule`].
pub trait Guarded {
    /// The node's access restrictions.
    fn access_rule(&self) -> &AccessRule;
}

impl Guarded for AccessRule {
    fn access_rule(&self) -> &AccessRule {
        self
    }
}

/// A single sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    /// Display label.
    pub name: String,
    /// Navigation destination, usually a path.
    pub target: String,
    /// Icon reference for the front-end.
    pub icon: String,
    /// Access restrictions.
    #[serde(flatten)]
    pub access: AccessRule,
}

impl NavigationItem {
    /// Create an unrestricted item.
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            icon: icon.into(),
            access: AccessRule::default(),
        }
    }

    /// Restrict the item to the given roles.
    #[must_use]
    pub fn roles<R: Into<String>>(mut self, roles: impl IntoIterator<Item = R>) -> Self {
        self.access.allowed_roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Grant the item to holders of any of the given permissions.
    #[must_use]
    pub fn any_permission<P: Into<String>>(
        mut self,
        permissions: impl IntoIterator<Item = P>,
    ) -> Self {
        self.access.required_permissions = Some(permissions.into_iter().map(Into::into).collect());
        self.access.require_all_permissions = false;
        self
    }

    /// Grant the item only to holders of all the given permissions.
    #[must_use]
    pub fn all_permissions<P: Into<String>>(
        mut self,
        permissions: impl IntoIterator<Item = P>,
    ) -> Self {
        self.access.required_permissions = Some(permissions.into_iter().map(Into::into).collect());
        self.access.require_all_permissions = true;
        self
    }
}

impl Guarded for NavigationItem {
    fn access_rule(&self) -> &AccessRule {
        &self.access
    }
}

/// A labelled section of the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationGroup {
    /// Section heading.
    pub label: String,
    /// Icon reference for the front-end.
    pub icon: String,
    /// Entries in display order.
    pub items: Vec<NavigationItem>,
    /// Access restrictions, evaluated independently of the items.
    #[serde(flatten)]
    pub access: AccessRule,
}

impl NavigationGroup {
    /// Create an unrestricted group with no items.
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
            items: Vec::new(),
            access: AccessRule::default(),
        }
    }

    /// Append items, keeping their order.
    #[must_use]
    pub fn items(mut self, items: impl IntoIterator<Item = NavigationItem>) -> Self {
        self.items.extend(items);
        self
    }

    /// Restrict the group to the given roles.
    #[must_use]
    pub fn roles<R: Into<String>>(mut self, roles: impl IntoIterator<Item = R>) -> Self {
        self.access.allowed_roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    /// Grant the group to holders of any of the given permissions.
    #[must_use]
    pub fn any_permission<P: Into<String>>(
        mut self,
        permissions: impl IntoIterator<Item = P>,
    ) -> Self {
        self.access.required_permissions = Some(permissions.into_iter().map(Into::into).collect());
        self.access.require_all_permissions = false;
        self
    }

    /// Grant the group only to holders of all the given permissions.
    #[must_use]
    pub fn all_permissions<P: Into<String>>(
        mut self,
        permissions: impl IntoIterator<Item = P>,
    ) -> Self {
        self.access.required_permissions = Some(permissions.into_iter().map(Into::into).collect());
        self.access.require_all_permissions = true;
        self
    }
}

impl Guarded for NavigationGroup {
    fn access_rule(&self) -> &AccessRule {
        &self.access
    }
}
