//! Navigation Tree Errors

use thiserror::Error;

use crate::types::{AccessRule, NavigationGroup};

/// Problems found in an authored navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Group without a label.
    #[error("group {group} has an empty label")]
    EmptyGroupLabel { group: usize },

    /// Item without a name.
    #[error("item {item} of group '{label}' has an empty name")]
    EmptyItemName { label: String, item: usize },

    /// Blank role identifier in an `allowedRoles` list.
    #[error("'{node}' lists a blank role")]
    BlankRole { node: String },

    /// Blank permission identifier in a `requiredPermissions` list.
    #[error("'{node}' lists a blank permission")]
    BlankPermission { node: String },
}

/// Result type for navigation tree operations.
pub type Result<T> = std::result::Result<T, NavigationError>;

/// Check that a tree is well formed.
///
/// Labels and names must not be blank, and role/permission lists must not
/// contain blank identifiers. A blank role would otherwise match the
/// anonymous context.
pub fn validate_tree(tree: &[NavigationGroup]) -> Result<()> {
    for (index, group) in tree.iter().enumerate() {
        if group.label.trim().is_empty() {
            return Err(NavigationError::EmptyGroupLabel { group: index });
        }
        validate_rule(&group.label, &group.access)?;

        for (item_index, item) in group.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(NavigationError::EmptyItemName {
                    label: group.label.clone(),
                    item: item_index,
                });
            }
            validate_rule(&item.name, &item.access)?;
        }
    }

    Ok(())
}

fn validate_rule(node: &str, rule: &AccessRule) -> Result<()> {
    if let Some(roles) = &rule.allowed_roles {
        if roles.iter().any(|r| r.trim().is_empty()) {
            return Err(NavigationError::BlankRole {
                node: node.to_string(),
            });
        }
    }

    if rule.required_permissions().iter().any(|p| p.trim().is_empty()) {
        return Err(NavigationError::BlankPermission {
            node: node.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavigationItem;

    #[test]
    fn test_valid_tree() {
        let tree = vec![NavigationGroup::new("Library", "book").items([
            NavigationItem::new("Books", "/library/books", "book").roles(["librarian"]),
            NavigationItem::new("Issue & Return", "/library/issue", "repeat")
                .all_permissions(["view_library", "issue_books"]),
        ])];
        assert_eq!(validate_tree(&tree), Ok(()));
        assert_eq!(validate_tree(&[]), Ok(()));
    }

    #[test]
    fn test_empty_group_label() {
        let tree = vec![
            NavigationGroup::new("Help", "life-buoy"),
            NavigationGroup::new("  ", "x"),
        ];
        assert_eq!(
            validate_tree(&tree),
            Err(NavigationError::EmptyGroupLabel { group: 1 })
        );
    }

    #[test]
    fn test_empty_item_name() {
        let tree = vec![NavigationGroup::new("Store", "package").items([
            NavigationItem::new("Inventory", "/store/inventory", "boxes"),
            NavigationItem::new("", "/store/unnamed", "x"),
        ])];

        let err = validate_tree(&tree).unwrap_err();
        assert_eq!(
            err,
            NavigationError::EmptyItemName {
                label: "Store".into(),
                item: 1
            }
        );
        assert_eq!(err.to_string(), "item 1 of group 'Store' has an empty name");
    }

    #[test]
    fn test_blank_role_rejected() {
        let tree = vec![NavigationGroup::new("Core", "building").roles(["super_admin", ""])];
        assert_eq!(
            validate_tree(&tree),
            Err(NavigationError::BlankRole {
                node: "Core".into()
            })
        );
    }

    #[test]
    fn test_blank_permission_rejected() {
        let tree = vec![NavigationGroup::new("HR", "briefcase").items([NavigationItem::new(
            "Payroll",
            "/hr/payroll",
            "wallet",
        )
        .any_permission(["view_payroll", " "])])];
        assert_eq!(
            validate_tree(&tree),
            Err(NavigationError::BlankPermission {
                node: "Payroll".into()
            })
        );
    }
}
