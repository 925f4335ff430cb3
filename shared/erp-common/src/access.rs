//! Navigation access filtering.
//!
//! Decides which sidebar groups and items a user may see, and whether a
//! route reached by URL is one of them.

use serde::{Deserialize, Serialize};

use crate::types::{Guarded, NavigationGroup, NavigationItem, UserAccessContext};

/// Check whether `context` may see `node`.
///
/// Resolution order:
/// 1. A node with no role list and no required permissions is public
/// 2. A matching role grants access without looking at permissions
/// 3. Required permissions grant access when any one (or, with
///    `require_all_permissions`, every one) is held
/// 4. Anything else is hidden
///
/// Roles and permissions combine with OR: listing a role gives that role
/// access even if it lacks the node's permissions.
pub fn has_access<N: Guarded + ?Sized>(context: &UserAccessContext, node: &N) -> bool {
    let rule = node.access_rule();
    let required = rule.required_permissions();

    if rule.allowed_roles.is_none() && required.is_empty() {
        return true;
    }

    if let Some(roles) = &rule.allowed_roles {
        if roles.iter().any(|role| *role == context.role) {
            return true;
        }
    }

    if required.is_empty() {
        return false;
    }

    if rule.require_all_permissions {
        required.iter().all(|p| context.has_permission(p))
    } else {
        required.iter().any(|p| context.has_permission(p))
    }
}

/// Prune a navigation tree down to what `context` may see.
///
/// Hidden groups are dropped without looking at their items, hidden items
/// are dropped from surviving groups, and groups left without items are
/// dropped as well. Order is preserved at both levels. The input is not
/// modified.
pub fn filter_navigation(
    tree: &[NavigationGroup],
    context: &UserAccessContext,
) -> Vec<NavigationGroup> {
    tree.iter()
        .filter(|group| has_access(context, *group))
        .filter_map(|group| {
            let items: Vec<NavigationItem> = group
                .items
                .iter()
                .filter(|item| has_access(context, *item))
                .cloned()
                .collect();

            if items.is_empty() {
                return None;
            }

            Some(NavigationGroup {
                label: group.label.clone(),
                icon: group.icon.clone(),
                items,
                access: group.access.clone(),
            })
        })
        .collect()
}

/// Outcome of checking a route against the navigation tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteAccess {
    /// A visible item leads to the route.
    Granted,
    /// The route belongs to navigation the user cannot see.
    Denied,
    /// No navigation item leads to the route.
    Unlisted,
}

impl RouteAccess {
    /// True only for [`RouteAccess::Granted`].
    #[must_use]
    pub const fn is_granted(self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Check whether `path` is reachable through navigation visible to `context`.
///
/// Paths are compared segment by segment after dropping the query, the
/// fragment, empty and `.` segments, and resolving `..` (never above the
/// root). Item targets match on segment boundaries, so `/students` covers
/// `/students/42` but not `/studentship`. Only the longest matching target
/// decides; if several items share it, one visible item is enough.
pub fn route_access(
    tree: &[NavigationGroup],
    context: &UserAccessContext,
    path: &str,
) -> RouteAccess {
    let path = path_segments(path);
    let mut longest: Option<usize> = None;
    let mut granted = false;

    for group in tree {
        let group_visible = has_access(context, group);

        for item in &group.items {
            let Some(len) = target_match_len(&item.target, &path) else {
                continue;
            };
            // A visible item keeps its group non-empty, so it survives filtering.
            let visible = group_visible && has_access(context, item);

            match longest {
                Some(best) if len < best => {}
                Some(best) if len == best => granted |= visible,
                _ => {
                    longest = Some(len);
                    granted = visible;
                }
            }
        }
    }

    match longest {
        None => RouteAccess::Unlisted,
        Some(_) if granted => RouteAccess::Granted,
        Some(_) => RouteAccess::Denied,
    }
}

/// Canonical segments of a path; the root has none.
fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut segments = Vec::new();

    for segment in path[..end].split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    segments
}

/// Number of segments `target` shares with `path` when it covers it.
fn target_match_len(target: &str, path: &[&str]) -> Option<usize> {
    let target = path_segments(target);

    // Root only matches itself.
    if target.is_empty() {
        return path.is_empty().then_some(0);
    }

    path.starts_with(&target).then_some(target.len())
}
