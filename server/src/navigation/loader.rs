//! Navigation tree loading.

use std::path::Path;

use anyhow::{Context, Result};
use erp_common::{validate_tree, Guarded, NavigationGroup};
use tracing::{info, warn};

use super::default_tree::default_tree;

/// Read a navigation tree from a JSON file and validate it.
///
/// The file holds an array of groups in the same shape the API returns.
#[tracing::instrument]
pub fn load_tree(path: &Path) -> Result<Vec<NavigationGroup>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read navigation file {}", path.display()))?;
    let tree: Vec<NavigationGroup> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid navigation JSON in {}", path.display()))?;

    validate_tree(&tree).with_context(|| format!("Invalid navigation tree in {}", path.display()))?;
    warn_vacuous_rules(&tree);

    Ok(tree)
}

/// Resolve the tree to serve: the configured file, or the built-in one.
pub fn resolve_tree(navigation_file: Option<&Path>) -> Result<Vec<NavigationGroup>> {
    let tree = match navigation_file {
        Some(path) => load_tree(path)?,
        None => default_tree(),
    };

    let source =
        navigation_file.map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    info!(
        groups = tree.len(),
        items = tree.iter().map(|g| g.items.len()).sum::<usize>(),
        source = %source,
        "Navigation tree loaded"
    );

    Ok(tree)
}

/// `requireAllPermissions` without permissions does nothing; point it out.
fn warn_vacuous_rules(tree: &[NavigationGroup]) {
    for group in tree {
        if group.access_rule().has_vacuous_require_all() {
            warn!(group = %group.label, "requireAllPermissions set without requiredPermissions");
        }
        for item in &group.items {
            if item.access_rule().has_vacuous_require_all() {
                warn!(
                    group = %group.label,
                    item = %item.name,
                    "requireAllPermissions set without requiredPermissions"
                );
            }
        }
    }
}
