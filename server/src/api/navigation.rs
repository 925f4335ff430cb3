//! Navigation API
//!
//! Sidebar and route visibility for the current session.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use erp_common::{filter_navigation, route_access, NavigationGroup, RouteAccess};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{error::ApiError, AppState};
use crate::auth::SessionAccess;
use crate::navigation::{Permission, Role};

/// Get the navigation tree visible to the caller.
///
/// Anonymous and invalid sessions receive only public navigation.
///
/// GET /api/navigation
pub async fn get_navigation(
    State(state): State<AppState>,
    session: SessionAccess,
) -> Json<Vec<NavigationGroup>> {
    let groups = filter_navigation(&state.navigation, &session.context);

    debug!(
        role = %session.context.role,
        groups = groups.len(),
        "Navigation filtered"
    );

    Json(groups)
}

/// Query for a route check.
#[derive(Debug, Deserialize)]
pub struct RouteAccessQuery {
    /// Front-end path to check, e.g. `/students/42`.
    pub path: String,
}

/// Route check response.
#[derive(Debug, Serialize)]
pub struct RouteAccessResponse {
    /// The checked path, as given.
    pub path: String,
    /// Whether visible navigation leads to it.
    pub access: RouteAccess,
}

/// Check whether the caller may open a front-end route.
///
/// GET /api/navigation/access?path=/students/42
pub async fn check_route_access(
    State(state): State<AppState>,
    session: SessionAccess,
    query: Result<Query<RouteAccessQuery>, QueryRejection>,
) -> Result<Json<RouteAccessResponse>, ApiError> {
    let Query(query) = query?;
    let path = query.path.trim();
    if path.is_empty() {
        return Err(ApiError::Validation("path must not be empty".into()));
    }
    if !path.starts_with('/') {
        return Err(ApiError::Validation("path must start with '/'".into()));
    }

    let access = route_access(&state.navigation, &session.context, path);
    debug!(role = %session.context.role, path, ?access, "Route checked");

    Ok(Json(RouteAccessResponse {
        path: path.to_string(),
        access,
    }))
}

/// Resolved session response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    /// Whether a valid access token was presented.
    pub authenticated: bool,
    /// Active role (empty when anonymous).
    pub role: String,
    /// Description of the role, when it is a known one.
    pub role_description: Option<&'static str>,
    /// Held permissions, sorted.
    pub permissions: Vec<String>,
}

/// Describe the access context the server resolved for the caller.
///
/// GET /api/session
pub async fn get_session(session: SessionAccess) -> Json<SessionResponse> {
    let authenticated = session.is_authenticated();
    let context = session.context;

    Json(SessionResponse {
        authenticated,
        role_description: Role::parse(&context.role).map(|role| role.description()),
        role: context.role,
        permissions: context.permissions.into_iter().collect(),
    })
}

/// Catalogue entry for a role or permission.
#[derive(Debug, Serialize)]
pub struct CatalogEntry<T> {
    /// Identifier used in tokens and navigation rules.
    pub id: T,
    /// Human-readable description.
    pub description: &'static str,
}

/// Known roles and permissions.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Roles, in catalogue order.
    pub roles: Vec<CatalogEntry<Role>>,
    /// Permissions, in catalogue order.
    pub permissions: Vec<CatalogEntry<Permission>>,
}

/// List the roles and permissions the built-in navigation is authored with.
///
/// GET /api/catalog
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        roles: Role::all()
            .iter()
            .map(|&id| CatalogEntry {
                id,
                description: id.description(),
            })
            .collect(),
        permissions: Permission::all()
            .iter()
            .map(|&id| CatalogEntry {
                id,
                description: id.description(),
            })
            .collect(),
    })
}
