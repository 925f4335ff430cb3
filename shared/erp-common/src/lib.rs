//! ERP Common Library
//!
//! Navigation types and the role/permission access filter shared by the
//! server and any client that renders the sidebar.

pub mod access;
pub mod error;
pub mod types;

pub use access::{filter_navigation, has_access, route_access, RouteAccess};
pub use error::{validate_tree, NavigationError, Result};
pub use types::*;
