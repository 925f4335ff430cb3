//! Shared types.

pub mod access;
pub mod navigation;

pub use access::UserAccessContext;
pub use navigation::{AccessRule, Guarded, NavigationGroup, NavigationItem};
