//! Navigation tree sources.
//!
//! The built-in ERP sidebar, the role/permission identifiers it uses, and
//! loading of an externally authored tree.

mod catalog;
mod default_tree;
mod loader;

pub use catalog::{Permission, Role};
pub use default_tree::default_tree;
pub use loader::{load_tree, resolve_tree};
