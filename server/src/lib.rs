//! Campus ERP Server
//!
//! Serves the role and permission filtered navigation of the school/college
//! ERP admin front-end.

pub mod api;
pub mod auth;
pub mod config;
pub mod navigation;
