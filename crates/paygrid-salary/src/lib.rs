//! Paygrid Salary - salary component management services
//!
//! This crate provides:
//! - Active component CRUD with duplicate-code guards
//! - The system catalog service with the migration workflow
//! - Organization tree rebuilding
//! - Saved grid view configurations

pub mod model;
pub mod service;

pub use model::OrganizationTreeNode;
