//! Paygrid Persistence - database entities and persistence layer
//!
//! This crate provides:
//! - SeaORM entity definitions
//! - Persistence trait abstractions over the component, catalog,
//!   organization, and grid-config stores
//! - The SQL backend implementing them, including the filter compiler for
//!   the paged listings

pub mod entity;
pub mod model;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export persistence traits
pub use traits::{
    CompositionPersistence, GridConfigPersistence, OrganizationPersistence,
    SystemCatalogPersistence,
};

// Re-export SQL backend
pub use sql::SqlPersistService;

// Re-export model types
pub use model::{
    ComponentDraft, GridConfigColumn, GridConfigColumnSpec, GridConfigSave, OrganizationUnit,
    SalaryComponent, SystemComponent,
};
