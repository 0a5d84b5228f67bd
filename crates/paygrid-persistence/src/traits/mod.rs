//! Persistence traits for the component, catalog, organization, and
//! grid-config stores
//!
//! The service layer is written against these abstractions; the SQL backend
//! in `crate::sql` implements them over a SeaORM connection.

pub mod composition;
pub mod grid_config;
pub mod organization;
pub mod system_catalog;

pub use composition::CompositionPersistence;
pub use grid_config::GridConfigPersistence;
pub use organization::OrganizationPersistence;
pub use system_catalog::SystemCatalogPersistence;
