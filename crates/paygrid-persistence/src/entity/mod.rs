//! SeaORM entity definitions

pub mod grid_config;
pub mod organization;
pub mod salary_component;
pub mod salary_component_org;
pub mod salary_component_system;
