//! Grid config store trait

use async_trait::async_trait;

use crate::model::{GridConfigColumn, GridConfigSave};

/// Saved grid layout persistence operations
#[async_trait]
pub trait GridConfigPersistence: Send + Sync {
    /// All saved columns of a named grid, in column order
    async fn get_by_name(&self, grid_name: &str) -> anyhow::Result<Vec<GridConfigColumn>>;

    /// Replace the saved layout of a grid in one transaction, renumbering
    /// column order from zero
    async fn save(&self, save: &GridConfigSave) -> anyhow::Result<()>;

    /// Drop the saved layout of a grid
    async fn delete_by_name(&self, grid_name: &str) -> anyhow::Result<()>;
}
