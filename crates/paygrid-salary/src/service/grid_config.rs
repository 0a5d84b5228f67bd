//! Saved grid view configuration service

use anyhow::Result;

use paygrid_persistence::model::{GridConfigColumn, GridConfigSave};
use paygrid_persistence::traits::GridConfigPersistence;

/// The saved columns of a named grid, in column order
pub async fn get_by_name(
    store: &dyn GridConfigPersistence,
    grid_name: &str,
) -> Result<Vec<GridConfigColumn>> {
    store.get_by_name(grid_name).await
}

/// Replace the saved layout of a grid
pub async fn save(store: &dyn GridConfigPersistence, save: &GridConfigSave) -> Result<()> {
    store.save(save).await
}

/// Drop the saved layout of a grid
pub async fn delete_by_name(store: &dyn GridConfigPersistence, grid_name: &str) -> Result<()> {
    store.delete_by_name(grid_name).await
}
