//! Grid config store SQL implementation

use async_trait::async_trait;
use sea_orm::*;
use uuid::Uuid;

use crate::entity::grid_config;
use crate::model::{GridConfigColumn, GridConfigSave};
use crate::traits::GridConfigPersistence;

use super::{now, SqlPersistService};

#[async_trait]
impl GridConfigPersistence for SqlPersistService {
    async fn get_by_name(&self, grid_name: &str) -> anyhow::Result<Vec<GridConfigColumn>> {
        let rows = grid_config::Entity::find()
            .filter(grid_config::Column::GridName.eq(grid_name))
            .order_by_asc(grid_config::Column::ColumnOrder)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(GridConfigColumn::from).collect())
    }

    async fn save(&self, save: &GridConfigSave) -> anyhow::Result<()> {
        let tx = self.db.begin().await?;

        grid_config::Entity::delete_many()
            .filter(grid_config::Column::GridName.eq(save.grid_name.as_str()))
            .exec(&tx)
            .await?;

        let now = now();
        let rows = save
            .columns
            .iter()
            .enumerate()
            .map(|(order, column)| grid_config::ActiveModel {
                id: Set(Uuid::new_v4()),
                grid_name: Set(save.grid_name.clone()),
                column_name: Set(column.data_field.clone()),
                column_order: Set(order as i32),
                visible: Set(column.visible),
                width: Set(column.width),
                pinned: Set(column.pinned),
                gmt_create: Set(now),
                gmt_modified: Set(now),
            })
            .collect::<Vec<grid_config::ActiveModel>>();

        grid_config::Entity::insert_many(rows)
            .on_empty_do_nothing()
            .exec(&tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    async fn delete_by_name(&self, grid_name: &str) -> anyhow::Result<()> {
        grid_config::Entity::delete_many()
            .filter(grid_config::Column::GridName.eq(grid_name))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
