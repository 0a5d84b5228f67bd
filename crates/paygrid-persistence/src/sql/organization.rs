//! Organization store SQL implementation

use async_trait::async_trait;
use sea_orm::*;

use crate::entity::organization;
use crate::model::OrganizationUnit;
use crate::traits::OrganizationPersistence;

use super::SqlPersistService;

#[async_trait]
impl OrganizationPersistence for SqlPersistService {
    async fn find_active(&self) -> anyhow::Result<Vec<OrganizationUnit>> {
        let units = organization::Entity::find()
            .filter(organization::Column::IsActive.eq(true))
            .order_by_asc(organization::Column::Level)
            .order_by_asc(organization::Column::SortOrder)
            .order_by_asc(organization::Column::Name)
            .all(&self.db)
            .await?;

        Ok(units.into_iter().map(OrganizationUnit::from).collect())
    }
}
