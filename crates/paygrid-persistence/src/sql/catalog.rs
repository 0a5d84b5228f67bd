//! System catalog store SQL implementation
//!
//! Besides catalog reads, this carries the two lookups against the active
//! table and the atomic cross-table migration writes.

use async_trait::async_trait;
use sea_orm::{prelude::Expr, sea_query::Asterisk, *};
use uuid::Uuid;

use paygrid_api::model::ComponentStatus;
use paygrid_api::paging::SystemPagingRequest;
use paygrid_api::Page;
use paygrid_common::PaygridError;

use crate::entity::{organization, salary_component, salary_component_system};
use crate::model::{ComponentDraft, SystemComponent};
use crate::traits::SystemCatalogPersistence;

use super::{
    draft_active_model, filter, insert_component, now, replace_org_links, SqlPersistService,
};

/// Delete a catalog row inside the migration transaction. If the row
/// vanished since it was read, the whole transaction must roll back, so
/// this surfaces NotFound instead of succeeding with zero rows.
async fn consume_catalog_row(tx: &DatabaseTransaction, id: Uuid) -> anyhow::Result<()> {
    let result = salary_component_system::Entity::delete_by_id(id)
        .exec(tx)
        .await?;

    if result.rows_affected == 0 {
        return Err(PaygridError::NotFound(format!("system component {}", id)).into());
    }

    Ok(())
}

#[async_trait]
impl SystemCatalogPersistence for SqlPersistService {
    async fn get_all(&self) -> anyhow::Result<Vec<SystemComponent>> {
        let models = salary_component_system::Entity::find()
            .order_by_desc(salary_component_system::Column::GmtCreate)
            .order_by_desc(salary_component_system::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(SystemComponent::from).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<SystemComponent>> {
        let model = salary_component_system::Entity::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(model.map(SystemComponent::from))
    }

    async fn get_paged(
        &self,
        request: &SystemPagingRequest,
    ) -> anyhow::Result<Page<SystemComponent>> {
        let condition = filter::system_conditions(request);
        let (page_number, page_size) = filter::page_window(request.page_number, request.page_size);

        let count_select = salary_component_system::Entity::find().filter(condition.clone());
        let query_select = salary_component_system::Entity::find()
            .filter(condition)
            .order_by_desc(salary_component_system::Column::GmtCreate)
            .order_by_desc(salary_component_system::Column::Id)
            .offset((page_number - 1) * page_size)
            .limit(page_size);

        let (count_result, data_result) = tokio::join!(
            count_select
                .select_only()
                .column_as(Expr::col(Asterisk).count(), "count")
                .into_tuple::<i64>()
                .one(&self.db),
            query_select.all(&self.db)
        );

        let total_records = count_result?.unwrap_or_default() as u64;
        let data = data_result?
            .into_iter()
            .map(SystemComponent::from)
            .collect();

        Ok(Page::new(total_records, page_number, page_size, data))
    }

    async fn active_code_exists(&self, code: &str) -> anyhow::Result<bool> {
        let count = salary_component::Entity::find()
            .filter(salary_component::Column::Code.eq(code))
            .filter(salary_component::Column::Status.eq(ComponentStatus::Active.as_i32()))
            .select_only()
            .column_as(Expr::col(Asterisk).count(), "count")
            .into_tuple::<i64>()
            .one(&self.db)
            .await?
            .unwrap_or_default();

        Ok(count > 0)
    }

    async fn active_id_by_code(&self, code: &str) -> anyhow::Result<Option<Uuid>> {
        let model = salary_component::Entity::find()
            .filter(salary_component::Column::Code.eq(code))
            .filter(salary_component::Column::Status.eq(ComponentStatus::Active.as_i32()))
            .one(&self.db)
            .await?;

        Ok(model.map(|m| m.id))
    }

    async fn root_organization_id(&self) -> anyhow::Result<Option<Uuid>> {
        let root = organization::Entity::find()
            .filter(organization::Column::ParentId.is_null())
            .one(&self.db)
            .await?;

        Ok(root.map(|m| m.id))
    }

    async fn move_into_composition(
        &self,
        id: Uuid,
        draft: &ComponentDraft,
    ) -> anyhow::Result<Uuid> {
        let tx = self.db.begin().await?;

        let new_id = insert_component(&tx, draft).await?;
        consume_catalog_row(&tx, id).await?;

        tx.commit().await?;
        Ok(new_id)
    }

    async fn overwrite_composition(
        &self,
        id: Uuid,
        target: Uuid,
        draft: &ComponentDraft,
    ) -> anyhow::Result<()> {
        let tx = self.db.begin().await?;

        let mut model = draft_active_model(draft);
        model.id = Set(target);
        model.gmt_modified = Set(now());
        match salary_component::Entity::update(model).exec(&tx).await {
            Ok(_) => {}
            Err(DbErr::RecordNotUpdated) => {
                return Err(
                    PaygridError::NotFound(format!("salary component {}", target)).into(),
                );
            }
            Err(e) => return Err(e.into()),
        }

        replace_org_links(&tx, target, &draft.organization_ids).await?;
        consume_catalog_row(&tx, id).await?;

        tx.commit().await?;
        Ok(())
    }
}
