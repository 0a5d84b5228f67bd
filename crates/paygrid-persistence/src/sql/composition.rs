//! Composition store SQL implementation

use async_trait::async_trait;
use sea_orm::{prelude::Expr, sea_query::Asterisk, *};
use uuid::Uuid;

use paygrid_api::model::ComponentStatus;
use paygrid_api::paging::PagingRequest;
use paygrid_api::Page;

use crate::entity::salary_component;
use crate::model::{ComponentDraft, SalaryComponent};
use crate::traits::CompositionPersistence;

use super::{
    delete_org_links, filter, insert_component, load_org_ids, now, update_component,
    SqlPersistService,
};

#[async_trait]
impl CompositionPersistence for SqlPersistService {
    async fn create(&self, draft: &ComponentDraft) -> anyhow::Result<Uuid> {
        let tx = self.db.begin().await?;
        let id = insert_component(&tx, draft).await?;
        tx.commit().await?;
        Ok(id)
    }

    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<SalaryComponent>> {
        let model = salary_component::Entity::find_by_id(id).one(&self.db).await?;

        if let Some(model) = model {
            let mut component = SalaryComponent::from(model);
            let mut org_ids = load_org_ids(&self.db, &[id]).await?;
            component.organization_ids = org_ids.remove(&id).unwrap_or_default();
            Ok(Some(component))
        } else {
            Ok(None)
        }
    }

    async fn get_all(&self) -> anyhow::Result<Vec<SalaryComponent>> {
        let models = salary_component::Entity::find()
            .order_by_desc(salary_component::Column::GmtCreate)
            .order_by_desc(salary_component::Column::Id)
            .all(&self.db)
            .await?;

        let ids = models.iter().map(|m| m.id).collect::<Vec<Uuid>>();
        let mut org_ids = load_org_ids(&self.db, &ids).await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let mut component = SalaryComponent::from(model);
                component.organization_ids =
                    org_ids.remove(&component.id).unwrap_or_default();
                component
            })
            .collect())
    }

    async fn update(&self, id: Uuid, draft: &ComponentDraft) -> anyhow::Result<bool> {
        let tx = self.db.begin().await?;
        if !update_component(&tx, id, draft).await? {
            return Ok(false);
        }
        tx.commit().await?;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> anyhow::Result<bool> {
        let tx = self.db.begin().await?;

        delete_org_links(&tx, id).await?;
        let result = salary_component::Entity::delete_by_id(id).exec(&tx).await?;

        tx.commit().await?;
        Ok(result.rows_affected > 0)
    }

    async fn is_code_taken(&self, code: &str, exclude: Option<Uuid>) -> anyhow::Result<bool> {
        let mut select = salary_component::Entity::find()
            .filter(salary_component::Column::Code.eq(code))
            .filter(salary_component::Column::Status.eq(ComponentStatus::Active.as_i32()));

        if let Some(excluded) = exclude {
            select = select.filter(salary_component::Column::Id.ne(excluded));
        }

        let count = select
            .select_only()
            .column_as(Expr::col(Asterisk).count(), "count")
            .into_tuple::<i64>()
            .one(&self.db)
            .await?
            .unwrap_or_default();

        Ok(count > 0)
    }

    async fn update_status(&self, id: Uuid, status: ComponentStatus) -> anyhow::Result<bool> {
        let result = salary_component::Entity::update_many()
            .col_expr(
                salary_component::Column::Status,
                Expr::value(status.as_i32()),
            )
            .col_expr(salary_component::Column::GmtModified, Expr::value(now()))
            .filter(salary_component::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn bulk_update_status(
        &self,
        ids: &[Uuid],
        status: ComponentStatus,
    ) -> anyhow::Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        salary_component::Entity::update_many()
            .col_expr(
                salary_component::Column::Status,
                Expr::value(status.as_i32()),
            )
            .col_expr(salary_component::Column::GmtModified, Expr::value(now()))
            .filter(salary_component::Column::Id.is_in(ids.iter().copied()))
            .exec(&self.db)
            .await?;

        Ok(())
    }

    async fn get_paged(&self, request: &PagingRequest) -> anyhow::Result<Page<SalaryComponent>> {
        let condition = filter::active_conditions(request);
        let (page_number, page_size) = filter::page_window(request.page_number, request.page_size);

        let count_select = salary_component::Entity::find().filter(condition.clone());
        let query_select = salary_component::Entity::find()
            .filter(condition)
            .order_by_desc(salary_component::Column::GmtCreate)
            .order_by_desc(salary_component::Column::Id)
            .offset((page_number - 1) * page_size)
            .limit(page_size);

        // Count and data share the predicate; run them in parallel
        let (count_result, data_result) = tokio::join!(
            count_select
                .select_only()
                .column_as(Expr::col(Asterisk).count(), "count")
                .into_tuple::<i64>()
                .one(&self.db),
            query_select.all(&self.db)
        );

        let total_records = count_result?.unwrap_or_default() as u64;
        let models = data_result?;

        let ids = models.iter().map(|m| m.id).collect::<Vec<Uuid>>();
        let mut org_ids = load_org_ids(&self.db, &ids).await?;

        let data = models
            .into_iter()
            .map(|model| {
                let mut component = SalaryComponent::from(model);
                component.organization_ids =
                    org_ids.remove(&component.id).unwrap_or_default();
                component
            })
            .collect();

        Ok(Page::new(total_records, page_number, page_size, data))
    }
}
