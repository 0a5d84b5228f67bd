//! SQL persistence backend (MySQL/PostgreSQL via SeaORM)
//!
//! Implements the persistence traits over a SeaORM `DatabaseConnection`.
//! The cross-table migration writes (insert/update active row + delete
//! catalog row) run inside a single transaction.

mod catalog;
mod composition;
mod filter;
mod grid_config;
mod organization;

use std::collections::HashMap;

use chrono::{Local, NaiveDateTime};
use sea_orm::*;
use uuid::Uuid;

use crate::entity::{salary_component, salary_component_org};
use crate::model::ComponentDraft;

/// SQL-backed persistence service
///
/// Wraps a SeaORM `DatabaseConnection` and implements the composition,
/// system catalog, organization, and grid-config store traits.
pub struct SqlPersistService {
    db: DatabaseConnection,
}

impl SqlPersistService {
    /// Create a new SqlPersistService with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Get a reference to the underlying database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Active model carrying all draft fields; id and timestamps are left for
/// the caller to set.
fn draft_active_model(draft: &ComponentDraft) -> salary_component::ActiveModel {
    salary_component::ActiveModel {
        code: Set(draft.code.clone()),
        name: Set(draft.name.clone()),
        component_type: Set(draft.component_type.clone()),
        nature: Set(draft.nature.clone()),
        tax_option: Set(Some(draft.tax_option.clone())),
        tax_deduction: Set(draft.tax_deduction),
        quota: Set(draft.quota.clone()),
        allow_exceed_quota: Set(draft.allow_exceed_quota),
        value_type: Set(Some(draft.value_type.clone())),
        value_calculation: Set(Some(draft.value_calculation.clone())),
        sum_scope: Set(draft.sum_scope.clone()),
        org_level: Set(draft.org_level.clone()),
        component_to_sum: Set(draft.component_to_sum.clone()),
        value_formula: Set(draft.value_formula.clone()),
        description: Set(draft.description.clone()),
        show_on_payslip: Set(draft.show_on_payslip.as_i32()),
        source: Set(draft.source.as_i32()),
        status: Set(draft.status.as_i32()),
        taxable_part: Set(draft.taxable_part.clone()),
        tax_exempt_part: Set(draft.tax_exempt_part.clone()),
        ..Default::default()
    }
}

/// Insert a component and its organization links, returning the new id
pub(crate) async fn insert_component(
    tx: &DatabaseTransaction,
    draft: &ComponentDraft,
) -> anyhow::Result<Uuid> {
    let id = Uuid::new_v4();
    let now = now();

    let mut model = draft_active_model(draft);
    model.id = Set(id);
    model.gmt_create = Set(now);
    model.gmt_modified = Set(now);

    salary_component::Entity::insert(model).exec(tx).await?;
    insert_org_links(tx, id, &draft.organization_ids, now).await?;

    Ok(id)
}

/// Rewrite all fields of a component and replace its organization links;
/// false when the row does not exist
pub(crate) async fn update_component(
    tx: &DatabaseTransaction,
    id: Uuid,
    draft: &ComponentDraft,
) -> anyhow::Result<bool> {
    let mut model = draft_active_model(draft);
    model.id = Set(id);
    model.gmt_modified = Set(now());

    match salary_component::Entity::update(model).exec(tx).await {
        Ok(_) => {}
        Err(DbErr::RecordNotUpdated) => return Ok(false),
        Err(e) => return Err(e.into()),
    }

    replace_org_links(tx, id, &draft.organization_ids).await?;

    Ok(true)
}

pub(crate) async fn insert_org_links(
    tx: &DatabaseTransaction,
    component_id: Uuid,
    organization_ids: &[Uuid],
    now: NaiveDateTime,
) -> anyhow::Result<()> {
    let links = organization_ids
        .iter()
        .map(|org_id| salary_component_org::ActiveModel {
            id: Set(Uuid::new_v4()),
            component_id: Set(component_id),
            organization_id: Set(*org_id),
            gmt_create: Set(now),
        })
        .collect::<Vec<salary_component_org::ActiveModel>>();

    salary_component_org::Entity::insert_many(links)
        .on_empty_do_nothing()
        .exec(tx)
        .await?;

    Ok(())
}

pub(crate) async fn delete_org_links(
    tx: &DatabaseTransaction,
    component_id: Uuid,
) -> anyhow::Result<()> {
    salary_component_org::Entity::delete_many()
        .filter(salary_component_org::Column::ComponentId.eq(component_id))
        .exec(tx)
        .await?;

    Ok(())
}

pub(crate) async fn replace_org_links(
    tx: &DatabaseTransaction,
    component_id: Uuid,
    organization_ids: &[Uuid],
) -> anyhow::Result<()> {
    delete_org_links(tx, component_id).await?;
    insert_org_links(tx, component_id, organization_ids, now()).await
}

/// Batch-load the organization ids of a set of components
pub(crate) async fn load_org_ids<C: ConnectionTrait>(
    db: &C,
    component_ids: &[Uuid],
) -> anyhow::Result<HashMap<Uuid, Vec<Uuid>>> {
    if component_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = salary_component_org::Entity::find()
        .filter(salary_component_org::Column::ComponentId.is_in(component_ids.iter().copied()))
        .all(db)
        .await?;

    let mut by_component: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for link in links {
        by_component
            .entry(link.component_id)
            .or_default()
            .push(link.organization_id);
    }

    Ok(by_component)
}
