//! System catalog service and migration workflow
//!
//! Migration is a move, not a copy: a catalog row and an active row never
//! coexist under the same identity. The explicit single-item move performs
//! no duplicate check of its own; `check_code_exists` is the caller
//! pre-flight for choosing between move and overwrite.

use anyhow::Result;
use uuid::Uuid;

use paygrid_api::model::{ComponentSource, ComponentStatus, MoveResult};
use paygrid_api::paging::SystemPagingRequest;
use paygrid_api::{validate_request, Page};
use paygrid_common::PaygridError;
use paygrid_persistence::model::{ComponentDraft, SystemComponent};
use paygrid_persistence::traits::SystemCatalogPersistence;

/// All catalog entries, most recently created first
pub async fn get_all(catalog: &dyn SystemCatalogPersistence) -> Result<Vec<SystemComponent>> {
    catalog.get_all().await
}

/// One catalog entry
pub async fn get_by_id(
    catalog: &dyn SystemCatalogPersistence,
    id: Uuid,
) -> Result<SystemComponent> {
    match catalog.get_by_id(id).await? {
        Some(component) => Ok(component),
        None => Err(PaygridError::NotFound(format!("system component {}", id)).into()),
    }
}

/// Whether the catalog entry's code is already held by an active component.
/// Read-only pre-flight for choosing between move and overwrite.
pub async fn check_code_exists(
    catalog: &dyn SystemCatalogPersistence,
    id: Uuid,
) -> Result<bool> {
    let component = get_by_id(catalog, id).await?;
    catalog.active_code_exists(&component.code).await
}

/// Move one catalog entry into the active table, returning the new id.
///
/// The insert and the catalog delete run as one storage transaction; on any
/// failure neither table changes.
pub async fn move_to_composition(
    catalog: &dyn SystemCatalogPersistence,
    id: Uuid,
) -> Result<Uuid> {
    let component = get_by_id(catalog, id).await?;
    let root_org = root_organization(catalog).await?;

    let draft = draft_from_system(&component, root_org);
    catalog.move_into_composition(id, &draft).await
}

/// Overwrite the active component sharing the catalog entry's code, then
/// consume the catalog entry. Returns the overwritten id.
pub async fn overwrite_composition(
    catalog: &dyn SystemCatalogPersistence,
    id: Uuid,
) -> Result<Uuid> {
    let component = get_by_id(catalog, id).await?;

    let target = match catalog.active_id_by_code(&component.code).await? {
        Some(target) => target,
        None => {
            return Err(PaygridError::InvalidState(format!(
                "no active component with code '{}' to overwrite",
                component.code
            ))
            .into());
        }
    };

    let root_org = root_organization(catalog).await?;

    let draft = draft_from_system(&component, root_org);
    catalog.overwrite_composition(id, target, &draft).await?;

    Ok(target)
}

/// Move a batch of catalog entries, best-effort per item.
///
/// The root organization is resolved once; without it the whole call aborts
/// before touching anything. After that, per-item failures never abort the
/// loop: an entry whose code is already active is skipped (counted failed
/// and recorded by code), any other failure is counted failed only.
pub async fn move_multiple(
    catalog: &dyn SystemCatalogPersistence,
    ids: &[Uuid],
) -> Result<MoveResult> {
    let root_org = root_organization(catalog).await?;

    let mut result = MoveResult::default();
    for &id in ids {
        match move_one(catalog, id, root_org).await {
            Ok(MoveOutcome::Moved) => result.record_success(),
            Ok(MoveOutcome::Skipped(code)) => result.record_skipped(code),
            Err(error) => {
                tracing::warn!(component_id = %id, error = %error, "bulk move: entry failed");
                result.record_failure();
            }
        }
    }

    Ok(result)
}

/// Filtered, paged catalog listing
pub async fn get_paged(
    catalog: &dyn SystemCatalogPersistence,
    request: &SystemPagingRequest,
) -> Result<Page<SystemComponent>> {
    validate_request(request)?;
    catalog.get_paged(request).await
}

enum MoveOutcome {
    Moved,
    Skipped(String),
}

async fn move_one(
    catalog: &dyn SystemCatalogPersistence,
    id: Uuid,
    root_org: Uuid,
) -> Result<MoveOutcome> {
    let component = get_by_id(catalog, id).await?;

    if catalog.active_code_exists(&component.code).await? {
        return Ok(MoveOutcome::Skipped(component.code));
    }

    let draft = draft_from_system(&component, root_org);
    catalog.move_into_composition(id, &draft).await?;

    Ok(MoveOutcome::Moved)
}

async fn root_organization(catalog: &dyn SystemCatalogPersistence) -> Result<Uuid> {
    match catalog.root_organization_id().await? {
        Some(root_org) => Ok(root_org),
        None => Err(PaygridError::InvalidState("no root organization configured".into()).into()),
    }
}

/// Field-for-field copy of a catalog entry into an active-component draft:
/// source forced to system, status forced to active, assigned to the root
/// organization only.
pub(crate) fn draft_from_system(component: &SystemComponent, root_org: Uuid) -> ComponentDraft {
    ComponentDraft {
        code: component.code.clone(),
        name: component.name.clone(),
        component_type: component.component_type.clone(),
        nature: component.nature.clone(),
        tax_option: component
            .tax_option
            .clone()
            .unwrap_or_else(|| "taxable".to_string()),
        tax_deduction: component.tax_deduction,
        quota: component.quota.clone(),
        allow_exceed_quota: component.allow_exceed_quota,
        value_type: component.value_type.clone(),
        value_calculation: component.value_calculation.clone(),
        sum_scope: component.sum_scope.clone(),
        org_level: component.org_level.clone(),
        component_to_sum: component.component_to_sum.clone(),
        value_formula: component.value_formula.clone(),
        description: component.description.clone(),
        show_on_payslip: component.show_on_payslip,
        source: ComponentSource::System,
        status: ComponentStatus::Active,
        taxable_part: None,
        tax_exempt_part: None,
        organization_ids: vec![root_org],
    }
}
