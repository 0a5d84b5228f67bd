//! Active component service
//!
//! Code uniqueness is enforced among active rows only; an inactive row does
//! not block reuse of its code.

use anyhow::Result;
use uuid::Uuid;

use paygrid_api::model::{ComponentSource, ComponentStatus};
use paygrid_api::paging::PagingRequest;
use paygrid_api::{validate_request, Page};
use paygrid_common::PaygridError;
use paygrid_persistence::model::{ComponentDraft, SalaryComponent};
use paygrid_persistence::traits::CompositionPersistence;

/// Create a component, rejecting an active-code collision
pub async fn create(store: &dyn CompositionPersistence, draft: &ComponentDraft) -> Result<Uuid> {
    if store.is_code_taken(&draft.code, None).await? {
        return Err(PaygridError::Duplicate(draft.code.clone()).into());
    }

    store.create(draft).await
}

/// One component with its organization ids
pub async fn get_by_id(store: &dyn CompositionPersistence, id: Uuid) -> Result<SalaryComponent> {
    match store.get_by_id(id).await? {
        Some(component) => Ok(component),
        None => Err(PaygridError::NotFound(format!("salary component {}", id)).into()),
    }
}

/// All components, most recently created first
pub async fn get_all(store: &dyn CompositionPersistence) -> Result<Vec<SalaryComponent>> {
    store.get_all().await
}

/// Rewrite a component, rejecting an active-code collision with any other row
pub async fn update(
    store: &dyn CompositionPersistence,
    id: Uuid,
    draft: &ComponentDraft,
) -> Result<bool> {
    get_by_id(store, id).await?;

    if store.is_code_taken(&draft.code, Some(id)).await? {
        return Err(PaygridError::Duplicate(draft.code.clone()).into());
    }

    store.update(id, draft).await
}

/// Delete a component. System-provided components stay deletable only
/// through the catalog lifecycle, never here.
pub async fn delete(store: &dyn CompositionPersistence, id: Uuid) -> Result<bool> {
    let component = get_by_id(store, id).await?;

    if component.source == ComponentSource::System {
        return Err(PaygridError::InvalidState(
            "system-provided components cannot be deleted".into(),
        )
        .into());
    }

    store.delete(id).await
}

/// Set the status of one component
pub async fn update_status(
    store: &dyn CompositionPersistence,
    id: Uuid,
    status: ComponentStatus,
) -> Result<bool> {
    get_by_id(store, id).await?;
    store.update_status(id, status).await
}

/// Set the status of many components at once
pub async fn bulk_update_status(
    store: &dyn CompositionPersistence,
    ids: &[Uuid],
    status: ComponentStatus,
) -> Result<()> {
    store.bulk_update_status(ids, status).await
}

/// Filtered, paged listing
pub async fn get_paged(
    store: &dyn CompositionPersistence,
    request: &PagingRequest,
) -> Result<Page<SalaryComponent>> {
    validate_request(request)?;
    store.get_paged(request).await
}
