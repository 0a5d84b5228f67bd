//! System catalog store trait
//!
//! Read access to the predefined catalog, the catalog-specific lookups
//! against the active table, and the atomic cross-table migration writes.

use async_trait::async_trait;
use uuid::Uuid;

use paygrid_api::paging::SystemPagingRequest;
use paygrid_api::Page;

use crate::model::{ComponentDraft, SystemComponent};

/// System catalog persistence operations
#[async_trait]
pub trait SystemCatalogPersistence: Send + Sync {
    /// Load all catalog entries, most recently created first
    async fn get_all(&self) -> anyhow::Result<Vec<SystemComponent>>;

    /// Load one catalog entry
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<SystemComponent>>;

    /// Filtered, paged catalog listing
    async fn get_paged(
        &self,
        request: &SystemPagingRequest,
    ) -> anyhow::Result<Page<SystemComponent>>;

    /// Whether a code is held by an active component row
    async fn active_code_exists(&self, code: &str) -> anyhow::Result<bool>;

    /// The active component row holding a code, if any
    async fn active_id_by_code(&self, code: &str) -> anyhow::Result<Option<Uuid>>;

    /// The organization whose parent id is null
    async fn root_organization_id(&self) -> anyhow::Result<Option<Uuid>>;

    /// Insert `draft` into the active table and delete catalog row `id`,
    /// both inside one transaction. Fails with NotFound (rolling back the
    /// insert) when the catalog row vanished since it was read.
    async fn move_into_composition(
        &self,
        id: Uuid,
        draft: &ComponentDraft,
    ) -> anyhow::Result<Uuid>;

    /// Rewrite active row `target` from `draft` and delete catalog row `id`,
    /// both inside one transaction
    async fn overwrite_composition(
        &self,
        id: Uuid,
        target: Uuid,
        draft: &ComponentDraft,
    ) -> anyhow::Result<()>;
}
