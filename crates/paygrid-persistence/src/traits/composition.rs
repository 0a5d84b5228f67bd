//! Composition store trait
//!
//! CRUD and paged-query execution for active salary components, including
//! the many-to-many relation to organization units.

use async_trait::async_trait;
use uuid::Uuid;

use paygrid_api::model::ComponentStatus;
use paygrid_api::paging::PagingRequest;
use paygrid_api::Page;

use crate::model::{ComponentDraft, SalaryComponent};

/// Active component persistence operations
#[async_trait]
pub trait CompositionPersistence: Send + Sync {
    /// Insert a new component and its organization links in one transaction,
    /// returning the generated id
    async fn create(&self, draft: &ComponentDraft) -> anyhow::Result<Uuid>;

    /// Load one component with its organization ids
    async fn get_by_id(&self, id: Uuid) -> anyhow::Result<Option<SalaryComponent>>;

    /// Load all components, most recently created first
    async fn get_all(&self) -> anyhow::Result<Vec<SalaryComponent>>;

    /// Rewrite all fields of a component and replace its organization links
    /// in one transaction; false when the row does not exist
    async fn update(&self, id: Uuid, draft: &ComponentDraft) -> anyhow::Result<bool>;

    /// Remove a component and its organization links in one transaction;
    /// false when the row does not exist
    async fn delete(&self, id: Uuid) -> anyhow::Result<bool>;

    /// Whether a code is held by an active row other than `exclude`
    async fn is_code_taken(&self, code: &str, exclude: Option<Uuid>) -> anyhow::Result<bool>;

    /// Set the status of one component; false when the row does not exist
    async fn update_status(&self, id: Uuid, status: ComponentStatus) -> anyhow::Result<bool>;

    /// Set the status of many components at once
    async fn bulk_update_status(
        &self,
        ids: &[Uuid],
        status: ComponentStatus,
    ) -> anyhow::Result<()>;

    /// Filtered, paged listing
    async fn get_paged(&self, request: &PagingRequest) -> anyhow::Result<Page<SalaryComponent>>;
}
