//! Organization store trait

use async_trait::async_trait;

use crate::model::OrganizationUnit;

/// Organization unit persistence operations
#[async_trait]
pub trait OrganizationPersistence: Send + Sync {
    /// All active organization units, ordered by level, sort order, then name
    async fn find_active(&self) -> anyhow::Result<Vec<OrganizationUnit>>;
}
