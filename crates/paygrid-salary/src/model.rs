//! Service-layer models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// The persisted domain models are defined next to the stores
pub use paygrid_persistence::model::{
    ComponentDraft, GridConfigColumn, GridConfigColumnSpec, GridConfigSave, OrganizationUnit,
    SalaryComponent, SystemComponent,
};

/// One node of the organization tree; `items` is absent for leaves
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationTreeNode {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrganizationTreeNode>>,
}
