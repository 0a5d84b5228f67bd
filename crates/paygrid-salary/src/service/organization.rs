//! Organization tree service

use anyhow::Result;
use uuid::Uuid;

use paygrid_persistence::model::OrganizationUnit;
use paygrid_persistence::traits::OrganizationPersistence;

use crate::model::OrganizationTreeNode;

/// The active organization units rebuilt into their tree
pub async fn get_tree(store: &dyn OrganizationPersistence) -> Result<Vec<OrganizationTreeNode>> {
    let units = store.find_active().await?;
    Ok(build_tree(&units, None))
}

/// Rebuild the parent/child tree from the flat unit list. Units whose
/// parent is not in the list (inactive or missing) are dropped with it.
fn build_tree(units: &[OrganizationUnit], parent: Option<Uuid>) -> Vec<OrganizationTreeNode> {
    units
        .iter()
        .filter(|unit| unit.parent_id == parent)
        .map(|unit| {
            let children = build_tree(units, Some(unit.id));
            OrganizationTreeNode {
                id: unit.id,
                name: unit.name.clone(),
                items: if children.is_empty() {
                    None
                } else {
                    Some(children)
                },
            }
        })
        .collect()
}
