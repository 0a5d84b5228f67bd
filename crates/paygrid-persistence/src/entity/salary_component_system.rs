//! System catalog entity
//!
//! Predefined components shipped with the product. Rows are read-only to
//! users and deleted once migrated into the active table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "salary_component_system")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Component code, unique within the catalog
    pub code: String,
    pub name: String,
    pub component_type: String,
    /// income, deduction, or other
    pub nature: String,
    pub tax_option: Option<String>,
    pub tax_deduction: bool,
    pub quota: Option<String>,
    pub allow_exceed_quota: bool,
    pub value_type: Option<String>,
    /// auto_sum or formula
    pub value_calculation: Option<String>,
    pub sum_scope: Option<String>,
    pub org_level: Option<String>,
    pub component_to_sum: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub value_formula: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// yes=1, no=2, if_not_zero=3
    pub show_on_payslip: i32,
    pub gmt_create: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
