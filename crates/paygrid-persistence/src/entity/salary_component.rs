//! Active salary component entity
//!
//! The live, user-owned component table. Codes are unique among rows with
//! active status; organization assignment lives in `salary_component_org`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "salary_component")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Component code, unique among active rows
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
    /// system=1, manual=2
    pub source: i32,
    /// active=1, inactive=2
    pub status: i32,
    pub taxable_part: Option<String>,
    pub tax_exempt_part: Option<String>,
    pub gmt_create: DateTime,
    pub gmt_modified: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
