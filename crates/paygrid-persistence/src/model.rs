//! Domain models for persistence operations
//!
//! Storage rows carry discrete integers; these models carry the enum
//! representations and, for components, the associated organization ids.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use paygrid_api::model::{ComponentSource, ComponentStatus, ShowOnPayslip};

use crate::entity;

/// An active (in use) salary component with its organization assignment
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryComponent {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub component_type: String,
    pub nature: String,
    pub tax_option: Option<String>,
    pub tax_deduction: bool,
    pub quota: Option<String>,
    pub allow_exceed_quota: bool,
    pub value_type: String,
    pub value_calculation: String,
    pub sum_scope: Option<String>,
    pub org_level: Option<String>,
    pub component_to_sum: Option<String>,
    pub value_formula: Option<String>,
    pub description: Option<String>,
    pub show_on_payslip: ShowOnPayslip,
    pub source: ComponentSource,
    pub status: ComponentStatus,
    pub taxable_part: Option<String>,
    pub tax_exempt_part: Option<String>,
    pub organization_ids: Vec<Uuid>,
    pub gmt_create: NaiveDateTime,
    pub gmt_modified: NaiveDateTime,
}

impl From<entity::salary_component::Model> for SalaryComponent {
    fn from(value: entity::salary_component::Model) -> Self {
        Self {
            id: value.id,
            code: value.code,
            name: value.name,
            component_type: value.component_type,
            nature: value.nature,
            tax_option: value.tax_option,
            tax_deduction: value.tax_deduction,
            quota: value.quota,
            allow_exceed_quota: value.allow_exceed_quota,
            value_type: value.value_type.unwrap_or_else(|| "currency".to_string()),
            value_calculation: value
                .value_calculation
                .unwrap_or_else(|| "formula".to_string()),
            sum_scope: value.sum_scope,
            org_level: value.org_level,
            component_to_sum: value.component_to_sum,
            value_formula: value.value_formula,
            description: value.description,
            show_on_payslip: ShowOnPayslip::from_i32(value.show_on_payslip),
            source: ComponentSource::from_i32(value.source),
            status: ComponentStatus::from_i32(value.status),
            taxable_part: value.taxable_part,
            tax_exempt_part: value.tax_exempt_part,
            // Filled in by the store once the link table has been consulted
            organization_ids: vec![],
            gmt_create: value.gmt_create,
            gmt_modified: value.gmt_modified,
        }
    }
}

/// A predefined component from the read-only system catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemComponent {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub component_type: String,
    pub nature: String,
    pub tax_option: Option<String>,
    pub tax_deduction: bool,
    pub quota: Option<String>,
    pub allow_exceed_quota: bool,
    pub value_type: String,
    pub value_calculation: String,
    pub sum_scope: Option<String>,
    pub org_level: Option<String>,
    pub component_to_sum: Option<String>,
    pub value_formula: Option<String>,
    pub description: Option<String>,
    pub show_on_payslip: ShowOnPayslip,
    pub gmt_create: NaiveDateTime,
}

impl From<entity::salary_component_system::Model> for SystemComponent {
    fn from(value: entity::salary_component_system::Model) -> Self {
        Self {
            id: value.id,
            code: value.code,
            name: value.name,
            component_type: value.component_type,
            nature: value.nature,
            tax_option: value.tax_option,
            tax_deduction: value.tax_deduction,
            quota: value.quota,
            allow_exceed_quota: value.allow_exceed_quota,
            value_type: value.value_type.unwrap_or_else(|| "currency".to_string()),
            value_calculation: value
                .value_calculation
                .unwrap_or_else(|| "formula".to_string()),
            sum_scope: value.sum_scope,
            org_level: value.org_level,
            component_to_sum: value.component_to_sum,
            value_formula: value.value_formula,
            description: value.description,
            show_on_payslip: ShowOnPayslip::from_i32(value.show_on_payslip),
            gmt_create: value.gmt_create,
        }
    }
}

/// Payload for creating or fully rewriting an active component, used by both
/// direct user input and catalog migration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDraft {
    pub code: String,
    pub name: String,
    pub component_type: String,
    pub nature: String,
    pub tax_option: String,
    pub tax_deduction: bool,
    pub quota: Option<String>,
    pub allow_exceed_quota: bool,
    pub value_type: String,
    pub value_calculation: String,
    pub sum_scope: Option<String>,
    pub org_level: Option<String>,
    pub component_to_sum: Option<String>,
    pub value_formula: Option<String>,
    pub description: Option<String>,
    pub show_on_payslip: ShowOnPayslip,
    pub source: ComponentSource,
    pub status: ComponentStatus,
    pub taxable_part: Option<String>,
    pub tax_exempt_part: Option<String>,
    pub organization_ids: Vec<Uuid>,
}

/// A flat organization unit, as consumed by the tree endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationUnit {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
    pub name: String,
}

impl From<entity::organization::Model> for OrganizationUnit {
    fn from(value: entity::organization::Model) -> Self {
        Self {
            id: value.id,
            parent_id: value.parent_id,
            name: value.name,
        }
    }
}

/// One saved column of a named grid layout
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfigColumn {
    pub id: Uuid,
    pub grid_name: String,
    pub column_name: String,
    pub column_order: i32,
    pub visible: bool,
    pub width: i32,
    pub pinned: bool,
}

impl From<entity::grid_config::Model> for GridConfigColumn {
    fn from(value: entity::grid_config::Model) -> Self {
        Self {
            id: value.id,
            grid_name: value.grid_name,
            column_name: value.column_name,
            column_order: value.column_order,
            visible: value.visible,
            width: value.width,
            pinned: value.pinned,
        }
    }
}

/// Column spec within a grid-config save request; order is assigned by
/// position on save.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfigColumnSpec {
    pub data_field: String,
    pub visible: bool,
    pub width: i32,
    pub pinned: bool,
}

/// Full layout save request for one named grid
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfigSave {
    pub grid_name: String,
    pub columns: Vec<GridConfigColumnSpec>,
}
