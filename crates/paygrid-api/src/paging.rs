//! Paging request contracts for the active and system component listings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::filter::FilterCondition;
use crate::model::ComponentStatus;

fn default_page_number() -> u64 {
    1
}

fn default_page_size() -> u64 {
    15
}

/// Paging request for the active component listing.
///
/// Carries free-text search, an optional status restriction, organization
/// membership, and the named per-column filters. All filters combine with
/// logical AND.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct PagingRequest {
    #[validate(range(min = 1))]
    pub page_number: u64,
    #[validate(range(min = 1))]
    pub page_size: u64,
    pub search_text: Option<String>,
    pub status: Option<ComponentStatus>,
    pub organization_ids: Option<Vec<Uuid>>,

    pub code_filter: Option<FilterCondition>,
    pub name_filter: Option<FilterCondition>,
    pub type_filter: Option<FilterCondition>,
    pub nature_filter: Option<FilterCondition>,
    pub taxable_filter: Option<FilterCondition>,
    pub tax_deductible_filter: Option<FilterCondition>,
    pub quota_filter: Option<FilterCondition>,
    pub value_type_filter: Option<FilterCondition>,
    pub value_filter: Option<FilterCondition>,
    pub description_filter: Option<FilterCondition>,
    pub show_on_payslip_filter: Option<FilterCondition>,
    pub source_filter: Option<FilterCondition>,
}

impl Default for PagingRequest {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            search_text: None,
            status: None,
            organization_ids: None,
            code_filter: None,
            name_filter: None,
            type_filter: None,
            nature_filter: None,
            taxable_filter: None,
            tax_deductible_filter: None,
            quota_filter: None,
            value_type_filter: None,
            value_filter: None,
            description_filter: None,
            show_on_payslip_filter: None,
            source_filter: None,
        }
    }
}

/// Paging request for the read-only system catalog listing.
///
/// The catalog has no status, source, or organization assignment; it adds an
/// exact component-type restriction instead.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemPagingRequest {
    #[validate(range(min = 1))]
    pub page_number: u64,
    #[validate(range(min = 1))]
    pub page_size: u64,
    pub search_text: Option<String>,
    pub component_type: Option<String>,

    pub code_filter: Option<FilterCondition>,
    pub name_filter: Option<FilterCondition>,
    pub type_filter: Option<FilterCondition>,
    pub nature_filter: Option<FilterCondition>,
    pub taxable_filter: Option<FilterCondition>,
    pub tax_deductible_filter: Option<FilterCondition>,
    pub quota_filter: Option<FilterCondition>,
    pub value_type_filter: Option<FilterCondition>,
    pub value_filter: Option<FilterCondition>,
    pub description_filter: Option<FilterCondition>,
    pub show_on_payslip_filter: Option<FilterCondition>,
}

impl Default for SystemPagingRequest {
    fn default() -> Self {
        Self {
            page_number: default_page_number(),
            page_size: default_page_size(),
            search_text: None,
            component_type: None,
            code_filter: None,
            name_filter: None,
            type_filter: None,
            nature_filter: None,
            taxable_filter: None,
            tax_deductible_filter: None,
            quota_filter: None,
            value_type_filter: None,
            value_filter: None,
            description_filter: None,
            show_on_payslip_filter: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;
    use crate::filter::FilterOperator;

    #[test]
    fn test_defaults_from_empty_json() {
        let request: PagingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.page_number, 1);
        assert_eq!(request.page_size, 15);
        assert!(request.search_text.is_none());
        assert!(request.code_filter.is_none());
    }

    #[test]
    fn test_camel_case_field_names() {
        let request: PagingRequest = serde_json::from_str(
            r#"{
                "pageNumber": 3,
                "pageSize": 20,
                "searchText": "bonus",
                "status": "inactive",
                "codeFilter": {"condition": "startsWith", "value": "PC"}
            }"#,
        )
        .unwrap();
        assert_eq!(request.page_number, 3);
        assert_eq!(request.page_size, 20);
        assert_eq!(request.search_text.as_deref(), Some("bonus"));
        assert_eq!(request.status, Some(ComponentStatus::Inactive));

        let filter = request.code_filter.unwrap();
        assert_eq!(filter.condition, FilterOperator::StartsWith);
        assert_eq!(filter.value.as_deref(), Some("PC"));
    }

    #[test]
    fn test_page_bounds_validation() {
        let request = PagingRequest {
            page_number: 0,
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = PagingRequest {
            page_size: 0,
            ..Default::default()
        };
        assert!(request.validate().is_err());

        assert!(PagingRequest::default().validate().is_ok());
    }

    #[test]
    fn test_system_request_defaults() {
        let request: SystemPagingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.page_number, 1);
        assert_eq!(request.page_size, 15);
        assert!(request.component_type.is_none());
        assert!(request.validate().is_ok());
    }
}
