//! Filter condition model for paged listing queries
//!
//! A filter is one column-scoped predicate specification: an operator plus an
//! optional value. Operators form a closed set; unknown tags fail
//! deserialization at the API boundary rather than reaching the compiler.

use serde::{Deserialize, Serialize};

/// Operator tag of a single column filter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    Contains,
    NotContains,
    Equals,
    NotEquals,
    StartsWith,
    EndsWith,
    Empty,
    NotEmpty,
}

impl FilterOperator {
    /// `empty`/`notEmpty` ignore the value entirely; everything else needs one.
    pub fn requires_value(&self) -> bool {
        !matches!(self, FilterOperator::Empty | FilterOperator::NotEmpty)
    }
}

/// One field's filter: operator plus optional value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    pub condition: FilterOperator,
    #[serde(default)]
    pub value: Option<String>,
}

impl FilterCondition {
    pub fn new(condition: FilterOperator, value: Option<String>) -> Self {
        Self { condition, value }
    }

    /// The value to compile against, or `None` when the filter is to be
    /// treated as absent: a value-requiring operator with a missing or blank
    /// value emits no predicate.
    pub fn effective_value(&self) -> Option<&str> {
        let value = self.value.as_deref()?;
        if value.trim().is_empty() {
            return None;
        }
        Some(value)
    }
}
