//! Shared API models: page wrapper, bulk move result, discrete-value enums.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Generic pagination wrapper for listing responses
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub total_records: u64,
    pub page_number: u64,
    pub page_size: u64,
    pub pages_available: u64,
    pub data: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_records: 0,
            page_number: 1,
            page_size: 0,
            pages_available: 0,
            data: vec![],
        }
    }
}

impl<T> Page<T> {
    pub fn new(total_records: u64, page_number: u64, page_size: u64, data: Vec<T>) -> Self {
        Self {
            total_records,
            page_number,
            page_size,
            pages_available: if page_size > 0 {
                total_records.div_ceil(page_size)
            } else {
                0
            },
            data,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Aggregate outcome of a bulk move, the sole failure-reporting surface of
/// that operation. A skipped code counts toward the failed total as well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResult {
    pub success_count: u32,
    pub failed_count: u32,
    pub skipped_codes: Vec<String>,
}

impl MoveResult {
    pub fn record_success(&mut self) {
        self.success_count += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed_count += 1;
    }

    pub fn record_skipped(&mut self, code: String) {
        self.failed_count += 1;
        self.skipped_codes.push(code);
    }
}

/// Lifecycle status of an active salary component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    #[default]
    Active,
    Inactive,
}

impl ComponentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentStatus::Active => "active",
            ComponentStatus::Inactive => "inactive",
        }
    }

    /// Discrete storage representation
    pub fn as_i32(&self) -> i32 {
        match self {
            ComponentStatus::Active => 1,
            ComponentStatus::Inactive => 2,
        }
    }

    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => ComponentStatus::Active,
            _ => ComponentStatus::Inactive,
        }
    }
}

impl Display for ComponentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ComponentStatus::Active),
            "inactive" => Ok(ComponentStatus::Inactive),
            _ => Err(format!("unknown component status: {}", s)),
        }
    }
}

/// Origin of an active salary component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentSource {
    System,
    #[default]
    Manual,
}

impl ComponentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentSource::System => "system",
            ComponentSource::Manual => "manual",
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            ComponentSource::System => 1,
            ComponentSource::Manual => 2,
        }
    }

    pub fn from_i32(value: i32) -> Self {
        match value {
            1 => ComponentSource::System,
            _ => ComponentSource::Manual,
        }
    }
}

impl Display for ComponentSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ComponentSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ComponentSource::System),
            "manual" => Ok(ComponentSource::Manual),
            _ => Err(format!("unknown component source: {}", s)),
        }
    }
}

/// Whether a component line is printed on the payslip
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowOnPayslip {
    #[default]
    Yes,
    No,
    IfNotZero,
}

impl ShowOnPayslip {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShowOnPayslip::Yes => "yes",
            ShowOnPayslip::No => "no",
            ShowOnPayslip::IfNotZero => "if_not_zero",
        }
    }

    pub fn as_i32(&self) -> i32 {
        match self {
            ShowOnPayslip::Yes => 1,
            ShowOnPayslip::No => 2,
            ShowOnPayslip::IfNotZero => 3,
        }
    }

    pub fn from_i32(value: i32) -> Self {
        match value {
            2 => ShowOnPayslip::No,
            3 => ShowOnPayslip::IfNotZero,
            _ => ShowOnPayslip::Yes,
        }
    }
}

impl Display for ShowOnPayslip {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShowOnPayslip {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(ShowOnPayslip::Yes),
            "no" => Ok(ShowOnPayslip::No),
            "if_not_zero" => Ok(ShowOnPayslip::IfNotZero),
            _ => Err(format!("unknown show-on-payslip value: {}", s)),
        }
    }
}
