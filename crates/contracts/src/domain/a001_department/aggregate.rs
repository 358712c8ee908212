use crate::domain::common::{impl_localized_name, numeric_id};
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Hospital department identifier
    DepartmentId
);

/// Hospital department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    #[serde(rename = "departmentId")]
    pub id: DepartmentId,
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Short department entry for selects and filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentLookup {
    #[serde(rename = "departmentId")]
    pub id: DepartmentId,
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
}

impl_localized_name!(Department, DepartmentLookup);
