use crate::domain::common::{impl_localized_name, numeric_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Contracting type identifier
    ContractingTypeId
);

/// Employment contract category with its weekly hour limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractingType {
    #[serde(rename = "contractingTypeId")]
    pub id: ContractingTypeId,
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    /// Required weekly hours
    pub hours_per_week: u32,
    pub max_hours_per_week: u32,
    pub allow_overtime_hours: bool,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl_localized_name!(ContractingType);
