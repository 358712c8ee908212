use crate::domain::common::{impl_localized_name, numeric_id};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Shift hours type identifier (morning, evening, night, ...)
    ShiftHoursTypeId
);

/// Kind of shift with its working window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftHoursType {
    #[serde(rename = "shiftHoursTypeId")]
    pub id: ShiftHoursTypeId,
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub hours: f64,
}

impl_localized_name!(ShiftHoursType);
