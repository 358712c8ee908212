use crate::domain::a001_department::aggregate::DepartmentId;
use crate::domain::common::numeric_id;
use crate::enums::RosterStatus;
use crate::shared::i18n::Lang;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Roster identifier
    RosterId
);

/// Staff roster covering a date range, optionally scoped to one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    #[serde(rename = "rosterId")]
    pub id: RosterId,
    pub title: String,
    pub department_id: Option<DepartmentId>,
    pub department_name_en: Option<String>,
    pub department_name_ar: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RosterStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Roster {
    pub fn department_name(&self, lang: Lang) -> String {
        let en = self.department_name_en.as_deref().unwrap_or_default();
        let ar = self.department_name_ar.as_deref().unwrap_or_default();
        lang.pick(en, ar).to_string()
    }

    /// Number of calendar days covered, both ends inclusive
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_deserializes() {
        let json = r#"{
            "rosterId": 3,
            "title": "March ER",
            "departmentId": 1,
            "departmentNameEn": "Emergency",
            "departmentNameAr": "الطوارئ",
            "startDate": "2024-03-01",
            "endDate": "2024-03-31",
            "status": "Published",
            "createdAt": null
        }"#;
        let roster: Roster = serde_json::from_str(json).unwrap();
        assert_eq!(roster.id, RosterId::new(3));
        assert_eq!(roster.status, RosterStatus::Published);
        assert_eq!(roster.total_days(), 31);
        assert_eq!(roster.department_name(Lang::Ar), "الطوارئ");
    }
}
