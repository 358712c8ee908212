use crate::domain::a001_department::aggregate::DepartmentId;
use crate::domain::a002_shift_hours_type::aggregate::ShiftHoursTypeId;
use crate::domain::a003_scientific_degree::aggregate::ScientificDegreeId;
use crate::domain::a005_roster::aggregate::RosterId;
use serde::{Deserialize, Serialize};

/// Which part of the tree to generate for. `None` on a level means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingHoursScope {
    pub department_ids: Option<Vec<DepartmentId>>,
    pub shift_hours_type_ids: Option<Vec<ShiftHoursTypeId>>,
    pub scientific_degree_ids: Option<Vec<ScientificDegreeId>>,
}

impl WorkingHoursScope {
    /// Every level unrestricted
    pub fn is_all(&self) -> bool {
        self.department_ids.is_none()
            && self.shift_hours_type_ids.is_none()
            && self.scientific_degree_ids.is_none()
    }
}

/// Payload of `POST /api/Rosters/{id}/WorkingHours/generate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkingHoursRequest {
    pub roster_id: RosterId,
    #[serde(flatten)]
    pub scope: WorkingHoursScope,
    pub overwrite_existing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scope_serializes_as_nulls() {
        let req = GenerateWorkingHoursRequest {
            roster_id: RosterId::new(7),
            scope: WorkingHoursScope::default(),
            overwrite_existing: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rosterId": 7,
                "departmentIds": null,
                "shiftHoursTypeIds": null,
                "scientificDegreeIds": null,
                "overwriteExisting": false
            })
        );
    }

    #[test]
    fn test_partial_scope() {
        let scope = WorkingHoursScope {
            department_ids: Some(vec![DepartmentId::new(1)]),
            ..Default::default()
        };
        assert!(!scope.is_all());
        let json = serde_json::to_value(&scope).unwrap();
        assert_eq!(json["departmentIds"], serde_json::json!([1]));
    }
}
