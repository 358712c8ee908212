use crate::domain::a001_department::aggregate::DepartmentId;
use crate::domain::a002_shift_hours_type::aggregate::ShiftHoursTypeId;
use crate::domain::a003_scientific_degree::aggregate::ScientificDegreeId;
use crate::domain::common::impl_localized_name;
use serde::{Deserialize, Serialize};

/// Department → shift → scientific degree tree of a roster, as returned by
/// `GET /api/Rosters/{id}/WorkingHours/tree`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingHoursTree {
    pub departments: Vec<DepartmentNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentNode {
    pub department_id: DepartmentId,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub shifts: Vec<ShiftNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftNode {
    pub shift_hours_type_id: ShiftHoursTypeId,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub scientific_degrees: Vec<DegreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DegreeNode {
    pub scientific_degree_id: ScientificDegreeId,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub has_working_hours: bool,
    #[serde(default)]
    pub generated_days: u32,
    #[serde(default)]
    pub total_days: u32,
}

impl_localized_name!(DepartmentNode, ShiftNode, DegreeNode);

impl WorkingHoursTree {
    pub fn new(departments: Vec<DepartmentNode>) -> Self {
        Self { departments }
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    pub fn department(&self, id: DepartmentId) -> Option<&DepartmentNode> {
        self.departments.iter().find(|d| d.department_id == id)
    }

    /// Shift `shift_id` under department `dept_id`
    pub fn shift(&self, dept_id: DepartmentId, shift_id: ShiftHoursTypeId) -> Option<&ShiftNode> {
        self.department(dept_id).and_then(|d| d.shift(shift_id))
    }
}

impl DepartmentNode {
    pub fn shift(&self, id: ShiftHoursTypeId) -> Option<&ShiftNode> {
        self.shifts.iter().find(|s| s.shift_hours_type_id == id)
    }

    pub fn shift_ids(&self) -> impl Iterator<Item = ShiftHoursTypeId> + '_ {
        self.shifts.iter().map(|s| s.shift_hours_type_id)
    }

    /// Degrees of every shift of this department
    pub fn degree_ids(&self) -> impl Iterator<Item = ScientificDegreeId> + '_ {
        self.shifts.iter().flat_map(|s| s.degree_ids())
    }
}

impl ShiftNode {
    pub fn degree(&self, id: ScientificDegreeId) -> Option<&DegreeNode> {
        self.scientific_degrees
            .iter()
            .find(|d| d.scientific_degree_id == id)
    }

    pub fn degree_ids(&self) -> impl Iterator<Item = ScientificDegreeId> + '_ {
        self.scientific_degrees.iter().map(|d| d.scientific_degree_id)
    }
}

impl DegreeNode {
    /// Share of the roster days that already have generated hours, 0..=100
    pub fn completion_percentage(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        f64::from(self.generated_days.min(self.total_days)) * 100.0 / f64::from(self.total_days)
    }

    pub fn is_complete(&self) -> bool {
        self.total_days > 0 && self.generated_days >= self.total_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"[
        {
            "departmentId": 1,
            "nameEn": "Emergency",
            "nameAr": "الطوارئ",
            "shifts": [
                {
                    "shiftHoursTypeId": 10,
                    "nameEn": "Morning",
                    "scientificDegrees": [
                        { "scientificDegreeId": 100, "hasWorkingHours": true, "generatedDays": 15, "totalDays": 30 },
                        { "scientificDegreeId": 101, "hasWorkingHours": false, "generatedDays": 0, "totalDays": 30 }
                    ]
                },
                { "shiftHoursTypeId": 11, "nameEn": "Night", "scientificDegrees": [] }
            ]
        }
    ]"#;

    #[test]
    fn test_tree_payload_parses() {
        let tree: WorkingHoursTree = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(tree.departments.len(), 1);

        let dept = tree.department(DepartmentId::new(1)).unwrap();
        assert_eq!(dept.shift_ids().collect::<Vec<_>>(), vec![ShiftHoursTypeId::new(10), ShiftHoursTypeId::new(11)]);
        assert_eq!(dept.degree_ids().count(), 2);

        let shift = tree
            .shift(DepartmentId::new(1), ShiftHoursTypeId::new(10))
            .unwrap();
        let degree = shift.degree(ScientificDegreeId::new(100)).unwrap();
        assert_eq!(degree.completion_percentage(), 50.0);
        assert!(!degree.is_complete());
    }

    #[test]
    fn test_unknown_ids_are_none() {
        let tree: WorkingHoursTree = serde_json::from_str(PAYLOAD).unwrap();
        assert!(tree.department(DepartmentId::new(9)).is_none());
        assert!(tree
            .shift(DepartmentId::new(1), ShiftHoursTypeId::new(99))
            .is_none());
    }
}
