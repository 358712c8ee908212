use super::aggregate::{ContractingType, ContractingTypeId};
use crate::shared::validation::{check_optional_text, check_text, FieldErrors, ValidationError};
use serde::{Deserialize, Serialize};

/// Create/update payload of a contracting type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractingTypeForm {
    /// `None` when creating
    #[serde(rename = "contractingTypeId", skip_serializing_if = "Option::is_none")]
    pub id: Option<ContractingTypeId>,
    pub name_en: String,
    pub name_ar: String,
    pub hours_per_week: u32,
    pub max_hours_per_week: u32,
    pub allow_overtime_hours: bool,
    pub is_active: bool,
}

impl Default for ContractingTypeForm {
    fn default() -> Self {
        Self {
            id: None,
            name_en: String::new(),
            name_ar: String::new(),
            hours_per_week: 40,
            max_hours_per_week: 48,
            allow_overtime_hours: false,
            is_active: true,
        }
    }
}

impl From<ContractingType> for ContractingTypeForm {
    fn from(ct: ContractingType) -> Self {
        Self {
            id: Some(ct.id),
            name_en: ct.name_en,
            name_ar: ct.name_ar,
            hours_per_week: ct.hours_per_week,
            max_hours_per_week: ct.max_hours_per_week,
            allow_overtime_hours: ct.allow_overtime_hours,
            is_active: ct.is_active,
        }
    }
}

impl ContractingTypeForm {
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check(check_text("name_en", &self.name_en, 2, Some(100)));
        errors.check(check_optional_text("name_ar", Some(&self.name_ar), 100));
        if self.hours_per_week == 0 {
            errors.push(ValidationError::NotPositive {
                field: "hours_per_week",
            });
        }
        if self.max_hours_per_week < self.hours_per_week {
            errors.push(ValidationError::LessThan {
                field: "max_hours_per_week",
                other: "hours_per_week",
            });
        }
        errors.into_result()
    }
}
