use crate::domain::common::{impl_localized_name, numeric_id};
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Scientific degree identifier (consultant, specialist, resident, ...)
    ScientificDegreeId
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScientificDegree {
    #[serde(rename = "scientificDegreeId")]
    pub id: ScientificDegreeId,
    pub name_en: String,
    #[serde(default)]
    pub name_ar: String,
    #[serde(default)]
    pub code: String,
}

impl_localized_name!(ScientificDegree);
