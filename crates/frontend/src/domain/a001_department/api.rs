use crate::shared::api_utils::get_json;
use contracts::domain::a001_department::aggregate::DepartmentLookup;
use contracts::shared::api_response::ApiError;

pub async fn fetch_lookup() -> Result<Vec<DepartmentLookup>, ApiError> {
    get_json("/api/Departments/lookup").await
}
