use crate::shared::api_utils::{get_json, get_list, post_json, put_json};
use contracts::domain::a004_contracting_type::aggregate::{ContractingType, ContractingTypeId};
use contracts::domain::a004_contracting_type::filters::ContractingTypeFilters;
use contracts::domain::a004_contracting_type::form::ContractingTypeForm;
use contracts::shared::api_response::{ApiError, ListPage};

const PATH: &str = "/api/ContractingTypes";

pub async fn fetch_list(
    filters: ContractingTypeFilters,
) -> Result<ListPage<ContractingType>, ApiError> {
    get_list(PATH, &filters).await
}

pub async fn fetch_by_id(id: ContractingTypeId) -> Result<ContractingType, ApiError> {
    get_json(&format!("{}/{}", PATH, id)).await
}

/// Creates or updates depending on whether the form carries an id
pub async fn save(form: &ContractingTypeForm) -> Result<ContractingType, ApiError> {
    match form.id {
        Some(id) => put_json(&format!("{}/{}", PATH, id), form).await,
        None => post_json(PATH, form).await,
    }
}
