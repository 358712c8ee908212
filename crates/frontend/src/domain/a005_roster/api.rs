use crate::shared::api_utils::{get_json, get_list};
use contracts::domain::a005_roster::aggregate::{Roster, RosterId};
use contracts::domain::a005_roster::filters::RosterFilters;
use contracts::shared::api_response::{ApiError, ListPage};

const PATH: &str = "/api/Rosters";

pub async fn fetch_list(filters: RosterFilters) -> Result<ListPage<Roster>, ApiError> {
    get_list(PATH, &filters).await
}

pub async fn fetch_by_id(id: RosterId) -> Result<Roster, ApiError> {
    get_json(&format!("{}/{}", PATH, id)).await
}
