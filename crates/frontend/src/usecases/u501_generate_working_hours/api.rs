use crate::shared::api_utils::{get_json, post_json};
use contracts::domain::a005_roster::aggregate::RosterId;
use contracts::shared::api_response::ApiError;
use contracts::usecases::u501_generate_working_hours::{
    GenerateWorkingHoursRequest, GenerateWorkingHoursResult, WorkingHoursTree,
};

fn working_hours_path(roster_id: RosterId, action: &str) -> String {
    format!("/api/Rosters/{}/WorkingHours/{}", roster_id, action)
}

/// Department → shift → degree tree with generation progress per degree
pub async fn fetch_tree(roster_id: RosterId) -> Result<WorkingHoursTree, ApiError> {
    get_json(&working_hours_path(roster_id, "tree")).await
}

pub async fn generate(
    request: &GenerateWorkingHoursRequest,
) -> Result<GenerateWorkingHoursResult, ApiError> {
    post_json(&working_hours_path(request.roster_id, "generate"), request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_hours_path() {
        assert_eq!(
            working_hours_path(RosterId::new(7), "tree"),
            "/api/Rosters/7/WorkingHours/tree"
        );
        assert_eq!(
            working_hours_path(RosterId::new(7), "generate"),
            "/api/Rosters/7/WorkingHours/generate"
        );
    }
}
