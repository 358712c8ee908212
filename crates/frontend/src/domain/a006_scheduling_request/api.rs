use crate::shared::api_utils::{get_list, post_json};
use contracts::domain::a006_scheduling_request::aggregate::SchedulingRequest;
use contracts::domain::a006_scheduling_request::filters::SchedulingRequestFilters;
use contracts::domain::a006_scheduling_request::form::CreateSchedulingRequest;
use contracts::shared::api_response::{ApiError, ListPage};

const PATH: &str = "/api/SchedulingRequests";

pub async fn fetch_list(
    filters: SchedulingRequestFilters,
) -> Result<ListPage<SchedulingRequest>, ApiError> {
    get_list(PATH, &filters).await
}

pub async fn create(request: &CreateSchedulingRequest) -> Result<SchedulingRequest, ApiError> {
    post_json(PATH, request).await
}
