pub mod request;
pub mod response;
pub mod tree;

pub use request::{GenerateWorkingHoursRequest, WorkingHoursScope};
pub use response::GenerateWorkingHoursResult;
pub use tree::{DegreeNode, DepartmentNode, ShiftNode, WorkingHoursTree};

use crate::usecases::common::UseCaseMetadata;

pub struct GenerateWorkingHours;

impl UseCaseMetadata for GenerateWorkingHours {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "generate_working_hours"
    }

    fn title_key() -> &'static str {
        "nav.working_hours"
    }
}
