use crate::domain::common::numeric_id;
use crate::enums::RequestStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Scheduling request identifier
    SchedulingRequestId
);

numeric_id!(
    /// Doctor (staff member) identifier
    DoctorId
);

/// A doctor's request to be scheduled (or excused) for a period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingRequest {
    #[serde(rename = "schedulingRequestId")]
    pub id: SchedulingRequestId,
    pub doctor_id: DoctorId,
    pub doctor_name: String,
    pub requested_from: NaiveDate,
    pub requested_to: NaiveDate,
    pub reason: String,
    pub notes: Option<String>,
    pub status: RequestStatus,
    pub requested_at: Option<DateTime<Utc>>,
}
