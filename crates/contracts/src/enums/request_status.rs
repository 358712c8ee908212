use serde::{Deserialize, Serialize};

/// Review status of a doctor scheduling request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn code(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "request.status.pending",
            RequestStatus::Approved => "request.status.approved",
            RequestStatus::Rejected => "request.status.rejected",
        }
    }

    pub fn all() -> Vec<RequestStatus> {
        vec![
            RequestStatus::Pending,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
