use serde::{Deserialize, Serialize};

/// Lifecycle status of a roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterStatus {
    Draft,
    Published,
    Archived,
}

impl RosterStatus {
    /// Value used in query strings and select options
    pub fn code(&self) -> &'static str {
        match self {
            RosterStatus::Draft => "Draft",
            RosterStatus::Published => "Published",
            RosterStatus::Archived => "Archived",
        }
    }

    /// Translation key of the display name
    pub fn label_key(&self) -> &'static str {
        match self {
            RosterStatus::Draft => "roster.status.draft",
            RosterStatus::Published => "roster.status.published",
            RosterStatus::Archived => "roster.status.archived",
        }
    }

    pub fn all() -> Vec<RosterStatus> {
        vec![
            RosterStatus::Draft,
            RosterStatus::Published,
            RosterStatus::Archived,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}
