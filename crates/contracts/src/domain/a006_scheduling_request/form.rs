use super::aggregate::DoctorId;
use crate::shared::validation::{check_optional_text, check_text, FieldErrors, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const REASON_MIN_LEN: usize = 10;
pub const REASON_MAX_LEN: usize = 500;
pub const NOTES_MAX_LEN: usize = 500;

/// Payload of `POST /api/SchedulingRequests`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchedulingRequest {
    pub doctor_id: Option<DoctorId>,
    pub requested_from: Option<NaiveDate>,
    pub requested_to: Option<NaiveDate>,
    pub reason: String,
    pub notes: Option<String>,
}

impl CreateSchedulingRequest {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.doctor_id.is_none() {
            errors.push(ValidationError::Required { field: "doctor_id" });
        }
        match (self.requested_from, self.requested_to) {
            (None, _) => errors.push(ValidationError::Required {
                field: "requested_from",
            }),
            (_, None) => errors.push(ValidationError::Required {
                field: "requested_to",
            }),
            (Some(from), Some(to)) if to < from => errors.push(ValidationError::DateBefore {
                field: "requested_to",
                other: "requested_from",
            }),
            _ => {}
        }
        errors.check(check_text(
            "reason",
            &self.reason,
            REASON_MIN_LEN,
            Some(REASON_MAX_LEN),
        ));
        errors.check(check_optional_text(
            "notes",
            self.notes.as_deref(),
            NOTES_MAX_LEN,
        ));
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn valid() -> CreateSchedulingRequest {
        CreateSchedulingRequest {
            doctor_id: Some(DoctorId::new(5)),
            requested_from: Some(date("2024-05-01")),
            requested_to: Some(date("2024-05-03")),
            reason: "Attending a cardiology conference".into(),
            notes: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_short_reason_is_rejected() {
        let req = CreateSchedulingRequest {
            reason: "sick".into(),
            ..valid()
        };
        let errors = req.validate().unwrap_err();
        assert_eq!(
            errors.for_field("reason"),
            Some(&ValidationError::TooShort {
                field: "reason",
                min: REASON_MIN_LEN
            })
        );
    }

    #[test]
    fn test_inverted_period_is_rejected() {
        let req = CreateSchedulingRequest {
            requested_from: Some(date("2024-05-10")),
            requested_to: Some(date("2024-05-03")),
            ..valid()
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.for_field("requested_to").is_some());
    }

    #[test]
    fn test_empty_form_reports_every_missing_field() {
        let errors = CreateSchedulingRequest::default().validate().unwrap_err();
        assert!(errors.for_field("doctor_id").is_some());
        assert!(errors.for_field("requested_from").is_some());
        assert!(errors.for_field("reason").is_some());
    }

    #[test]
    fn test_long_notes_are_rejected() {
        let req = CreateSchedulingRequest {
            notes: Some("x".repeat(NOTES_MAX_LEN + 1)),
            ..valid()
        };
        assert!(req.validate().unwrap_err().for_field("notes").is_some());
    }
}
