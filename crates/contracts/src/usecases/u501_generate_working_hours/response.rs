use serde::{Deserialize, Serialize};

/// `data` block of the generation response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerateWorkingHoursResult {
    pub added_count: u32,
    pub updated_count: u32,
    pub skipped_count: u32,
    pub completion_percentage: f64,
}

impl GenerateWorkingHoursResult {
    pub fn total_processed(&self) -> u32 {
        self.added_count + self.updated_count + self.skipped_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_response::ApiResponse;

    #[test]
    fn test_generation_response_parses() {
        let json = r#"{
            "success": true,
            "data": { "addedCount": 12, "updatedCount": 3, "skippedCount": 1, "completionPercentage": 87.5 },
            "messageEn": "Working hours generated",
            "messageAr": "تم توليد ساعات العمل"
        }"#;
        let resp: ApiResponse<GenerateWorkingHoursResult> = serde_json::from_str(json).unwrap();
        let result = resp.into_result().unwrap();
        assert_eq!(result.added_count, 12);
        assert_eq!(result.total_processed(), 16);
        assert_eq!(result.completion_percentage, 87.5);
    }
}
