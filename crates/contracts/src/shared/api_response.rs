use crate::shared::i18n::{localize, Lang};
use crate::shared::pagination::PaginationMeta;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response envelope used by every backend endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub pagination: Option<PaginationMeta>,
    pub message_en: Option<String>,
    pub message_ar: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> ApiResponse<T> {
    /// Unwraps `data`, turning `success: false` (or a missing payload) into an [`ApiError`]
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.success || self.data.is_none() {
            return Err(ApiError::from_envelope(None, self));
        }
        self.data
            .ok_or_else(|| ApiError::decode(None, "response has no data"))
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Unwraps a list response. A successful response without a pagination
    /// block is treated as a single page holding every item.
    pub fn into_page(self) -> Result<ListPage<T>, ApiError> {
        if !self.success {
            return Err(ApiError::from_envelope(None, self));
        }
        let items = self.data.unwrap_or_default();
        let pagination = self.pagination.unwrap_or_else(|| single_page(items.len()));
        Ok(ListPage { items, pagination })
    }
}

fn single_page(len: usize) -> PaginationMeta {
    let len = len as u64;
    PaginationMeta {
        page: 1,
        page_size: len as u32,
        total_count: len,
        total_pages: u32::from(len > 0),
        has_next_page: false,
        has_previous_page: false,
        start_index: u64::from(len > 0),
        end_index: len,
    }
}

/// Displayable error produced at the fetch boundary. Controllers store it
/// raw; screens decide how to show it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// HTTP status, `None` for transport failures
    pub status: Option<u16>,
    pub message_en: String,
    pub message_ar: String,
    #[serde(default)]
    pub errors: Vec<String>,
}

impl ApiError {
    /// The request never produced an HTTP response
    pub fn transport(detail: impl fmt::Display) -> Self {
        Self {
            status: None,
            message_en: localize("error.network", Lang::En),
            message_ar: localize("error.network", Lang::Ar),
            errors: vec![detail.to_string()],
        }
    }

    /// Body could not be decoded
    pub fn decode(status: Option<u16>, detail: impl fmt::Display) -> Self {
        Self {
            status,
            message_en: localize("error.unexpected", Lang::En),
            message_ar: localize("error.unexpected", Lang::Ar),
            errors: vec![detail.to_string()],
        }
    }

    /// Builds the error from a failed envelope, keeping its bilingual messages
    pub fn from_envelope<T>(status: Option<u16>, envelope: ApiResponse<T>) -> Self {
        let message_en = envelope
            .message_en
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| localize("error.unexpected", Lang::En));
        let message_ar = envelope
            .message_ar
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| localize("error.unexpected", Lang::Ar));
        Self {
            status,
            message_en,
            message_ar,
            errors: envelope.errors,
        }
    }

    /// Non-2xx status without a readable envelope
    pub fn http(status: u16) -> Self {
        if status == 404 {
            return Self {
                status: Some(status),
                message_en: localize("common.not_found", Lang::En),
                message_ar: localize("common.not_found", Lang::Ar),
                errors: Vec::new(),
            };
        }
        Self {
            status: Some(status),
            message_en: format!("{} (HTTP {})", localize("error.unexpected", Lang::En), status),
            message_ar: format!("{} (HTTP {})", localize("error.unexpected", Lang::Ar), status),
            errors: Vec::new(),
        }
    }

    pub fn message(&self, lang: Lang) -> &str {
        lang.pick(&self.message_en, &self.message_ar)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message_en)?;
        if !self.errors.is_empty() {
            write!(f, ": {}", self.errors.join("; "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_into_page() {
        let json = r#"{
            "success": true,
            "data": [1, 2, 3],
            "pagination": {
                "page": 1, "pageSize": 3, "totalCount": 7, "totalPages": 3,
                "hasNextPage": true, "hasPreviousPage": false, "startIndex": 1, "endIndex": 3
            },
            "messageEn": "OK",
            "messageAr": "تم"
        }"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        let page = resp.into_page().unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(page.pagination.has_next_page);
    }

    #[test]
    fn test_failed_envelope_keeps_messages_and_errors() {
        let json = r#"{
            "success": false,
            "data": null,
            "messageEn": "Roster is locked",
            "messageAr": "الجدول مقفل",
            "errors": ["rosterId: locked"]
        }"#;
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str(json).unwrap();
        let err = resp.into_page().unwrap_err();
        assert_eq!(err.message(Lang::En), "Roster is locked");
        assert_eq!(err.message(Lang::Ar), "الجدول مقفل");
        assert_eq!(err.errors, vec!["rosterId: locked".to_string()]);
        assert_eq!(err.to_string(), "Roster is locked: rosterId: locked");
    }

    #[test]
    fn test_missing_pagination_is_single_page() {
        let resp: ApiResponse<Vec<u32>> =
            serde_json::from_str(r#"{ "success": true, "data": [5, 6] }"#).unwrap();
        let page = resp.into_page().unwrap();
        assert_eq!(page.pagination.total_pages, 1);
        assert_eq!(page.pagination.end_index, 2);
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let resp: ApiResponse<u32> = serde_json::from_str(r#"{ "success": true }"#).unwrap();
        assert!(resp.into_result().is_err());
    }

    #[test]
    fn test_not_found_status() {
        let err = ApiError::http(404);
        assert!(err.is_not_found());
        assert!(!ApiError::http(500).is_not_found());
        assert!(ApiError::transport("timeout").status.is_none());
    }
}
