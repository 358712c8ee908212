//! API utilities for frontend-backend communication
//!
//! Every backend endpoint answers with an [`ApiResponse`] envelope. The
//! helpers here send the request through `gloo-net`, unwrap the envelope and
//! turn every failure (transport, HTTP status, `success: false`, bad JSON)
//! into an [`ApiError`].

use crate::shared::list_query::query_string::with_query;
use contracts::shared::api_response::{ApiError, ApiResponse, ListPage};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Port the REST backend listens on
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location, using the
/// backend port. Empty when there is no window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a list endpoint with the filters in the query string
pub async fn get_list<T, F>(path: &str, filters: &F) -> Result<ListPage<T>, ApiError>
where
    T: DeserializeOwned,
    F: Serialize,
{
    let path = with_query(path, filters).map_err(|e| ApiError::decode(None, e))?;
    let response = Request::get(&api_url(&path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_envelope::<Vec<T>>(response).await?.into_page()
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_envelope::<T>(response).await?.into_result()
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::decode(None, e))?
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_envelope::<T>(response).await?.into_result()
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let response = Request::put(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::decode(None, e))?
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_envelope::<T>(response).await?.into_result()
}

/// Reads the envelope. Non-2xx responses keep the backend's messages when the
/// body is an envelope, and fall back to a generic status error otherwise.
async fn read_envelope<T: DeserializeOwned>(
    response: Response,
) -> Result<ApiResponse<T>, ApiError> {
    let status = response.status();
    let ok = response.ok();
    let body = response.text().await.map_err(ApiError::transport)?;
    parse_envelope(status, ok, &body)
}

fn parse_envelope<T: DeserializeOwned>(
    status: u16,
    ok: bool,
    body: &str,
) -> Result<ApiResponse<T>, ApiError> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) if ok => Ok(envelope),
        Ok(envelope) => Err(ApiError::from_envelope(Some(status), envelope)),
        Err(_) if !ok => {
            log::warn!("HTTP {} without a readable envelope", status);
            Err(ApiError::http(status))
        }
        Err(e) => Err(ApiError::decode(Some(status), e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::i18n::Lang;

    #[test]
    fn test_error_status_keeps_backend_messages() {
        let body = r#"{"success":false,"data":null,"messageEn":"Roster not found","messageAr":"الجدول غير موجود"}"#;
        let err = parse_envelope::<u32>(404, false, body).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.message(Lang::En), "Roster not found");
    }

    #[test]
    fn test_error_status_without_envelope() {
        let err = parse_envelope::<u32>(502, false, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.status, Some(502));
    }

    #[test]
    fn test_bad_json_on_success_is_decode_error() {
        let err = parse_envelope::<u32>(200, true, "{").unwrap_err();
        assert_eq!(err.status, Some(200));
        assert_eq!(err.errors.len(), 1);
    }

    #[test]
    fn test_failed_envelope_on_200_surfaces_on_unwrap() {
        let body = r#"{"success":false,"messageEn":"Locked","messageAr":"مقفل","errors":["x"]}"#;
        let envelope = parse_envelope::<u32>(200, true, body).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message(Lang::Ar), "مقفل");
    }
}
