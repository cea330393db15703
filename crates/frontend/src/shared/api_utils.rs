//! API utilities for frontend-backend communication
//!
//! Builds API URLs and turns raw HTTP responses into typed results.

use contracts::domain::a001_article::ErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use crate::shared::error::ApiError;

/// Build a full API URL from the configured base and a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("http://localhost:9000/api", "/articles/5");
/// ```
pub fn api_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Read the body of a response and normalize it
pub async fn read_envelope<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::network(format!("Failed to read response: {}", e)))?;
    parse_envelope(status, &body)
}

/// Non-2xx statuses become an [`ApiError`] carrying the server's `message`;
/// a 2xx body is decoded into `T`.
pub fn parse_envelope<T>(status: u16, body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, ErrorBody::message_from(body)));
    }

    serde_json::from_str::<T>(body).map_err(|e| {
        log::warn!("Failed to parse response ({}): {}", status, e);
        ApiError::Unknown {
            status,
            message: None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_article::{ArticleResponse, MessageResponse};

    #[test]
    fn test_api_url() {
        assert_eq!(
            api_url("http://localhost:9000/api", "/articles"),
            "http://localhost:9000/api/articles"
        );
        assert_eq!(api_url("/api/", "articles/5"), "/api/articles/5");
    }

    #[test]
    fn test_parse_success() {
        let resp: MessageResponse =
            parse_envelope(200, r#"{"message":"Article 5 was deleted"}"#).unwrap();
        assert_eq!(resp.message, "Article 5 was deleted");
    }

    #[test]
    fn test_parse_auth_failure_keeps_message() {
        let err = parse_envelope::<MessageResponse>(401, r#"{"message":"Ouch: jwt expired"}"#)
            .unwrap_err();
        assert!(err.is_auth_failure());
        assert_eq!(err.server_message(), Some("Ouch: jwt expired"));
    }

    #[test]
    fn test_parse_not_found_without_body() {
        let err = parse_envelope::<ArticleResponse>(404, "").unwrap_err();
        assert_eq!(err, ApiError::NotFound { message: None });
    }

    #[test]
    fn test_parse_malformed_success_body() {
        let err = parse_envelope::<ArticleResponse>(201, r#"{"message":"Created"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Unknown {
                status: 201,
                message: None
            }
        );
    }
}
