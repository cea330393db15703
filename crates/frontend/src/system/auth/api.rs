use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, read_envelope};
use crate::shared::error::ApiError;

/// Login with username and password
pub async fn login(base: &str, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&api_url(base, "/login"))
        .header("Accept", "application/json")
        .json(request)
        .map_err(|e| ApiError::network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::network(format!("Failed to send request: {}", e)))?;

    read_envelope(response).await
}
