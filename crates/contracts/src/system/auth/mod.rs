use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into().trim().to_string(),
            password: password.into(),
        }
    }

    /// Both fields are required before the form can be submitted
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_trims_username() {
        let req = LoginRequest::new("  lambda ", " school ");
        assert_eq!(req.username, "lambda");
        assert_eq!(req.password, " school ");
        assert!(req.is_complete());
    }

    #[test]
    fn test_login_request_incomplete() {
        assert!(!LoginRequest::new("", "school").is_complete());
        assert!(!LoginRequest::new("lambda", "   ").is_complete());
    }

    #[test]
    fn test_login_response() {
        let resp: LoginResponse =
            serde_json::from_str(r#"{"token":"abc","message":"Welcome"}"#).unwrap();
        assert_eq!(resp.token, "abc");
        assert_eq!(resp.message, "Welcome");
    }
}
