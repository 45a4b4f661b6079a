use serde::{Deserialize, Serialize};

use super::user::UserRole;

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Access and refresh credential pair issued by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Login response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub tokens: TokenPair,
    pub user: AuthUser,
}

/// Refresh token request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Canonical refresh token response: `{ accessToken, refreshToken }`.
pub type RefreshTokenResponse = TokenPair;

/// Logout request
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Profile of the signed-in administrator, cached locally after login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub address: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
}

/// Error body returned by the API for failed requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_response_reads_nested_tokens() {
        let raw = json!({
            "success": true,
            "message": "Login successful",
            "tokens": { "accessToken": "a1", "refreshToken": "r1" },
            "user": {
                "id": "u-1",
                "email": "admin@evmarket.vn",
                "fullName": "Admin",
                "displayName": null,
                "phone": "0900000000",
                "avatarUrl": "",
                "bio": null,
                "address": "HCMC",
                "role": "Admin",
                "isActive": true
            }
        });

        let response: LoginResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.tokens.access_token, "a1");
        assert_eq!(response.tokens.refresh_token, "r1");
        assert_eq!(response.user.role, UserRole::Admin);
        assert!(response.user.display_name.is_none());
    }

    #[test]
    fn logout_request_omits_missing_token() {
        let body = serde_json::to_value(LogoutRequest::default()).unwrap();
        assert_eq!(body, json!({}));

        let body = serde_json::to_value(LogoutRequest {
            refresh_token: Some("r1".to_string()),
        })
        .unwrap();
        assert_eq!(body, json!({ "refreshToken": "r1" }));
    }

    #[test]
    fn error_response_tolerates_missing_code() {
        let error: ErrorResponse =
            serde_json::from_value(json!({ "message": "Email hoặc mật khẩu không đúng" })).unwrap();
        assert_eq!(error.status_code, None);
        assert_eq!(error.message, "Email hoặc mật khẩu không đúng");
    }
}
