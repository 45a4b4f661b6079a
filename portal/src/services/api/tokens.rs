//! # Token Response Parsing
//!
//! The auth endpoints have answered with three layouts over time:
//!
//! ```text
//! { "accessToken": "...", "refreshToken": "..." }              flat (canonical)
//! { "data":   { "accessToken": "...", "refreshToken": "..." } }  legacy
//! { "tokens": { "accessToken": "...", "refreshToken": "..." } }  legacy
//! ```
//!
//! All three yield the same [`TokenPair`]. The flat layout is the contract
//! going forward; the others are accepted and reported so the drift can be
//! tracked down on the server side.

use serde_json::Value;
use shared::{AuthUser, LoginResponse, TokenPair};

use crate::core::error::{ApiError, Result};

/// Which layout a token payload used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    Flat,
    Data,
    Tokens,
}

impl TokenShape {
    pub fn is_canonical(&self) -> bool {
        matches!(self, TokenShape::Flat)
    }
}

fn non_empty_str<'a>(value: &'a Value, field: &str) -> Option<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn pair_at(value: &Value) -> Option<TokenPair> {
    Some(TokenPair {
        access_token: non_empty_str(value, "accessToken")?.to_string(),
        refresh_token: non_empty_str(value, "refreshToken")?.to_string(),
    })
}

/// Extract both tokens from any of the accepted layouts.
///
/// Layouts are tried in order flat, `data`, `tokens`; each needs both
/// tokens as non-empty strings.
pub fn parse_token_pair(payload: &Value) -> Result<(TokenPair, TokenShape)> {
    if let Some(pair) = pair_at(payload) {
        return Ok((pair, TokenShape::Flat));
    }
    if let Some(pair) = payload.get("data").and_then(pair_at) {
        return Ok((pair, TokenShape::Data));
    }
    if let Some(pair) = payload.get("tokens").and_then(pair_at) {
        return Ok((pair, TokenShape::Tokens));
    }
    Err(ApiError::Decode(
        "Invalid response format from refresh token API".to_string(),
    ))
}

/// Parse a login answer: tokens in any accepted layout plus the profile,
/// found at the top level or under `data`.
pub fn parse_login(payload: &Value) -> Result<(LoginResponse, TokenShape)> {
    let (tokens, shape) = parse_token_pair(payload)?;

    let user = payload
        .get("user")
        .or_else(|| payload.get("data").and_then(|data| data.get("user")))
        .ok_or_else(|| ApiError::Decode("Login response has no user profile".to_string()))?;
    let user: AuthUser = serde_json::from_value(user.clone())?;

    let response = LoginResponse {
        success: payload.get("success").and_then(Value::as_bool).unwrap_or(true),
        message: payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        tokens,
        user,
    };
    Ok((response, shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn expected() -> TokenPair {
        TokenPair {
            access_token: "access-2".to_string(),
            refresh_token: "refresh-2".to_string(),
        }
    }

    #[test]
    fn all_layouts_yield_the_same_pair() {
        let flat = json!({ "accessToken": "access-2", "refreshToken": "refresh-2" });
        let data = json!({ "success": true, "data": { "accessToken": "access-2", "refreshToken": "refresh-2" } });
        let tokens = json!({ "tokens": { "accessToken": "access-2", "refreshToken": "refresh-2" } });

        assert_eq!(parse_token_pair(&flat).unwrap(), (expected(), TokenShape::Flat));
        assert_eq!(parse_token_pair(&data).unwrap(), (expected(), TokenShape::Data));
        assert_eq!(parse_token_pair(&tokens).unwrap(), (expected(), TokenShape::Tokens));
    }

    #[test]
    fn partial_or_empty_tokens_are_rejected() {
        let only_access = json!({ "accessToken": "access-2" });
        let empty = json!({ "data": { "accessToken": "", "refreshToken": "refresh-2" } });
        let wrong_type = json!({ "tokens": { "accessToken": 5, "refreshToken": "refresh-2" } });

        for payload in [only_access, empty, wrong_type] {
            assert!(matches!(parse_token_pair(&payload), Err(ApiError::Decode(_))));
        }
    }

    #[test]
    fn flat_layout_wins_over_nested() {
        let both = json!({
            "accessToken": "access-2",
            "refreshToken": "refresh-2",
            "data": { "accessToken": "stale", "refreshToken": "stale" }
        });
        let (pair, shape) = parse_token_pair(&both).unwrap();
        assert_eq!(pair, expected());
        assert!(shape.is_canonical());
    }

    #[test]
    fn login_reads_nested_tokens_and_user() {
        let payload = json!({
            "success": true,
            "message": "Login successful",
            "tokens": { "accessToken": "a1", "refreshToken": "r1" },
            "user": { "id": "u1", "email": "admin@evmarket.vn", "role": "Admin", "isActive": true }
        });

        let (login, shape) = parse_login(&payload).unwrap();
        assert_eq!(shape, TokenShape::Tokens);
        assert_eq!(login.tokens.access_token, "a1");
        assert_eq!(login.user.id, "u1");
        assert_eq!(login.message, "Login successful");
    }

    #[test]
    fn login_without_user_is_rejected() {
        let payload = json!({ "accessToken": "a1", "refreshToken": "r1" });
        assert!(matches!(parse_login(&payload), Err(ApiError::Decode(_))));
    }
}
