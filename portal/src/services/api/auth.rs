//! # Authentication Endpoints
//!
//! Login, logout and explicit session refresh, plus read access to the
//! locally cached session. None of these calls ever enter the 401 refresh
//! path: a rejected login must reach the caller as is.

use std::time::Instant;

use serde_json::Value;
use shared::{AuthUser, LoginRequest, LoginResponse, LogoutRequest};

use super::client::ApiClient;
use super::request::ApiRequest;
use super::tokens::parse_login;
use crate::core::error::Result;
use crate::session::CredentialKey;

/// Login with e-mail and password, storing both tokens and the profile.
#[tracing::instrument(skip(client, password), fields(email = %email))]
pub async fn login(client: &ApiClient, email: String, password: String) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = Instant::now();

    let request = ApiRequest::post("/auth/login")
        .json(&LoginRequest { email, password })?
        .without_refresh();

    let payload: Value = client.send(request).await.map_err(|e| {
        tracing::warn!(error = %e, duration_ms = start.elapsed().as_millis(), "Login failed");
        e
    })?;
    let (response, shape) = parse_login(&payload)?;
    tracing::debug!(shape = ?shape, "Login tokens parsed");

    let store = client.store();
    store.store_tokens(&response.tokens)?;
    store.set(CredentialKey::User, &serde_json::to_string(&response.user)?)?;

    tracing::info!(
        user_id = %response.user.id,
        duration_ms = start.elapsed().as_millis(),
        "Login successful"
    );
    Ok(response)
}

/// Tell the server to revoke the refresh token, then forget the session.
///
/// The server call is best-effort; local credentials are cleared whatever
/// it answers.
#[tracing::instrument(skip(client))]
pub async fn logout(client: &ApiClient) -> Result<()> {
    let refresh_token = client.store().refresh_token()?;
    let request = ApiRequest::post("/auth/logout")
        .json(&LogoutRequest { refresh_token })?
        .without_refresh();

    if let Err(e) = client.send_empty(request).await {
        tracing::warn!(error = %e, "Logout request failed, clearing local session anyway");
    }

    client.store().clear()?;
    tracing::info!("Logged out");
    Ok(())
}

/// Refresh now, sharing any refresh that is already running.
pub async fn refresh_session(client: &ApiClient) -> Result<()> {
    client.refresh_access_token().await.map(|_| ())
}

/// Cached profile from the last login. `None` if missing or unreadable.
pub fn current_user(client: &ApiClient) -> Result<Option<AuthUser>> {
    let cached = client.store().get(CredentialKey::User)?;
    Ok(cached.and_then(|raw| match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable cached profile");
            None
        }
    }))
}

pub fn is_authenticated(client: &ApiClient) -> Result<bool> {
    Ok(client
        .store()
        .access_token()?
        .is_some_and(|token| !token.is_empty()))
}

pub fn access_token(client: &ApiClient) -> Result<Option<String>> {
    client.store().access_token()
}

pub fn refresh_token(client: &ApiClient) -> Result<Option<String>> {
    client.store().refresh_token()
}
