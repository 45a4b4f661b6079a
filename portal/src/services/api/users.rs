//! # User Management Endpoints
//!
//! `/api/users`: profile, listing, details, updates and bans.

use shared::{GetUsersParams, GetUsersResponse, UpdateUserRequest, User, UserListPayload};

use super::client::ApiClient;
use super::request::{path_id, ApiRequest};
use crate::core::error::Result;

/// Profile of the signed-in administrator, fresh from the server.
#[tracing::instrument(skip(client))]
pub async fn get_profile(client: &ApiClient) -> Result<User> {
    client.send(ApiRequest::get("/users/profile")).await
}

/// List users.
///
/// Older servers answer with a bare array; that is normalised into a single
/// page holding every user.
#[tracing::instrument(skip(client))]
pub async fn get_users(client: &ApiClient, params: &GetUsersParams) -> Result<GetUsersResponse> {
    let payload: UserListPayload = client.send(ApiRequest::get("/users").query(params)?).await?;
    let page = GetUsersResponse::from(payload);
    tracing::debug!(count = page.users.len(), total = page.total, "Users fetched");
    Ok(page)
}

#[tracing::instrument(skip(client))]
pub async fn get_user_by_id(client: &ApiClient, id: &str) -> Result<User> {
    let id = path_id(id)?;
    client.send(ApiRequest::get(format!("/users/{id}"))).await
}

#[tracing::instrument(skip(client, update))]
pub async fn update_user(client: &ApiClient, id: &str, update: &UpdateUserRequest) -> Result<User> {
    let id = path_id(id)?;
    client
        .send(ApiRequest::put(format!("/users/{id}")).json(update)?)
        .await
}

#[tracing::instrument(skip(client))]
pub async fn ban_user(client: &ApiClient, id: &str) -> Result<User> {
    let id = path_id(id)?;
    tracing::info!("Banning user");
    client.send(ApiRequest::post(format!("/users/{id}/ban"))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::session::{LoginRedirect, MemoryCredentialStore};
    use httpmock::prelude::*;
    use serde_json::json;
    use shared::UserRole;
    use std::sync::Arc;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::builder(
            Arc::new(MemoryCredentialStore::with_tokens("A1", "R1")),
            Arc::new(LoginRedirect::new()),
        )
        .base_url(server.base_url())
        .build()
        .unwrap()
    }

    fn user(id: &str) -> serde_json::Value {
        json!({ "id": id, "email": format!("{id}@evmarket.vn"), "role": "User", "isActive": true })
    }

    #[tokio::test]
    async fn bare_array_becomes_single_page() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!([user("u1"), user("u2"), user("u3")]));
        });

        let page = get_users(&client, &GetUsersParams::default()).await.unwrap();

        assert_eq!(page.users.len(), 3);
        assert_eq!(page.total, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn paged_listing_passes_filters() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/users")
                .query_param("page", "2")
                .query_param("role", "Admin")
                .query_param_missing("search");
            then.status(200).json_body(json!({
                "users": [user("u9")],
                "total": 11,
                "page": 2,
                "limit": 10,
                "totalPages": 2
            }));
        });

        let params = GetUsersParams {
            page: Some(2),
            role: Some(UserRole::Admin),
            search: Some(String::new()),
            ..Default::default()
        };
        let page = get_users(&client, &params).await.unwrap();

        mock.assert();
        assert_eq!(page.total, 11);
        assert_eq!(page.users[0].id, "u9");
    }

    #[tokio::test]
    async fn ban_posts_to_user() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        let mock = server.mock(|when, then| {
            when.method(POST).path("/api/users/u1/ban");
            then.status(200).json_body(json!({ "id": "u1", "email": "u1@evmarket.vn", "role": "User", "isActive": false }));
        });

        let banned = ban_user(&client, "u1").await.unwrap();
        mock.assert();
        assert!(!banned.is_active);
    }

    #[tokio::test]
    async fn update_sends_only_given_fields() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/api/users/u1")
                .json_body(json!({ "fullName": "Tran Thi B" }));
            then.status(200).json_body(user("u1"));
        });

        let update = UpdateUserRequest {
            full_name: Some("Tran Thi B".to_string()),
            ..Default::default()
        };
        update_user(&client, "u1", &update).await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn blank_id_is_rejected_locally() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        assert!(matches!(get_user_by_id(&client, "  ").await, Err(ApiError::Validation(_))));
    }
}
