//! # Chat Endpoints

use shared::{ChatDetail, ChatResponse};

use super::client::ApiClient;
use super::request::{path_id, ApiRequest};
use crate::core::error::Result;

#[tracing::instrument(skip(client))]
pub async fn get_all_chats(client: &ApiClient) -> Result<ChatResponse> {
    client.send(ApiRequest::get("/chats")).await
}

/// A chat with its full message history.
#[tracing::instrument(skip(client))]
pub async fn get_chat_by_id(client: &ApiClient, id: &str) -> Result<ChatDetail> {
    let id = path_id(id)?;
    client.send(ApiRequest::get(format!("/chats/{id}"))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{LoginRedirect, MemoryCredentialStore};
    use httpmock::prelude::*;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn chat_detail_includes_messages() {
        let server = MockServer::start_async().await;
        let client = ApiClient::builder(
            Arc::new(MemoryCredentialStore::with_tokens("A1", "R1")),
            Arc::new(LoginRedirect::new()),
        )
        .base_url(server.base_url())
        .build()
        .unwrap();

        server.mock(|when, then| {
            when.method(GET).path("/api/chats/c1");
            then.status(200).json_body(json!({
                "id": "c1",
                "participants": ["b1", "s1"],
                "createdAt": "2025-10-01T08:00:00.000Z",
                "updatedAt": "2025-10-01T09:00:00.000Z",
                "unreadCount": 0,
                "messages": [{
                    "id": "msg1",
                    "chatId": "c1",
                    "senderId": "b1",
                    "content": "Pin còn bảo hành không?",
                    "type": "text",
                    "createdAt": "2025-10-01T08:30:00.000Z"
                }]
            }));
        });

        let detail = get_chat_by_id(&client, "c1").await.unwrap();
        assert_eq!(detail.chat.participants.len(), 2);
        assert_eq!(detail.messages[0].content, "Pin còn bảo hành không?");
    }
}
