//! # Escrow Endpoints
//!
//! Single-escrow answers arrive either bare or wrapped in `{ "data": ... }`
//! depending on the route; both are accepted.

use shared::{Enveloped, Escrow, EscrowFilters, EscrowResponse, ReleaseEscrowRequest};

use super::client::ApiClient;
use super::request::{path_id, ApiRequest};
use crate::core::error::Result;

#[tracing::instrument(skip(client))]
pub async fn get_all_escrows(client: &ApiClient, filters: &EscrowFilters) -> Result<EscrowResponse> {
    client
        .send(ApiRequest::get("/escrows").query(filters)?)
        .await
}

#[tracing::instrument(skip(client))]
pub async fn get_escrow_by_id(client: &ApiClient, id: &str) -> Result<Escrow> {
    let id = path_id(id)?;
    let escrow: Enveloped<Escrow> = client.send(ApiRequest::get(format!("/escrows/{id}"))).await?;
    Ok(escrow.into_inner())
}

/// Release held funds to the seller.
#[tracing::instrument(skip(client))]
pub async fn release_escrow(client: &ApiClient, id: &str, reason: Option<String>) -> Result<Escrow> {
    let id = path_id(id)?;
    tracing::info!("Releasing escrow");
    let request = ApiRequest::post(format!("/escrows/{id}/release"))
        .json(&ReleaseEscrowRequest { reason })?;
    let escrow: Enveloped<Escrow> = client.send(request).await?;
    Ok(escrow.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{LoginRedirect, MemoryCredentialStore};
    use httpmock::prelude::*;
    use serde_json::json;
    use shared::EscrowStatus;
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

    fn escrow(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id": id,
            "orderId": "o1",
            "buyerId": "b1",
            "sellerId": "s1",
            "amountTotal": 5000000.0,
            "amountHold": 5000000.0,
            "status": status,
            "createdAt": "2025-10-01T08:00:00.000Z",
            "updatedAt": "2025-10-01T08:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn wrapped_and_bare_escrows_read_the_same() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        server.mock(|when, then| {
            when.method(GET).path("/api/escrows/e1");
            then.status(200).json_body(json!({ "success": true, "data": escrow("e1", "held") }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/escrows/e2");
            then.status(200).json_body(escrow("e2", "held"));
        });

        let wrapped = get_escrow_by_id(&client, "e1").await.unwrap();
        let bare = get_escrow_by_id(&client, "e2").await.unwrap();

        assert_eq!(wrapped.id, "e1");
        assert_eq!(bare.id, "e2");
        assert_eq!(wrapped.status, bare.status);
    }

    #[tokio::test]
    async fn release_posts_reason_and_unwraps() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/escrows/e1/release")
                .json_body(json!({ "reason": "Buyer confirmed delivery" }));
            then.status(200).json_body(json!({ "data": escrow("e1", "released") }));
        });

        let released = release_escrow(&client, "e1", Some("Buyer confirmed delivery".into()))
            .await
            .unwrap();
        mock.assert();
        assert_eq!(released.status, EscrowStatus::Released);
    }

    #[tokio::test]
    async fn listing_passes_filters() {
        let server = MockServer::start_async().await;
        let client = client_for(&server);
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/escrows")
                .query_param("status", "held")
                .query_param("buyerId", "b1");
            then.status(200).json_body(json!({ "data": [escrow("e1", "held")], "total": 1 }));
        });

        let filters = EscrowFilters {
            status: Some(EscrowStatus::Held),
            buyer_id: Some("b1".into()),
            ..Default::default()
        };
        let list = get_all_escrows(&client, &filters).await.unwrap();
        mock.assert();
        assert_eq!(list.held_amount(), 5000000.0);
    }
}
