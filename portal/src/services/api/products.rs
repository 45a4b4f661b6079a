//! # Product Moderation Endpoints
//!
//! `/api/products`: the admin listing and the approve / reject / status
//! transitions.

use shared::{
    ApproveProductRequest, Product, ProductFilters, ProductListResponse, RejectProductRequest,
    UpdateProductStatusRequest,
};

use super::client::ApiClient;
use super::request::{path_id, ApiRequest};
use crate::core::error::{ApiError, Result};

/// Every product regardless of status. Absent or empty filters are left out
/// of the query string.
#[tracing::instrument(skip(client))]
pub async fn get_all_products(
    client: &ApiClient,
    filters: &ProductFilters,
) -> Result<ProductListResponse> {
    let request = ApiRequest::get("/products/admin").query(filters)?;
    client.send(request).await
}

#[tracing::instrument(skip(client))]
pub async fn get_product_by_id(client: &ApiClient, id: &str) -> Result<Product> {
    let id = path_id(id)?;
    client.send(ApiRequest::get(format!("/products/{id}"))).await
}

/// Approve a pending listing. Without notes the body is `{}`.
#[tracing::instrument(skip(client))]
pub async fn approve_product(
    client: &ApiClient,
    id: &str,
    notes: Option<String>,
) -> Result<Product> {
    let id = path_id(id)?;
    let body = ApproveProductRequest { notes };
    tracing::info!("Approving product");
    client
        .send(ApiRequest::put(format!("/products/{id}/approve")).json(&body)?)
        .await
}

#[tracing::instrument(skip(client))]
pub async fn reject_product(client: &ApiClient, id: &str, reason: String) -> Result<Product> {
    let id = path_id(id)?;
    if reason.trim().is_empty() {
        return Err(ApiError::Validation("Rejection reason cannot be empty".to_string()));
    }
    tracing::info!("Rejecting product");
    client
        .send(ApiRequest::put(format!("/products/{id}/reject")).json(&RejectProductRequest { reason })?)
        .await
}

#[tracing::instrument(skip(client, update), fields(status = %update.status))]
pub async fn update_product_status(
    client: &ApiClient,
    id: &str,
    update: &UpdateProductStatusRequest,
) -> Result<Product> {
    let id = path_id(id)?;
    client
        .send(ApiRequest::put(format!("/products/{id}/status")).json(update)?)
        .await
}
