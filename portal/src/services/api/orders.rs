//! # Order Endpoints

use serde::Serialize;
use shared::{Order, OrderResponse, OrderStatus, UpdateOrderStatusRequest};

use super::client::ApiClient;
use super::request::{path_id, ApiRequest};
use crate::core::error::Result;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;

#[derive(Serialize)]
struct Pagination {
    page: u32,
    limit: u32,
}

/// One page of orders. `None` falls back to page 1 of 10.
#[tracing::instrument(skip(client))]
pub async fn get_all_orders(
    client: &ApiClient,
    page: Option<u32>,
    limit: Option<u32>,
) -> Result<OrderResponse> {
    let pagination = Pagination {
        page: page.unwrap_or(DEFAULT_PAGE),
        limit: limit.unwrap_or(DEFAULT_LIMIT),
    };
    client
        .send(ApiRequest::get("/orders").query(&pagination)?)
        .await
}

#[tracing::instrument(skip(client))]
pub async fn get_order_by_id(client: &ApiClient, id: &str) -> Result<Order> {
    let id = path_id(id)?;
    client.send(ApiRequest::get(format!("/orders/{id}"))).await
}

#[tracing::instrument(skip(client), fields(status = %status))]
pub async fn update_order_status(client: &ApiClient, id: &str, status: OrderStatus) -> Result<Order> {
    let id = path_id(id)?;
    client
        .send(ApiRequest::put(format!("/orders/{id}")).json(&UpdateOrderStatusRequest { status })?)
        .await
}
