//! # Dashboard Endpoints
//!
//! Aggregated statistics for the overview page and its two charts.

use lib_utils::DateRange;
use serde::Serialize;
use shared::{DashboardResponse, OrdersChartResponse, RevenueChartApiResponse};

use super::client::ApiClient;
use super::request::ApiRequest;
use crate::core::error::Result;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RevenueQuery {
    start_date: String,
    end_date: String,
}

#[tracing::instrument(skip(client))]
pub async fn get_overview(client: &ApiClient) -> Result<DashboardResponse> {
    client.send(ApiRequest::get("/dashboard/overview")).await
}

#[tracing::instrument(skip(client))]
pub async fn get_orders_chart(client: &ApiClient) -> Result<OrdersChartResponse> {
    client.send(ApiRequest::get("/dashboard/orders-chart")).await
}

/// Revenue per period. Without a range the server picks its default window.
///
/// The range covers whole UTC days: `startDate` is the first instant of the
/// first day, `endDate` the last millisecond of the last.
#[tracing::instrument(skip(client))]
pub async fn get_revenue_chart(
    client: &ApiClient,
    range: Option<&DateRange>,
) -> Result<RevenueChartApiResponse> {
    let mut request = ApiRequest::get("/dashboard/revenue-chart");
    if let Some(range) = range {
        request = request.query(&RevenueQuery {
            start_date: range.start_param(),
            end_date: range.end_param(),
        })?;
    }
    client.send(request).await
}
