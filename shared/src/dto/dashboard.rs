//! Dashboard statistics returned by `/api/dashboard/*`.
//!
//! Counters are `u64`, money amounts are `f64`. Every nested block defaults
//! when absent so a partially populated overview still decodes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GrowthDataPoint {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub new_users_today: u64,
    pub new_users_this_week: u64,
    pub new_users_this_month: u64,
    pub growth_data: Vec<GrowthDataPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusBreakdown {
    pub status: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TopProduct {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub view_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductStats {
    pub total_products: u64,
    pub published_products: u64,
    pub pending_products: u64,
    pub sold_products: u64,
    pub draft_products: u64,
    pub rejected_products: u64,
    pub status_breakdown: Vec<StatusBreakdown>,
    pub top_products: Vec<TopProduct>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct TrendDataPoint {
    pub date: String,
    pub count: u64,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderStats {
    pub total_orders: u64,
    pub pending_orders: u64,
    pub processing_orders: u64,
    pub completed_orders: u64,
    pub cancelled_orders: u64,
    pub total_order_value: f64,
    pub average_order_value: f64,
    pub trend_data: Vec<TrendDataPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletStats {
    pub total_wallets: u64,
    pub total_balance: f64,
    pub total_transactions: u64,
    pub total_deposits: f64,
    pub total_withdrawals: f64,
    pub today_transactions: u64,
    pub transaction_trends: Vec<TrendDataPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueChartData {
    pub period: String,
    pub revenue: f64,
    pub order_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueStats {
    pub today_revenue: f64,
    pub week_revenue: f64,
    pub month_revenue: f64,
    pub year_revenue: f64,
    pub total_revenue: f64,
    pub chart_data: Vec<RevenueChartData>,
}

/// All dashboard blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardOverview {
    pub users: UserStats,
    pub products: ProductStats,
    pub orders: OrderStats,
    pub wallets: WalletStats,
    pub revenue: RevenueStats,
}

/// `GET /api/dashboard/overview`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardResponse {
    #[serde(default)]
    pub success: bool,
    pub data: DashboardOverview,
    #[serde(default)]
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdersChartDatasets {
    pub total_orders: Vec<u64>,
    pub total_amount: Vec<f64>,
    pub delivered_orders: Vec<u64>,
    pub delivered_revenue: Vec<f64>,
    pub pending_orders: Vec<u64>,
    pub processing_orders: Vec<u64>,
    pub cancelled_orders: Vec<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdersChartSummary {
    pub total_orders: u64,
    pub total_amount: f64,
    pub delivered_orders: u64,
    pub delivered_revenue: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdersChartDateRange {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OrdersChartData {
    pub labels: Vec<String>,
    pub datasets: OrdersChartDatasets,
    pub summary: OrdersChartSummary,
    pub date_range: OrdersChartDateRange,
}

/// `GET /api/dashboard/orders-chart`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrdersChartResponse {
    #[serde(default)]
    pub success: bool,
    pub data: OrdersChartData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueChartApiData {
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub order_counts: Vec<u64>,
    pub total_revenue: f64,
    pub total_orders: u64,
    pub start_date: String,
    pub end_date: String,
}

/// `GET /api/dashboard/revenue-chart`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenueChartApiResponse {
    #[serde(default)]
    pub success: bool,
    pub data: RevenueChartApiData,
}
