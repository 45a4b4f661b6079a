//! # Service Traits
//!
//! Traits for dependency injection, so front ends can be driven by a test
//! double instead of a live server.

use async_trait::async_trait;
use lib_utils::DateRange;
use shared::{
    AuthUser, ChatDetail, ChatResponse, DashboardResponse, Escrow, EscrowFilters, EscrowResponse,
    GetUsersParams, GetUsersResponse, LoginResponse, Media, Order, OrderResponse, OrderStatus,
    OrdersChartResponse, Product, ProductFilters, ProductListResponse, RevenueChartApiResponse,
    UpdateProductStatusRequest, UpdateUserRequest, User,
};

use crate::core::error::Result;

/// Every admin operation the portal performs against the marketplace API.
#[async_trait]
pub trait AdminApi: Send + Sync {
    // Session

    /// Login with e-mail and password; stores the session on success.
    async fn login(&self, email: String, password: String) -> Result<LoginResponse>;

    /// Best-effort server logout; the local session is always cleared.
    async fn logout(&self) -> Result<()>;

    /// Refresh the session now.
    async fn refresh_session(&self) -> Result<()>;

    /// Profile cached at login.
    fn current_user(&self) -> Result<Option<AuthUser>>;

    fn is_authenticated(&self) -> Result<bool>;

    // Users

    async fn get_profile(&self) -> Result<User>;

    async fn get_users(&self, params: &GetUsersParams) -> Result<GetUsersResponse>;

    async fn get_user_by_id(&self, id: &str) -> Result<User>;

    async fn update_user(&self, id: &str, update: &UpdateUserRequest) -> Result<User>;

    async fn ban_user(&self, id: &str) -> Result<User>;

    // Products

    async fn get_all_products(&self, filters: &ProductFilters) -> Result<ProductListResponse>;

    async fn get_product_by_id(&self, id: &str) -> Result<Product>;

    async fn approve_product(&self, id: &str, notes: Option<String>) -> Result<Product>;

    async fn reject_product(&self, id: &str, reason: String) -> Result<Product>;

    async fn update_product_status(
        &self,
        id: &str,
        update: &UpdateProductStatusRequest,
    ) -> Result<Product>;

    // Orders

    async fn get_all_orders(&self, page: Option<u32>, limit: Option<u32>) -> Result<OrderResponse>;

    async fn get_order_by_id(&self, id: &str) -> Result<Order>;

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<Order>;

    // Escrows

    async fn get_all_escrows(&self, filters: &EscrowFilters) -> Result<EscrowResponse>;

    async fn get_escrow_by_id(&self, id: &str) -> Result<Escrow>;

    async fn release_escrow(&self, id: &str, reason: Option<String>) -> Result<Escrow>;

    // Media

    async fn get_media_by_id(&self, id: &str) -> Result<Media>;

    async fn delete_media(&self, id: &str) -> Result<()>;

    // Chats

    async fn get_all_chats(&self) -> Result<ChatResponse>;

    async fn get_chat_by_id(&self, id: &str) -> Result<ChatDetail>;

    // Dashboard

    async fn get_overview(&self) -> Result<DashboardResponse>;

    async fn get_orders_chart(&self) -> Result<OrdersChartResponse>;

    async fn get_revenue_chart(&self, range: Option<DateRange>) -> Result<RevenueChartApiResponse>;
}
