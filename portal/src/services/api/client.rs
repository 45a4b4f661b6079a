//! # API Client
//!
//! HTTP client for the marketplace REST API, with transparent session
//! refresh.
//!
//! Every request carries the stored access token as a bearer credential.
//! When the server answers 401 the client refreshes the session once, no
//! matter how many requests failed at the same moment, and replays each of
//! them with the new token:
//!
//! ```text
//! request ── 401 ──► token rotated since sent? ── yes ──► replay with current token
//!                              │ no
//!                              ▼
//!                    join single-flight refresh ── ok ──► replay once
//!                              │ err
//!                              ▼
//!                    clear credentials, redirect to login, SessionExpired
//! ```
//!
//! A replayed request is never refreshed again; its 401 reaches the caller
//! as [`ApiError::Unauthorized`].

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use lib_utils::DateRange;
use reqwest::header::HeaderValue;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::{
    AuthUser, ChatDetail, ChatResponse, DashboardResponse, ErrorResponse, Escrow, EscrowFilters,
    EscrowResponse, GetUsersParams, GetUsersResponse, LoginResponse, Media, Order, OrderResponse,
    OrderStatus, OrdersChartResponse, Product, ProductFilters, ProductListResponse,
    RefreshTokenRequest, RevenueChartApiResponse, UpdateProductStatusRequest, UpdateUserRequest,
    User,
};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::request::ApiRequest;
use super::tokens::parse_token_pair;
use crate::core::error::{ApiError, Result};
use crate::core::service::AdminApi;
use crate::session::{CredentialStore, Navigator, SingleFlight};

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_PREFIX: &str = "/api";
const REFRESH_PATH: &str = "/auth/refresh-token";
const REQUEST_ID_HEADER: &str = "x-request-id";
const REFRESH_FLIGHT: &str = "session-refresh";

/// Whether a token refresh is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Refreshing,
}

type RefreshOutcome = Result<String>;

struct Inner {
    http: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
    refresh: SingleFlight<&'static str, RefreshOutcome>,
}

/// HTTP client for communicating with the marketplace API.
///
/// Cheap to clone; clones share credentials, the connection pool and the
/// refresh coordinator.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
    cancel: Option<CancellationToken>,
}

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Duration,
    store: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(ApiClient {
            inner: Arc::new(Inner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
                store: self.store,
                navigator: self.navigator,
                refresh: SingleFlight::new(),
            }),
            cancel: None,
        })
    }
}

impl ApiClient {
    /// Start building a client around a credential store and navigator.
    pub fn builder(
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ApiClientBuilder {
        ApiClientBuilder {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            store,
            navigator,
        }
    }

    /// Client against [`DEFAULT_BASE_URL`] with the default timeout.
    pub fn new(store: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>) -> Result<Self> {
        Self::builder(store, navigator).build()
    }

    /// Handle whose requests resolve to [`ApiError::Cancelled`] once `token`
    /// fires. The shared refresh keeps running for everyone else.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn refresh_state(&self) -> RefreshState {
        if self.inner.refresh.is_in_flight(&REFRESH_FLIGHT) {
            RefreshState::Refreshing
        } else {
            RefreshState::Idle
        }
    }

    pub(crate) fn store(&self) -> &dyn CredentialStore {
        self.inner.store.as_ref()
    }

    /// Send a request and decode its JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        self.cancellable(async {
            let response = self.execute(&request).await?;
            decode(response).await
        })
        .await
    }

    /// Send a request whose body is irrelevant.
    pub(crate) async fn send_empty(&self, request: ApiRequest) -> Result<()> {
        self.cancellable(async {
            self.execute(&request).await?;
            Ok(())
        })
        .await
    }

    /// Refresh the session now, joining any refresh already in flight.
    pub(crate) async fn refresh_access_token(&self) -> Result<String> {
        self.cancellable(self.join_refresh()).await
    }

    async fn cancellable<T>(&self, fut: impl Future<Output = Result<T>>) -> Result<T> {
        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => Err(ApiError::Cancelled),
                result = fut => result,
            },
            None => fut.await,
        }
    }

    async fn execute(&self, request: &ApiRequest) -> Result<Response> {
        let request_id = Uuid::new_v4().to_string();
        let sent_with = self.inner.store.access_token()?;

        let response = self.dispatch(request, sent_with.as_deref(), &request_id).await?;
        if response.status() != StatusCode::UNAUTHORIZED || !request.refresh_on_unauthorized {
            return check_status(response).await;
        }

        tracing::info!(
            request_id = %request_id,
            method = %request.method,
            path = %request.path,
            "Access token rejected"
        );
        let fresh = self.token_for_replay(sent_with.as_deref()).await?;

        let replayed = self.dispatch(request, Some(&fresh), &request_id).await?;
        if replayed.status() == StatusCode::UNAUTHORIZED {
            tracing::warn!(request_id = %request_id, path = %request.path, "Replay rejected after refresh");
        }
        check_status(replayed).await
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        access_token: Option<&str>,
        request_id: &str,
    ) -> Result<Response> {
        let mut builder = self
            .inner
            .http
            .request(request.method.clone(), self.inner.url(&request.path));

        if let Ok(value) = HeaderValue::from_str(request_id) {
            builder = builder.header(REQUEST_ID_HEADER, value);
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = access_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        tracing::debug!(request_id, method = %request.method, path = %request.path, "Sending request");
        builder.send().await.map_err(|e| {
            tracing::error!(request_id, path = %request.path, error = %e, "Request failed");
            ApiError::Network(e.to_string())
        })
    }

    /// Token to replay a rejected request with.
    ///
    /// If the stored token differs from the one the request carried, a
    /// refresh already completed after it was sent and the current token is
    /// used directly.
    async fn token_for_replay(&self, sent_with: Option<&str>) -> Result<String> {
        if let Some(current) = self.inner.store.access_token()? {
            if sent_with != Some(current.as_str()) {
                tracing::debug!("Access token rotated since request was sent");
                return Ok(current);
            }
        }
        self.join_refresh().await
    }

    async fn join_refresh(&self) -> Result<String> {
        let inner = Arc::clone(&self.inner);
        self.inner
            .refresh
            .run_exclusive(REFRESH_FLIGHT, move || refresh_session(inner))
            .await
            .unwrap_or_else(|_| Err(ApiError::SessionExpired("Token refresh was abandoned".to_string())))
    }
}

impl Inner {
    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_PREFIX, path)
    }

    /// Exchange the stored refresh token for a new pair and persist it.
    ///
    /// Goes straight to the HTTP client so the refresh call itself can never
    /// trigger another refresh.
    async fn rotate_tokens(&self) -> Result<String> {
        let refresh_token = self
            .store
            .refresh_token()?
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::SessionExpired("No refresh token available".to_string()))?;

        tracing::info!("Attempting to refresh token");
        let response = self
            .http
            .post(self.url(REFRESH_PATH))
            .json(&RefreshTokenRequest { refresh_token })
            .send()
            .await?;
        let payload: Value = decode(check_status(response).await?).await?;

        let (pair, shape) = parse_token_pair(&payload)?;
        if !shape.is_canonical() {
            tracing::warn!(shape = ?shape, "Refresh endpoint answered with a legacy response shape");
        }
        self.store.store_tokens(&pair)?;
        Ok(pair.access_token)
    }

    fn end_session(&self) {
        if let Err(e) = self.store.clear() {
            tracing::error!(error = %e, "Failed to clear credentials");
        }
        if !self.navigator.is_at_login() {
            self.navigator.redirect_to_login();
        }
    }
}

/// Body of the single-flight refresh. Runs on its own task, so exactly one
/// instance performs the clear-and-redirect on failure.
async fn refresh_session(inner: Arc<Inner>) -> RefreshOutcome {
    match inner.rotate_tokens().await {
        Ok(access_token) => {
            tracing::info!("Token refreshed successfully");
            Ok(access_token)
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to refresh token, ending session");
            inner.end_session();
            Err(match err {
                ApiError::SessionExpired(_) => err,
                other => ApiError::SessionExpired(other.to_string()),
            })
        }
    }
}

/// Pass 2xx through; turn anything else into the matching error, keeping
/// the server's `message` when it sent one.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.message)
        .ok()
        .filter(|m| !m.is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    if status == StatusCode::UNAUTHORIZED {
        Err(ApiError::Unauthorized(message))
    } else {
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl AdminApi for ApiClient {
    async fn login(&self, email: String, password: String) -> Result<LoginResponse> {
        super::auth::login(self, email, password).await
    }

    async fn logout(&self) -> Result<()> {
        super::auth::logout(self).await
    }

    async fn refresh_session(&self) -> Result<()> {
        super::auth::refresh_session(self).await
    }

    fn current_user(&self) -> Result<Option<AuthUser>> {
        super::auth::current_user(self)
    }

    fn is_authenticated(&self) -> Result<bool> {
        super::auth::is_authenticated(self)
    }

    async fn get_profile(&self) -> Result<User> {
        super::users::get_profile(self).await
    }

    async fn get_users(&self, params: &GetUsersParams) -> Result<GetUsersResponse> {
        super::users::get_users(self, params).await
    }

    async fn get_user_by_id(&self, id: &str) -> Result<User> {
        super::users::get_user_by_id(self, id).await
    }

    async fn update_user(&self, id: &str, update: &UpdateUserRequest) -> Result<User> {
        super::users::update_user(self, id, update).await
    }

    async fn ban_user(&self, id: &str) -> Result<User> {
        super::users::ban_user(self, id).await
    }

    async fn get_all_products(&self, filters: &ProductFilters) -> Result<ProductListResponse> {
        super::products::get_all_products(self, filters).await
    }

    async fn get_product_by_id(&self, id: &str) -> Result<Product> {
        super::products::get_product_by_id(self, id).await
    }

    async fn approve_product(&self, id: &str, notes: Option<String>) -> Result<Product> {
        super::products::approve_product(self, id, notes).await
    }

    async fn reject_product(&self, id: &str, reason: String) -> Result<Product> {
        super::products::reject_product(self, id, reason).await
    }

    async fn update_product_status(
        &self,
        id: &str,
        update: &UpdateProductStatusRequest,
    ) -> Result<Product> {
        super::products::update_product_status(self, id, update).await
    }

    async fn get_all_orders(&self, page: Option<u32>, limit: Option<u32>) -> Result<OrderResponse> {
        super::orders::get_all_orders(self, page, limit).await
    }

    async fn get_order_by_id(&self, id: &str) -> Result<Order> {
        super::orders::get_order_by_id(self, id).await
    }

    async fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        super::orders::update_order_status(self, id, status).await
    }

    async fn get_all_escrows(&self, filters: &EscrowFilters) -> Result<EscrowResponse> {
        super::escrows::get_all_escrows(self, filters).await
    }

    async fn get_escrow_by_id(&self, id: &str) -> Result<Escrow> {
        super::escrows::get_escrow_by_id(self, id).await
    }

    async fn release_escrow(&self, id: &str, reason: Option<String>) -> Result<Escrow> {
        super::escrows::release_escrow(self, id, reason).await
    }

    async fn get_media_by_id(&self, id: &str) -> Result<Media> {
        super::media::get_media_by_id(self, id).await
    }

    async fn delete_media(&self, id: &str) -> Result<()> {
        super::media::delete_media(self, id).await
    }

    async fn get_all_chats(&self) -> Result<ChatResponse> {
        super::chats::get_all_chats(self).await
    }

    async fn get_chat_by_id(&self, id: &str) -> Result<ChatDetail> {
        super::chats::get_chat_by_id(self, id).await
    }

    async fn get_overview(&self) -> Result<DashboardResponse> {
        super::dashboard::get_overview(self).await
    }

    async fn get_orders_chart(&self) -> Result<OrdersChartResponse> {
        super::dashboard::get_orders_chart(self).await
    }

    async fn get_revenue_chart(&self, range: Option<DateRange>) -> Result<RevenueChartApiResponse> {
        super::dashboard::get_revenue_chart(self, range.as_ref()).await
    }
}
