//! # Marketplace API Client Module
//!
//! HTTP client for the marketplace REST API. Handles the session life-cycle
//! and every admin endpoint the portal uses.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs        - Module exports and documentation
//! ├── client.rs     - ApiClient, request pipeline and session refresh
//! ├── request.rs    - Replayable request description
//! ├── tokens.rs     - Token response layouts
//! ├── auth.rs       - Login, logout, explicit refresh, cached session
//! ├── users.rs      - User listing, details, update, ban
//! ├── products.rs   - Product moderation
//! ├── orders.rs     - Orders and status updates
//! ├── escrows.rs    - Escrow listing and release
//! ├── media.rs      - Media lookup and deletion
//! ├── chats.rs      - Chat listing and transcripts
//! └── dashboard.rs  - Overview and charts
//! ```

pub mod auth;
pub mod chats;
pub mod client;
pub mod dashboard;
pub mod escrows;
pub mod media;
pub mod orders;
pub mod products;
mod request;
pub mod tokens;
pub mod users;

pub use client::{ApiClient, ApiClientBuilder, RefreshState, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use tokens::{parse_token_pair, TokenShape};
