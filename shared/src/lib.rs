//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the admin portal client and the
//! marketplace REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, refresh, logout and the cached admin profile
//!   - **[`dto::user`]**: User management
//!   - **[`dto::product`]**: Product moderation
//!   - **[`dto::order`]**: Orders
//!   - **[`dto::escrow`]**: Escrow holds and releases
//!   - **[`dto::media`]**: Uploaded media
//!   - **[`dto::chat`]**: Chats and messages
//!   - **[`dto::dashboard`]**: Dashboard statistics and charts
//!   - **[`dto::envelope`]**: `data` envelope tolerance
//! - **[`utils`]**: Display helpers shared by front ends
//!
//! ## Wire Format
//!
//! The marketplace API speaks camelCase JSON:
//! - Rust fields are snake_case and renamed with `#[serde(rename_all = "camelCase")]`
//! - Optional request fields are omitted when `None`
//! - Status enums keep an `Other` variant so a new server-side value never
//!   breaks decoding of the whole record
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "admin@evmarket.vn".to_string(),
//!     password: "secret".to_string(),
//! };
//! let body = serde_json::to_value(&request).unwrap();
//! assert_eq!(body["email"], "admin@evmarket.vn");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
