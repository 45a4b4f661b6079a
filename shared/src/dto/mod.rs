//! # Data Transfer Objects (DTOs)
//!
//! All data structures exchanged with the marketplace REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, token refresh, logout, cached profile
//! - [`user`] - User listing, detail, update and ban
//! - [`product`] - Product moderation (approve, reject, status)
//! - [`order`] - Order listing and status updates
//! - [`escrow`] - Escrow listing and release
//! - [`media`] - Media lookup and deletion
//! - [`chat`] - Chat listing and transcripts
//! - [`dashboard`] - Overview statistics, order and revenue charts
//! - [`envelope`] - Optional `{ "data": ... }` wrapping
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "email": "admin@evmarket.vn", "password": "MyPassword123!" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "success": true,
//!   "message": "Login successful",
//!   "tokens": { "accessToken": "eyJhbGciOi...", "refreshToken": "eyJhbGciOi..." },
//!   "user": { "id": "u-1", "email": "admin@evmarket.vn", "role": "Admin", ... }
//! }
//! ```

/// Declares a string-backed wire enum with an `Other` fallback.
///
/// Known values map to dedicated variants; anything else is preserved
/// verbatim in `Other` so decoding never fails on a new server value.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Value not known to this client version.
            Other(String),
        }

        impl $name {
            /// Wire representation of the value.
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Other(value) => value.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($wire => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(value.to_string()))
            }
        }
    };
}

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod envelope;
pub mod escrow;
pub mod media;
pub mod order;
pub mod product;
pub mod user;

pub use auth::*;
pub use chat::*;
pub use dashboard::*;
pub use envelope::*;
pub use escrow::*;
pub use media::*;
pub use order::*;
pub use product::*;
pub use user::*;
