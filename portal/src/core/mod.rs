//! # Core Abstractions
//!
//! Error type and service trait shared by every front end.
//!
//! - **[`error`]**: [`ApiError`] and the [`Result<T>`] alias
//! - **[`service`]**: [`AdminApi`], the full admin surface as a trait
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portal::core::AdminApi;
//! use portal::services::api::ApiClient;
//! use portal::session::{LoginRedirect, MemoryCredentialStore};
//!
//! let client = ApiClient::new(
//!     Arc::new(MemoryCredentialStore::new()),
//!     Arc::new(LoginRedirect::new()),
//! )
//! .unwrap();
//! let api: Arc<dyn AdminApi> = Arc::new(client);
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, Result};
pub use service::AdminApi;
