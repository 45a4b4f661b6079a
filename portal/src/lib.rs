//! # EV Marketplace Admin Portal - Library Root
//!
//! Client side of the marketplace administration console. This library
//! crate holds everything the `portal` binary (`main.rs`) uses.
//!
//! ## Features
//!
//! - **Session handling**: login, logout and a persisted session file
//! - **Transparent token refresh**: one refresh call no matter how many
//!   requests hit an expired token at once
//! - **Admin services**: users, product moderation, orders, escrows, media,
//!   chats and dashboard statistics
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              portal (this crate)                       │
//! ├────────────────────────────────────────────────────────┤
//! │  cli / output   - clap front end, JSON and table output │
//! │  core           - ApiError, AdminApi trait              │
//! │  services::api  - ApiClient pipeline + domain endpoints │
//! │  session        - credential store, navigator,          │
//! │                   single-flight refresh coordinator     │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (Bearer access token)
//!          ▼
//! ┌────────────────────────────┐
//! │  Marketplace REST API      │
//! │  /api/auth, /api/users ... │
//! └────────────────────────────┘
//! ```
//!
//! ## Module Dependency Graph
//!
//! ```text
//! cli ──► core::AdminApi ◄── services::api::ApiClient ──► session
//!  │                                  │
//!  └──► output                        └──► shared (DTOs), lib-utils
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod output;
pub mod services;
pub mod session;
