//! # Services
//!
//! External integrations. Currently only the marketplace REST API.

pub mod api;
