//! # Session State
//!
//! Everything the request pipeline needs to keep a session alive, injected
//! rather than global:
//!
//! - [`store`]: where the access token, refresh token and profile live
//! - [`navigator`]: how to send the front end back to login
//! - [`single_flight`]: the coordinator that keeps token refresh to one call

pub mod navigator;
pub mod single_flight;
pub mod store;

pub use navigator::{LoginRedirect, Navigator};
pub use single_flight::{FlightAbandoned, SingleFlight};
pub use store::{CredentialKey, CredentialStore, FileCredentialStore, MemoryCredentialStore};
