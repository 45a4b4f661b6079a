//! # Utilities Library
//!
//! Shared utility functions for environment variables, dashboard date ranges
//! and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_opt, get_env_or, get_env_parse};
pub use time::{parse_date, today_utc, DateRange};
pub use validation::{validate_email, validate_not_empty};
