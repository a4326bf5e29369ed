//! Shared types for the OneReward loyalty platform
//!
//! Domain models, unified error codes and small utilities used by both the
//! reward server and any future client crates.
//!
//! - **models**: User / Restaurant / Offer / ledger entities and API payloads
//! - **error**: unified [`ErrorCode`] / [`AppError`] / [`ApiResponse`]
//! - **util**: timestamps and snowflake-style IDs

pub mod error;
pub mod models;
pub mod util;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
