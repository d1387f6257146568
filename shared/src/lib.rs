//! Shared types for the coworking booking platform
//!
//! Common types used across multiple crates including wire models for the
//! pricing engine, error types and response structures.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
