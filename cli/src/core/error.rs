//! # fiuba-chat Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the client. Two layers
//! coexist:
//! - `ChatError`: a `thiserror` enum naming the failure kinds the client knows about
//! - `Result<T>`: an alias for `anyhow::Result<T>` so callers can attach context
//!
//! Only one of these kinds ever reaches the chat transcript: `RequestFailed`.
//! The chat session turns it into the variant's fixed fallback message; every
//! other kind surfaces on stderr through `main`.
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if path.is_file() {
//!     anyhow::bail!(ChatError::FileSystem(format!("{} is a file", path.display())));
//! }
//!
//! // Add context using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the chat client.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// Transport failure or an undecodable response body. HTTP status codes
    /// are not part of this decision.
    #[error("Request to {url} failed: {reason}")]
    RequestFailed { url: String, reason: String },

    /// The backend answered with its `{"detail": ...}` error shape.
    #[error("Backend reported an error: {0}")]
    Backend(String),

    #[error("Invalid user profile: {0}")]
    InvalidProfile(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
