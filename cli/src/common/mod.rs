//! # Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers:
//!
//! - **`fs`**: filesystem helpers (directory creation, reading and writing files).
//! - **`http`**: `BackendClient`, the JSON client for the chunk-finding backend.
//! - **`ui`**: terminal rendering of the chat and the welcome screen.
//!
//! ```rust
//! use crate::common::{http::BackendClient, ui::terminal::TerminalView};
//! ```
//!

/// Filesystem helpers.
pub mod fs;
/// HTTP client for the chunk-finding backend.
pub mod http;
/// Terminal user interface.
pub mod ui;
