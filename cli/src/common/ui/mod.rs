//! # Terminal UI (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Everything the user sees in the terminal:
//!
//! - **`terminal`**: `TerminalView`, the `ChatView` that prints messages and
//!   drives the `Pensando...` spinner (`indicatif`), plus the banner and the
//!   in-chat help text (`console` styling).
//! - **`welcome`**: the guided variant's welcome screen, asking for the
//!   user's name and year of study (`dialoguer`).
//!
//! Colours are dropped automatically when stdout is not a terminal, so piped
//! output contains plain text only.
//!

/// Chat rendering: messages, spinner, banner, help.
pub mod terminal;
/// Welcome screen prompts for the guided variant.
pub mod welcome;
