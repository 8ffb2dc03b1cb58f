//! # Chat Core (`chat`)
//!
//! File: cli/src/chat/mod.rs
//!
//! ## Overview
//!
//! This module holds the UI-independent state of a chat: the messages, the
//! append-only transcript, the guided variant's user profile, report export,
//! and the `ChatSession` that runs the submit operation.
//!
//! ## Architecture
//!
//! - `message`: `Sender` and `Message`
//! - `transcript`: append-only ordered `Transcript` and its report rendering
//! - `profile`: `Year` and `UserProfile` captured at the welcome screen
//! - `variant`: behaviour that differs between the classic and guided front-ends
//! - `session`: `ChatSession`, the `ChunkFinder` and `ChatView` seams
//! - `report`: writes the transcript to `chatbot_conversation_<date>.txt`
//!
//! The terminal front-end (`commands::chat`) and the HTTP client
//! (`common::http`) plug into `session` through its two traits.
//!

/// Sender and message types.
pub mod message;
/// User profile captured by the guided variant.
pub mod profile;
/// Transcript report export.
pub mod report;
/// The submit operation and its seams.
pub mod session;
/// Append-only transcript.
pub mod transcript;
/// Classic vs guided front-end behaviour.
pub mod variant;
