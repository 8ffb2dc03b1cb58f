//! # fiuba-chat Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the CLI and the argument
//! groups they share.
//!
//! ## Command Groups
//!
//! - `chat`: interactive chat session (classic or guided variant)
//! - `ask`: one-shot question, answer on stdout
//! - `graph`: backend administration (`graph create`)
//!
//! Each command defines its own arguments structure and handler function.
//!
use crate::chat::variant::Variant;
use crate::core::config::ConfigOverrides;
use clap::Args;
use std::path::PathBuf;

/// Implements `fiuba-chat ask`.
pub mod ask;
/// Implements `fiuba-chat chat`.
pub mod chat;
/// Implements `fiuba-chat graph ...`.
pub mod graph;

/// Options every command uses to locate its configuration and the backend.
#[derive(Args, Debug, Clone, Default)]
pub struct BackendArgs {
    /// Read configuration from this file instead of the user and project files.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Backend base URL, e.g. http://127.0.0.1:5000.
    #[arg(long, value_name = "URL", env = "FIUBA_CHAT_ENDPOINT")]
    pub endpoint: Option<String>,
}

impl BackendArgs {
    /// Config overrides carrying only the backend options.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config.clone(),
            endpoint: self.endpoint.clone(),
            ..Default::default()
        }
    }

    /// Same as [`BackendArgs::overrides`] plus a variant choice.
    pub fn overrides_with_variant(&self, variant: Option<Variant>) -> ConfigOverrides {
        ConfigOverrides {
            variant,
            ..self.overrides()
        }
    }
}
