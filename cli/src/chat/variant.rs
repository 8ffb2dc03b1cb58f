//! # Chat Variants
//!
//! File: cli/src/chat/variant.rs
//!
//! The client ships the behaviour of two front-ends:
//! - `Classic`: trims the query before sending, no welcome screen, no report.
//! - `Guided`: welcome screen with a user profile, sends the raw input,
//!   offers report export.
//!
//! Each variant also has its own fixed fallback message for failed requests.
//!
use serde::Deserialize;
use std::fmt;

/// Bot text shown by the classic variant when a request fails.
pub const CLASSIC_FALLBACK: &str = "Error al obtener respuesta del servidor.";
/// Bot text shown by the guided variant when a request fails.
pub const GUIDED_FALLBACK: &str = "Hubo un error al procesar tu solicitud.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Classic,
    Guided,
}

impl Variant {
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Variant::Classic => CLASSIC_FALLBACK,
            Variant::Guided => GUIDED_FALLBACK,
        }
    }

    /// Turns raw input into the query to send, or `None` when the input is
    /// blank and the submission must be ignored.
    pub fn prepare_query(&self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        match self {
            Variant::Classic => Some(trimmed.to_string()),
            Variant::Guided => Some(input.to_string()),
        }
    }

    pub fn has_welcome_screen(&self) -> bool {
        matches!(self, Variant::Guided)
    }

    pub fn supports_report(&self) -> bool {
        matches!(self, Variant::Guided)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Classic => write!(f, "classic"),
            Variant::Guided => write!(f, "guided"),
        }
    }
}
