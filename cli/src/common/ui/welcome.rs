//! # Welcome Screen
//!
//! File: cli/src/common/ui/welcome.rs
//!
//! The guided variant starts by asking who is chatting. Values passed on the
//! command line (`--name`, `--year`) skip the matching prompt, which also lets
//! the guided chat run without a terminal.
//!
use crate::chat::profile::{UserProfile, Year};
use crate::core::error::Result;
use anyhow::Context;
use dialoguer::{Input, Select};
use tracing::debug;

/// Builds the user profile, prompting only for what was not provided.
pub fn resolve_profile(name: Option<String>, year: Option<Year>) -> Result<UserProfile> {
    let name = match name {
        Some(name) => name,
        None => prompt_name()?,
    };
    let year = match year {
        Some(year) => year,
        None => prompt_year()?,
    };
    let profile = UserProfile::new(&name, year)?;
    debug!("Welcome screen done: {:?}", profile);
    Ok(profile)
}

fn prompt_name() -> Result<String> {
    Input::<String>::new()
        .with_prompt("¡Bienvenido! ¿Cómo te llamás?")
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.trim().is_empty() {
                Err("El nombre no puede estar vacío")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .context("Failed to read name from the welcome screen")
}

fn prompt_year() -> Result<Year> {
    let labels: Vec<String> = Year::ALL.iter().map(|y| format!("{}° año", y)).collect();
    let index = Select::new()
        .with_prompt("¿En qué año de la carrera estás?")
        .items(&labels[..])
        .default(0)
        .interact()
        .context("Failed to read year from the welcome screen")?;
    Ok(Year::ALL[index])
}
