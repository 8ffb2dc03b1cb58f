//! # Backend Graph Command Group
//!
//! File: cli/src/commands/graph/mod.rs
//!
//! ## Overview
//!
//! `fiuba-chat graph create` asks the backend to build its knowledge graph
//! and vector index from its source document (`POST /create_kg`). The chat
//! itself never calls this; it exists for whoever operates the backend.
//!
//! ```bash
//! fiuba-chat graph create --endpoint http://127.0.0.1:5000
//! ```
//!
use crate::commands::BackendArgs;
use crate::common::http::BackendClient;
use crate::core::config;
use crate::core::error::Result;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::info;

#[derive(Parser, Debug)]
pub struct GraphArgs {
    #[command(subcommand)]
    command: GraphCommand,
}

#[derive(Subcommand, Debug)]
enum GraphCommand {
    /// Build the backend's knowledge graph and vector index.
    Create(CreateArgs),
}

#[derive(Parser, Debug)]
struct CreateArgs {
    #[command(flatten)]
    backend: BackendArgs,
}

pub async fn handle_graph(args: GraphArgs) -> Result<()> {
    match args.command {
        GraphCommand::Create(args) => handle_create(args).await?,
    }
    Ok(())
}

async fn handle_create(args: CreateArgs) -> Result<()> {
    let config = config::load_config(&args.backend.overrides())?;
    let client = BackendClient::new(&config.endpoint)?;
    info!("Requesting knowledge graph creation at {}", config.endpoint.create_kg_url());

    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("Creando grafo...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = client.create_knowledge_graph().await;
    spinner.finish_and_clear();

    println!("{}", result?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph_create() {
        let args =
            GraphArgs::try_parse_from(["graph", "create", "--endpoint", "http://h:1"]).unwrap();
        let GraphCommand::Create(create) = args.command;
        assert_eq!(create.backend.endpoint.as_deref(), Some("http://h:1"));
    }

    #[test]
    fn test_graph_requires_subcommand() {
        assert!(GraphArgs::try_parse_from(["graph"]).is_err());
    }
}
