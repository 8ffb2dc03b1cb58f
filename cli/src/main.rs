//! # fiuba-chat Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! Terminal client for the FIUBA chatbot. It sends questions to the
//! chunk-finding backend (`POST /find_chunk`) and shows the answers.
//! This file handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `chat`: UI-independent chat state (transcript, session, report)
//! - `commands`: one module per top-level command
//! - `common`: HTTP client, filesystem helpers, terminal UI
//! - `core`: configuration and error types
//!
//! ## Examples
//!
//! ```bash
//! # Interactive chat (classic variant)
//! fiuba-chat chat
//!
//! # Guided variant with report export, more logging
//! fiuba-chat -v chat --variant guided
//!
//! # One question, answer on stdout
//! fiuba-chat ask ¿Cuándo son los finales?
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod chat; // Transcript, profile, session, report
mod commands; // Command handlers (chat, ask, graph)
mod common; // HTTP client, filesystem and terminal helpers
mod core; // Config and errors

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "fiuba-chat",
    about = "FIUBA Chatbot: ask the chunk-finding backend from your terminal",
    long_about = "Chat with the FIUBA chunk-finding backend.\n\
                  Questions are sent to POST /find_chunk and the answers are shown as they arrive.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Ask a single question and print the answer.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Backend knowledge graph administration.
    Graph(commands::graph::GraphArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Graph(args) => commands::graph::handle_graph(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
