//! # Interactive Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! `fiuba-chat chat` opens a chat session in the terminal. Each line read from
//! stdin is either an in-chat command (`/help`, `/history`, `/report`,
//! `/exit`) or a question submitted to the backend.
//!
//! ## Architecture
//!
//! - `ChatArgs`: command-line options for the session
//! - `handle_chat`: loads config, runs the welcome screen (guided variant),
//!   prints the banner and enters the input loop
//! - `run_input_loop`: reads lines and spawns one task per submission into a
//!   `JoinSet`, so the prompt stays usable while requests are outstanding
//! - `slash`: in-chat command parsing
//!
//! When input ends (Ctrl+D, EOF on a pipe, or `/exit`) the loop stops reading
//! and waits for requests still in flight before returning, so their answers
//! are shown.
//!
//! ## Examples
//!
//! ```bash
//! # Classic variant against the default backend
//! fiuba-chat chat
//!
//! # Guided variant, skipping the welcome prompts
//! fiuba-chat chat --variant guided --name Ana --year 2 --report-dir ~/reportes
//!
//! # Scripted session
//! printf '¿Qué es un chunk?\n' | fiuba-chat chat --endpoint http://10.0.0.5:5000
//! ```
//!
use crate::chat::profile::Year;
use crate::chat::report;
use crate::chat::session::ChatSession;
use crate::chat::variant::Variant;
use crate::commands::BackendArgs;
use crate::common::http::BackendClient;
use crate::common::ui::terminal::{self, format_message, LineSink, TerminalView};
use crate::common::ui::welcome;
use crate::core::config::{self, ConfigOverrides};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use console::style;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Parsing of `/`-prefixed in-chat commands.
mod slash;

use slash::SlashCommand;

#[derive(Parser, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Front-end behaviour to use (default from config, else classic).
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// Name for the guided welcome screen; skips the name prompt.
    #[arg(long)]
    pub name: Option<String>,

    /// Year of study (1-5) for the guided welcome screen; skips the year prompt.
    #[arg(long)]
    pub year: Option<Year>,

    /// Directory where `/report` writes the conversation.
    #[arg(long, value_name = "DIR")]
    pub report_dir: Option<PathBuf>,
}

impl ChatArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            report_dir: self.report_dir.clone(),
            ..self.backend.overrides_with_variant(self.variant)
        }
    }
}

pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    let config = config::load_config(&args.overrides())?;
    let variant = config.chat.variant;
    let client = BackendClient::new(&config.endpoint)?;
    info!(
        "Starting {} chat against {}",
        variant,
        client.find_chunk_url()
    );

    let view = Arc::new(TerminalView::new());
    let mut session = ChatSession::new(variant, Arc::new(client), view.clone());
    if variant.has_welcome_screen() {
        let profile = welcome::resolve_profile(args.name, args.year)?;
        session = session.with_profile(profile);
    } else if args.name.is_some() || args.year.is_some() {
        warn!("--name and --year only apply to the guided variant; ignoring them.");
    }

    terminal::print_banner(variant, session.profile());
    let session = Arc::new(session);
    run_input_loop(
        session,
        view.as_ref(),
        &config.report.directory_path(),
        tokio::io::stdin(),
    )
    .await?;
    println!("  {}", style("Sesión finalizada.").dim());
    Ok(())
}

/// Reads lines from `input` until EOF or `/exit`, then waits for outstanding
/// submissions.
async fn run_input_loop<R, S>(
    session: Arc<ChatSession>,
    sink: &S,
    report_dir: &Path,
    input: R,
) -> Result<()>
where
    R: AsyncRead + Unpin,
    S: LineSink + ?Sized,
{
    let mut lines = BufReader::new(input).lines();
    let mut pending = JoinSet::new();

    while let Some(line) = lines
        .next_line()
        .await
        .context("Failed to read chat input")?
    {
        if let Some(command) = slash::parse(&line) {
            debug!("In-chat command: {:?}", command);
            match command {
                SlashCommand::Help => terminal::print_help(session.variant()),
                SlashCommand::History => {
                    for message in session.transcript().messages() {
                        sink.print_line(&format_message(message));
                    }
                }
                SlashCommand::Report => export_report(&session, sink, report_dir),
                SlashCommand::Exit => break,
                SlashCommand::Unknown(name) => sink.print_line(&unknown_command_hint(&name)),
            }
            continue;
        }

        let session = session.clone();
        pending.spawn(async move { session.submit(&line).await });
    }

    if !pending.is_empty() {
        debug!(
            "Waiting for {} outstanding request(s), loading: {}",
            pending.len(),
            session.is_loading()
        );
    }
    while let Some(joined) = pending.join_next().await {
        if let Err(e) = joined {
            warn!("Submission task ended abnormally: {}", e);
        }
    }
    Ok(())
}

fn unknown_command_hint(name: &str) -> String {
    format!(
        "Comando desconocido: {}. Escribí /help para ver los comandos.",
        name
    )
}

/// Report failures are shown to the user; they never end the session.
fn export_report<S>(session: &ChatSession, sink: &S, report_dir: &Path)
where
    S: LineSink + ?Sized,
{
    if !session.variant().supports_report() {
        sink.print_line("El reporte solo está disponible en la variante guiada (--variant guided).");
        return;
    }
    match report::write_report(&session.transcript(), report_dir) {
        Ok(path) => sink.print_line(&format!("Reporte guardado en {}", path.display())),
        Err(e) => {
            warn!("Report export failed: {:?}", e);
            sink.print_line(&format!("No se pudo guardar el reporte: {}", e));
        }
    }
}
