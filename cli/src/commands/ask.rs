//! # One-Shot Question Command
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! `fiuba-chat ask <QUESTION...>` submits a single question through the same
//! `ChatSession` the interactive chat uses, then prints only the bot's text on
//! stdout. The spinner still shows on stderr while the request is outstanding.
//!
//! When the request fails, the variant's fallback text is printed (as the chat
//! would show it) and the command exits with status 1.
//!
//! ```bash
//! fiuba-chat ask ¿Cuántos créditos tiene Análisis II?
//! fiuba-chat ask --variant guided --endpoint http://10.0.0.5:5000 "hola"
//! ```
//!
use crate::chat::message::{Message, Sender};
use crate::chat::session::{ChatSession, ChatView, SubmitOutcome};
use crate::chat::variant::Variant;
use crate::commands::BackendArgs;
use crate::common::http::BackendClient;
use crate::common::ui::terminal::TerminalView;
use crate::core::config;
use crate::core::error::{ChatError, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
pub struct AskArgs {
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Front-end behaviour to use (query trimming and fallback text).
    #[arg(long, value_enum)]
    pub variant: Option<Variant>,

    /// The question. Multiple words are joined with single spaces.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub question: Vec<String>,
}

/// Prints bot answers bare and leaves the spinner to `TerminalView`.
struct AnswerOnlyView {
    inner: TerminalView,
}

impl ChatView for AnswerOnlyView {
    fn message_appended(&self, message: &Message) {
        if message.sender() == Sender::Bot {
            self.inner.print_line(message.text());
        }
    }

    fn loading_changed(&self, loading: bool) {
        self.inner.loading_changed(loading);
    }
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let config = config::load_config(&args.backend.overrides_with_variant(args.variant))?;
    let client = BackendClient::new(&config.endpoint)?;
    let url = client.find_chunk_url().to_string();
    let view = Arc::new(AnswerOnlyView {
        inner: TerminalView::new(),
    });
    let session = ChatSession::new(config.chat.variant, Arc::new(client), view);

    let question = args.question.join(" ");
    info!("Asking {}: {:?}", url, question);
    let outcome = session.submit(&question).await;
    if let Some(message) = outcome.bot_message() {
        debug!("Bot replied with {} characters", message.text().chars().count());
    }
    match outcome {
        SubmitOutcome::Answered(_) => Ok(()),
        SubmitOutcome::Failed(_) => Err(ChatError::RequestFailed {
            url,
            reason: "no answer received (see log with -v for details)".into(),
        }
        .into()),
        SubmitOutcome::Ignored => Err(ChatError::ArgumentParsing(
            "the question cannot be blank".into(),
        )
        .into()),
    }
}
