//! # Terminal Chat View
//!
//! File: cli/src/common/ui/terminal.rs
//!
//! ## Overview
//!
//! `TerminalView` is the `ChatView` used by `fiuba-chat chat` and
//! `fiuba-chat ask`. Messages go to stdout as one line each, prefixed by the
//! speaker. While the session's loading flag is set, an `indicatif` spinner
//! reading `Pensando...` is drawn on stderr; messages printed while it spins
//! are written through `ProgressBar::suspend` so the two never interleave.
//!
use crate::chat::message::{Message, Sender};
use crate::chat::profile::UserProfile;
use crate::chat::session::ChatView;
use crate::chat::variant::Variant;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Spinner text while a request is outstanding.
pub const LOADING_TEXT: &str = "Pensando...";

#[derive(Default)]
pub struct TerminalView {
    spinner: Mutex<Option<ProgressBar>>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prints a line without tearing the spinner, if one is showing.
    pub fn print_line(&self, line: &str) {
        let spinner = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        match spinner.as_ref() {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

/// Where the chat loop prints lines that are not transcript messages
/// (history reprints, command feedback).
pub trait LineSink {
    fn print_line(&self, line: &str);
}

impl LineSink for TerminalView {
    fn print_line(&self, line: &str) {
        TerminalView::print_line(self, line);
    }
}

impl ChatView for TerminalView {
    fn message_appended(&self, message: &Message) {
        self.print_line(&format_message(message));
    }

    fn loading_changed(&self, loading: bool) {
        let mut spinner = self.spinner.lock().unwrap_or_else(PoisonError::into_inner);
        if loading {
            if spinner.is_none() {
                *spinner = Some(new_spinner());
            }
        } else if let Some(pb) = spinner.take() {
            pb.finish_and_clear();
        }
    }
}

fn new_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let spinner_style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(spinner_style);
    pb.set_message(LOADING_TEXT);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// One transcript line as shown in the terminal.
pub fn format_message(message: &Message) -> String {
    match message.sender() {
        Sender::User => format!("{} {}", style("Vos >").green().bold(), message.text()),
        Sender::Bot => format!("{} {}", style("Bot >").cyan().bold(), message.text()),
    }
}

pub fn print_banner(variant: Variant, profile: Option<&UserProfile>) {
    println!();
    println!("  {}", style("FIUBA Chatbot").cyan().bold());
    if let Some(profile) = profile {
        println!("  {}", profile.greeting());
    }
    let hint = if variant.supports_report() {
        "Escribí tu pregunta y presioná Enter. /report guarda la conversación, /help muestra los comandos."
    } else {
        "Escribí tu pregunta y presioná Enter. /help muestra los comandos."
    };
    println!("  {}", style(hint).dim());
    println!("  {}", style("---").dim());
    println!();
}

pub fn print_help(variant: Variant) {
    println!();
    println!("  {}", style("Comandos disponibles:").bold());
    println!("  {}     Muestra esta ayuda", style("/help").cyan());
    println!("  {}  Vuelve a mostrar la conversación", style("/history").cyan());
    if variant.supports_report() {
        println!("  {}   Guarda la conversación en un archivo", style("/report").cyan());
    }
    println!("  {}     Termina la sesión (también Ctrl+D)", style("/exit").cyan());
    println!();
}
