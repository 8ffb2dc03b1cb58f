//! # Chat Messages
//!
//! File: cli/src/chat/message.rs
//!
//! A `Message` is created once and never changed afterwards; the transcript
//! only ever appends them.
//!
use std::fmt;

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Upper-case label used in exported reports (`USER`, `BOT`).
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "USER",
            Sender::Bot => "BOT",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// One entry of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: Sender,
    text: String,
}

impl Message {
    /// A message typed by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    /// A message produced on behalf of the backend (answer or fallback).
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// `SENDER: text`, the line format of an exported report.
    pub fn report_line(&self) -> String {
        format!("{}: {}", self.sender.label(), self.text)
    }
}
