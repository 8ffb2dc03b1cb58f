//! # Transcript
//!
//! File: cli/src/chat/transcript.rs
//!
//! The ordered record of a chat. Insertion order is chronological order.
//! There is no API to edit or remove a message.
//!
use super::message::Message;

/// Append-only, in-memory list of messages for one session.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message at the end of the transcript.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Renders the transcript as `SENDER: text` lines joined by `\n`,
    /// without a trailing newline.
    pub fn to_report(&self) -> String {
        self.messages
            .iter()
            .map(Message::report_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::Sender;

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(Message::user("primero"));
        transcript.push(Message::bot("segundo"));
        transcript.push(Message::user("tercero"));

        assert_eq!(transcript.len(), 3);
        let texts: Vec<&str> = transcript.messages().iter().map(Message::text).collect();
        assert_eq!(texts, vec!["primero", "segundo", "tercero"]);
        assert_eq!(
            transcript.messages().last().map(Message::sender),
            Some(Sender::User)
        );
    }

    #[test]
    fn test_report_format() {
        let mut transcript = Transcript::new();
        transcript.push(Message::user("a"));
        transcript.push(Message::bot("b"));
        assert_eq!(transcript.to_report(), "USER: a\nBOT: b");
    }

    #[test]
    fn test_report_of_empty_transcript_is_empty() {
        assert_eq!(Transcript::new().to_report(), "");
    }

    #[test]
    fn test_report_keeps_multiline_text_verbatim() {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot("línea 1\nlínea 2"));
        assert_eq!(transcript.to_report(), "BOT: línea 1\nlínea 2");
    }
}
