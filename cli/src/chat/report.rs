//! # Transcript Report Export
//!
//! File: cli/src/chat/report.rs
//!
//! ## Overview
//!
//! The guided variant can "download" the conversation: the transcript is
//! rendered as `SENDER: text` lines and written to
//! `chatbot_conversation_<YYYY-MM-DD>.txt` inside the configured report
//! directory. The date is the current UTC date. A report written twice on the
//! same day overwrites the earlier file.
//!
//! ## Usage
//!
//! ```rust
//! let path = report::write_report(&session.transcript(), &config.report.directory)?;
//! println!("Reporte guardado en {}", path.display());
//! ```
//!
use super::transcript::Transcript;
use crate::common::fs::io;
use crate::core::error::Result;
use chrono::{NaiveDate, Utc};
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of a report written on `date`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("chatbot_conversation_{}.txt", date.format("%Y-%m-%d"))
}

/// Writes the report for `transcript` into `directory`, dated today (UTC).
pub fn write_report(transcript: &Transcript, directory: &Path) -> Result<PathBuf> {
    write_report_dated(transcript, directory, Utc::now().date_naive())
}

/// Same as [`write_report`] with an explicit date.
pub fn write_report_dated(
    transcript: &Transcript,
    directory: &Path,
    date: NaiveDate,
) -> Result<PathBuf> {
    let path = directory.join(report_file_name(date));
    io::write_string_to_file(&path, &transcript.to_report())?;
    info!(
        "Wrote report with {} messages to {}",
        transcript.len(),
        path.display()
    );
    Ok(path)
}
