use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use clap::ValueEnum;

use crate::models::{ChannelGroup, EmailView, ExportDocument};
use crate::utils::single_line;

/// Part of the document to summarise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DigestSection {
    All,
    Emails,
    Slack,
    Msteams,
}

/// Plain-text unread summary of an export document, one block per external system.
pub fn format_digest(document: &ExportDocument, section: DigestSection) -> String {
    let mut out = String::new();
    if matches!(section, DigestSection::All | DigestSection::Emails) {
        out.push_str(&format_emails(&document.emails));
    }
    if matches!(section, DigestSection::All | DigestSection::Slack) {
        out.push_str(&format_channels(&document.slack, "SLACK MESSAGES", "No unread Slack messages."));
    }
    if matches!(section, DigestSection::All | DigestSection::Msteams) {
        out.push_str(&format_channels(
            &document.msteams,
            "MS TEAMS MESSAGES",
            "No unread Teams messages.",
        ));
    }
    out
}

/// Same text the export document carries, e.g. `2025-03-01T10:00:00.000Z`.
fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn format_emails(emails: &[EmailView]) -> String {
    if emails.is_empty() {
        return "No unread emails.\n\n".to_string();
    }

    let mut out = String::from("=== UNREAD EMAILS ===\n\n");
    for email in emails {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "From: {}", single_line(&email.from));
        let _ = writeln!(out, "Subject: {}", single_line(&email.subject));
        let _ = writeln!(out, "Time: {}", format_time(&email.timestamp));
        let _ = writeln!(out, "Body: {}", single_line(&email.body));
        let _ = writeln!(out, "{}\n", "-".repeat(40));
    }
    out
}

fn format_channels(group: &ChannelGroup, title: &str, empty: &str) -> String {
    if group.channels.is_empty() {
        return format!("{}\n\n", empty);
    }

    let mut out = format!("=== UNREAD {} ===\n\n", title);
    for channel in &group.channels {
        let _ = writeln!(out, "Channel: {}", single_line(&channel.name));
        let _ = writeln!(out, "{}", "=".repeat(30));
        for msg in &channel.messages {
            let _ = writeln!(out, "  From: {}", single_line(&msg.from));
            let _ = writeln!(out, "  Time: {}", format_time(&msg.timestamp));
            let _ = writeln!(out, "  Message: {}", single_line(&msg.text));
            let _ = writeln!(out, "  {}", "-".repeat(25));
        }
        out.push('\n');
    }
    out
}
