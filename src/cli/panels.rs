//! Plain-text rendering of the display panels for `show`.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::generator::format_relative;
use crate::grouping::DisplayGroups;
use crate::models::Message;
use crate::utils::single_line;

/// Render every display bucket as a titled panel.
///
/// `limit` caps the rows printed per panel; the unread badge always counts the
/// whole bucket.
pub fn format_panels(groups: &DisplayGroups<'_>, now: &DateTime<Utc>, limit: Option<usize>) -> String {
    let mut out = String::new();

    for (display, messages) in groups.iter() {
        let header = format!("{} ({} unread)", display, groups.unread_count(display));
        let _ = writeln!(out, "{}", header);
        let _ = writeln!(out, "{}", "-".repeat(header.chars().count()));

        if messages.is_empty() {
            out.push_str("  No messages\n");
        } else {
            let shown = limit.unwrap_or(messages.len()).min(messages.len());
            for message in &messages[..shown] {
                out.push_str(&format_row(message, now));
            }
            if shown < messages.len() {
                let _ = writeln!(out, "  ... {} more", messages.len() - shown);
            }
        }
        out.push('\n');
    }

    out
}

fn format_row(message: &Message, now: &DateTime<Utc>) -> String {
    let marker = if message.unread { '*' } else { ' ' };
    let annotation =
        message.source_annotation().map(|tag| format!(" ({})", tag)).unwrap_or_default();
    format!(
        "{} {}{} · {}\n    {}\n",
        marker,
        single_line(&message.sender),
        annotation,
        format_relative(&message.timestamp, now),
        single_line(&message.content)
    )
}
