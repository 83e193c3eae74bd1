use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::generator::format_relative;
use crate::grouping::DisplayGroups;
use crate::models::{DisplayPlatform, Message};
use crate::utils::single_line;

const MUTED: Color = Color::Rgb(113, 113, 122);
const BRIGHT: Color = Color::Rgb(250, 250, 250);
const ACCENT: Color = Color::Rgb(16, 185, 129);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// View state needed to draw one frame
pub struct RenderState<'s> {
    pub focused: usize,
    pub offsets: [usize; 3],
    pub total_count: usize,
    pub status_message: Option<&'s StatusMessage>,
    pub now: DateTime<Utc>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, groups: &DisplayGroups<'_>, state: &RenderState<'_>) {
    let layout = AppLayout::new(frame.area());

    for (idx, (display, messages)) in groups.iter().enumerate() {
        render_panel(
            frame,
            layout.panel_areas[idx],
            display,
            messages,
            groups.unread_count(display),
            idx == state.focused,
            state.offsets[idx],
            &state.now,
        );
    }
    render_status_bar(frame, layout.status_area, state);
}

#[allow(clippy::too_many_arguments)]
fn render_panel(
    frame: &mut Frame,
    area: Rect,
    display: DisplayPlatform,
    messages: &[&Message],
    unread: usize,
    focused: bool,
    offset: usize,
    now: &DateTime<Utc>,
) {
    let items: Vec<ListItem> = if messages.is_empty() {
        vec![ListItem::new("No messages").style(Style::default().fg(MUTED))]
    } else {
        messages.iter().skip(offset).map(|message| message_item(message, now)).collect()
    };

    let border_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ({}) ", display, unread)),
    );

    frame.render_widget(list, area);
}

fn message_item<'m>(message: &Message, now: &DateTime<Utc>) -> ListItem<'m> {
    let sender_style = if message.unread {
        Style::default().fg(BRIGHT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(BRIGHT)
    };

    let mut header = vec![
        Span::styled(if message.unread { "● " } else { "  " }, Style::default().fg(ACCENT)),
        Span::styled(single_line(&message.sender), sender_style),
    ];
    if let Some(tag) = message.source_annotation() {
        header.push(Span::styled(format!(" ({})", tag), Style::default().fg(MUTED)));
    }
    header.push(Span::styled(
        format!(" · {}", format_relative(&message.timestamp, now)),
        Style::default().fg(MUTED),
    ));

    ListItem::new(vec![
        Line::from(header),
        Line::from(format!("  {}", single_line(&message.content))),
        Line::from(""),
    ])
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState<'_>) {
    let (status_text, style) = match state.status_message {
        Some(status) => {
            let fg = match status.message_type {
                MessageType::Success => ACCENT,
                MessageType::Info => BRIGHT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", status.text), Style::default().fg(fg).bg(BAR_BG))
        }
        None => (
            format!(
                " {} messages | Tab: switch panel | ↑/↓: scroll | e: export | q: quit ",
                state.total_count
            ),
            Style::default().fg(BRIGHT).bg(BAR_BG),
        ),
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}
