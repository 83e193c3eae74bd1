//! Interactive panel view state and event loop.
//!
//! The `App` borrows a [`ChatSnapshot`] for its whole lifetime and never mutates it.
//! It tracks which of the three panels has focus, a scroll offset per panel, and a
//! transient status message used to report export results.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::config::ExportLayout;
use crate::export::{DEFAULT_EXPORT_FILENAME, ExportOutcome, ExportSink, to_structured_document};
use crate::grouping::{DisplayGroups, group_by_display};
use crate::models::{ChatSnapshot, DisplayPlatform};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows moved by PageUp/PageDown
const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Info,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App<'a> {
    snapshot: &'a ChatSnapshot,
    layout: &'a ExportLayout,
    groups: DisplayGroups<'a>,
    sink: ExportSink,
    focused: usize,
    offsets: [usize; 3],
    status_message: Option<StatusMessage>,
    should_quit: bool,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl<'a> App<'a> {
    pub fn new(snapshot: &'a ChatSnapshot, layout: &'a ExportLayout, sink: ExportSink) -> Self {
        Self {
            snapshot,
            layout,
            groups: group_by_display(snapshot),
            sink,
            focused: 0,
            offsets: [0; 3],
            status_message: None,
            should_quit: false,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    pub fn focused_panel(&self) -> DisplayPlatform {
        DisplayPlatform::ALL[self.focused]
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Redraw when dirty, and periodically so relative times and resizes update
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_secs(1) {
                terminal.draw(|f| {
                    let state = RenderState {
                        focused: self.focused,
                        offsets: self.offsets,
                        total_count: self.snapshot.len(),
                        status_message: self.status_message.as_ref(),
                        now: Utc::now(),
                    };
                    render_ui(f, &self.groups, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::NextPanel => self.move_focus(1),
            Action::PrevPanel => self.move_focus(-1),
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::PageUp => self.scroll(-PAGE_SIZE),
            Action::PageDown => self.scroll(PAGE_SIZE),
            Action::Export => self.export(),
            Action::None => {}
        }
    }

    fn move_focus(&mut self, delta: isize) {
        let count = DisplayPlatform::ALL.len() as isize;
        self.focused = (self.focused as isize + delta).rem_euclid(count) as usize;
        self.needs_redraw = true;
    }

    fn scroll(&mut self, delta: isize) {
        let total = self.groups.bucket(self.focused_panel()).len();
        let offset = &mut self.offsets[self.focused];
        let old = *offset;
        if total == 0 {
            *offset = 0;
        } else {
            let next = (*offset as isize + delta).max(0) as usize;
            *offset = next.min(total - 1);
        }
        if *offset != old {
            self.needs_redraw = true;
        }
    }

    fn export(&mut self) {
        let document = to_structured_document(self.snapshot, self.layout);
        match self.sink.write(&document, DEFAULT_EXPORT_FILENAME) {
            Ok(ExportOutcome::Saved(path)) => self.set_status(
                format!("✓ Saved to {}", path.display()),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Ok(ExportOutcome::Downloaded { path, save_error: None }) => self.set_status(
                format!("✓ Downloaded to {}", path.display()),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Ok(ExportOutcome::Downloaded { path, save_error: Some(err) }) => self.set_status(
                format!("✗ Save failed ({}); downloaded to {}", err, path.display()),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
            Ok(ExportOutcome::Cancelled) => self.set_status(
                "Export cancelled (use --force to overwrite)",
                MessageType::Info,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Err(e) => self.set_status(
                format!("✗ Export failed: {:#}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
