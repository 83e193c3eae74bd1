//! Interactive three-panel view of a chat snapshot.
//!
//! Panels can be focused and scrolled; `e` exports the snapshot through the
//! configured [`ExportSink`] without leaving the view.

mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use log::debug;

use self::terminal::TerminalManager;
use crate::config::ExportLayout;
use crate::export::ExportSink;
use crate::models::ChatSnapshot;

/// Run the interactive TUI until the user quits
pub fn run_interactive(snapshot: &ChatSnapshot, layout: &ExportLayout, sink: ExportSink) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    debug!("Entered interactive view with {} messages", snapshot.len());

    let mut app = App::new(snapshot, layout, sink);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
