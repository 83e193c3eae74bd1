//! Mock Inbox - Generate, group and export synthetic chat messages
//!
//! This library fabricates a snapshot of chat messages from six mock source
//! platforms, routes each one to one of three display panels (Email, Slack, Teams),
//! and converts the snapshot into a nested JSON document. It supports:
//!
//! - Seeded or entropy-driven message generation with configurable per-platform counts
//! - Grouping messages into display panels with unread badges
//! - Structured export with a save-or-download fallback
//! - Reading exported documents back for unread digests
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use mock_inbox::config::AppConfig;
//! use mock_inbox::{generate_seeded, group_by_display, to_structured_document};
//!
//! let mut config = AppConfig::default();
//! config.generation.seed = Some(42);
//! let snapshot = generate_seeded(&config.generation, Utc::now());
//! let groups = group_by_display(&snapshot);
//! let document = to_structured_document(&snapshot, &config.export);
//! assert_eq!(groups.total(), document.message_count());
//! ```

pub mod cli;
pub mod config;
pub mod export;
pub mod generator;
pub mod grouping;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, GenerationConfig};
pub use export::{ExportOutcome, ExportSink, to_structured_document};
pub use generator::{generate, generate_seeded};
pub use grouping::{DisplayGroups, group_by_display};
pub use models::{ChatSnapshot, DisplayPlatform, ExportDocument, Message, SourcePlatform};
pub use parsers::load_export_document;
