//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Duration, TimeZone, Utc};
use mock_inbox::config::DisplayTable;
use mock_inbox::models::{ChatSnapshot, Message, SourcePlatform};
use tempfile::TempDir;

/// Fixed "now" so relative times are deterministic
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

/// Builder for hand-made messages routed through the default display table
pub struct MessageBuilder {
    id: u32,
    source: SourcePlatform,
    sender: String,
    content: String,
    minutes_ago: i64,
    unread: bool,
}

impl MessageBuilder {
    pub fn new(id: u32, source: SourcePlatform) -> Self {
        Self {
            id,
            source,
            sender: "Alice Johnson".to_string(),
            content: "Can we schedule a call?".to_string(),
            minutes_ago: id as i64,
            unread: true,
        }
    }

    pub fn sender(mut self, sender: &str) -> Self {
        self.sender = sender.to_string();
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn minutes_ago(mut self, minutes: i64) -> Self {
        self.minutes_ago = minutes;
        self
    }

    pub fn read(mut self) -> Self {
        self.unread = false;
        self
    }

    pub fn build(self) -> Message {
        Message {
            id: self.id,
            source: self.source,
            display: DisplayTable::default().display_of(self.source),
            sender: self.sender,
            content: self.content,
            timestamp: fixed_now() - Duration::minutes(self.minutes_ago),
            unread: self.unread,
        }
    }
}

/// Snapshot from builders, in the order given
pub fn snapshot_of(builders: Vec<MessageBuilder>) -> ChatSnapshot {
    ChatSnapshot::from_messages(builders.into_iter().map(MessageBuilder::build).collect())
}

/// Isolated HOME/XDG directories so a user's config never leaks into tests
pub struct TestEnv {
    temp_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config").join("mock-inbox")
    }

    /// Write `config.toml` where XDG discovery will find it
    pub fn with_config(self, content: &str) -> Self {
        let dir = self.config_dir();
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
        self
    }

    /// Command for the binary with HOME and XDG_CONFIG_HOME redirected
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mock-inbox"));
        cmd.env("HOME", self.path())
            .env("XDG_CONFIG_HOME", self.path().join("config"))
            .env_remove("RUST_LOG");
        cmd
    }
}
