use std::ops::Deref;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::platform::{DisplayPlatform, SourcePlatform};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u32,
    pub source: SourcePlatform,
    pub display: DisplayPlatform,
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub unread: bool,
}

impl Message {
    /// Original-platform annotation shown next to the sender when the source
    /// differs from the panel it is displayed in.
    pub fn source_annotation(&self) -> Option<&'static str> {
        if self.source.as_str() != self.display.as_str() {
            Some(self.source.as_str())
        } else {
            None
        }
    }
}

/// Owned, read-only list of generated messages.
///
/// Produced once per run by the generator and lent by reference to the grouping,
/// export and rendering code. Regenerating yields a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSnapshot {
    messages: Vec<Message>,
}

impl ChatSnapshot {
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn newest(&self) -> Option<&Message> {
        self.messages.iter().max_by_key(|m| m.timestamp)
    }

    pub fn oldest(&self) -> Option<&Message> {
        self.messages.iter().min_by_key(|m| m.timestamp)
    }
}

impl Deref for ChatSnapshot {
    type Target = [Message];

    fn deref(&self) -> &Self::Target {
        &self.messages
    }
}
