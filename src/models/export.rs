use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Nested document handed to downstream consumers.
///
/// Organised by external system (e-mail, Slack, Teams) rather than by display panel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub emails: Vec<EmailView>,
    pub slack: ChannelGroup,
    pub msteams: ChannelGroup,
}

impl ExportDocument {
    pub fn message_count(&self) -> usize {
        self.emails.len() + self.slack.message_count() + self.msteams.message_count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailView {
    pub from: String,
    pub subject: String,
    #[serde(
        serialize_with = "crate::parsers::timestamps::serialize_timestamp",
        deserialize_with = "crate::parsers::timestamps::deserialize_timestamp"
    )]
    pub timestamp: DateTime<Utc>,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelGroup {
    pub channels: Vec<Channel>,
}

impl ChannelGroup {
    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.channels.iter().find(|c| c.name == name)
    }

    pub fn message_count(&self) -> usize {
        self.channels.iter().map(|c| c.messages.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub name: String,
    pub messages: Vec<ChannelMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMessage {
    pub from: String,
    #[serde(
        serialize_with = "crate::parsers::timestamps::serialize_timestamp",
        deserialize_with = "crate::parsers::timestamps::deserialize_timestamp"
    )]
    pub timestamp: DateTime<Utc>,
    pub text: String,
}
