use crate::config::ExportLayout;
use crate::models::{
    Channel, ChannelGroup, ChannelMessage, DisplayPlatform, EmailView, ExportDocument, Message,
};

/// Subjects longer than this are truncated.
pub const SUBJECT_MAX_CHARS: usize = 50;
const SUBJECT_KEEP_CHARS: usize = 47;
const ELLIPSIS: &str = "...";

/// Build the nested export document from a flat message list.
///
/// Messages are grouped by their source platform through `layout.export_groups`,
/// never by the display panel they were routed to:
///
/// - `emails`: messages from sources exported as e-mail, in input order
/// - `slack`: one channel per source platform exported to Slack, in enumeration
///   order; platforms without messages get no channel
/// - `msteams`: a single catch-all channel for sources exported to Teams, omitted
///   when there are none
///
/// Output depends only on the input order and content.
pub fn to_structured_document(messages: &[Message], layout: &ExportLayout) -> ExportDocument {
    let groups = &layout.export_groups;

    let emails = messages
        .iter()
        .filter(|m| groups.display_of(m.source) == DisplayPlatform::Email)
        .map(|m| email_view(m, &layout.email_domain))
        .collect();

    let mut slack_channels = Vec::new();
    for source in groups.sources_for(DisplayPlatform::Slack) {
        let channel_messages: Vec<ChannelMessage> =
            messages.iter().filter(|m| m.source == source).map(channel_message).collect();
        if !channel_messages.is_empty() {
            slack_channels
                .push(Channel { name: layout.channels.name_for(source), messages: channel_messages });
        }
    }

    let teams_messages: Vec<ChannelMessage> = messages
        .iter()
        .filter(|m| groups.display_of(m.source) == DisplayPlatform::Teams)
        .map(channel_message)
        .collect();
    let teams_channels = if teams_messages.is_empty() {
        Vec::new()
    } else {
        vec![Channel { name: layout.teams_channel.clone(), messages: teams_messages }]
    };

    ExportDocument {
        emails,
        slack: ChannelGroup { channels: slack_channels },
        msteams: ChannelGroup { channels: teams_channels },
    }
}

fn email_view(message: &Message, domain: &str) -> EmailView {
    EmailView {
        from: format!("{} <{}@{}>", message.sender, email_local_part(&message.sender), domain),
        subject: subject_line(&message.content),
        timestamp: message.timestamp,
        body: message.content.clone(),
    }
}

fn channel_message(message: &Message) -> ChannelMessage {
    ChannelMessage {
        from: message.sender.clone(),
        timestamp: message.timestamp,
        text: message.content.clone(),
    }
}

/// Content unchanged up to 50 characters, else the first 47 plus `"..."`.
pub fn subject_line(content: &str) -> String {
    if content.chars().count() > SUBJECT_MAX_CHARS {
        let mut subject: String = content.chars().take(SUBJECT_KEEP_CHARS).collect();
        subject.push_str(ELLIPSIS);
        subject
    } else {
        content.to_string()
    }
}

/// Lower-cased display name with whitespace runs turned into single dots.
///
/// ```
/// use mock_inbox::export::email_local_part;
///
/// assert_eq!(email_local_part("Carol  Williams"), "carol.williams");
/// assert_eq!(email_local_part("Dr. Emma Davis"), "dr.emma.davis");
/// ```
pub fn email_local_part(name: &str) -> String {
    let mut local = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        let c = if c.is_whitespace() { '.' } else { c };
        if c == '.' && local.ends_with('.') {
            continue;
        }
        local.push(c);
    }
    local
}
