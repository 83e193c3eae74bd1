//! Partition messages into the three display panels.

use crate::models::{DisplayPlatform, Message};

/// Messages bucketed by display platform.
///
/// All three buckets always exist; an empty bucket is a valid state. Each bucket
/// keeps the relative order of the input slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGroups<'a> {
    buckets: [Vec<&'a Message>; 3],
}

impl<'a> DisplayGroups<'a> {
    pub fn bucket(&self, display: DisplayPlatform) -> &[&'a Message] {
        &self.buckets[display.index()]
    }

    pub fn unread_count(&self, display: DisplayPlatform) -> usize {
        self.bucket(display).iter().filter(|m| m.unread).count()
    }

    /// Buckets in panel order: Email, Slack, Teams.
    pub fn iter(&self) -> impl Iterator<Item = (DisplayPlatform, &[&'a Message])> + '_ {
        DisplayPlatform::ALL.into_iter().map(move |d| (d, self.bucket(d)))
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Stable partition of `messages` by their display platform.
pub fn group_by_display(messages: &[Message]) -> DisplayGroups<'_> {
    let mut buckets: [Vec<&Message>; 3] = Default::default();
    for message in messages {
        buckets[message.display.index()].push(message);
    }
    DisplayGroups { buckets }
}
