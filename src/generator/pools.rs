use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::ConfigError;

pub const DEFAULT_NAMES: [&str; 8] = [
    "Alice Johnson",
    "Bob Smith",
    "Carol Williams",
    "David Brown",
    "Emma Davis",
    "Frank Miller",
    "Grace Wilson",
    "Henry Moore",
];

pub const DEFAULT_MESSAGES: [&str; 20] = [
    "Hey everyone, just wanted to check in on the project status.",
    "The meeting has been moved to 3 PM tomorrow.",
    "Can someone review my latest changes?",
    "Great work on the presentation!",
    "I'll be out of office next week.",
    "The new feature is ready for testing.",
    "Thanks for the quick response!",
    "Let's schedule a follow-up meeting.",
    "I've updated the documentation.",
    "The bug has been fixed.",
    "Can we discuss this in more detail?",
    "I agree with that approach.",
    "The deadline has been extended.",
    "Please review the attached file.",
    "I'll send the report by end of day.",
    "The server is back online.",
    "Great job on the release!",
    "I need help with this issue.",
    "The client loved the proposal.",
    "Let's celebrate this milestone!",
];

/// Sender names and message bodies sampled with replacement.
///
/// Both pools are guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPools {
    names: Vec<String>,
    messages: Vec<String>,
}

impl ContentPools {
    pub fn new(names: Vec<String>, messages: Vec<String>) -> Result<Self, ConfigError> {
        if names.is_empty() {
            return Err(ConfigError::EmptyPool("names"));
        }
        if messages.is_empty() {
            return Err(ConfigError::EmptyPool("messages"));
        }
        Ok(Self { names, messages })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn sample_sender<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        sample(&self.names, rng)
    }

    pub fn sample_content<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        sample(&self.messages, rng)
    }
}

fn sample<'a, R: Rng + ?Sized>(pool: &'a [String], rng: &mut R) -> &'a str {
    // Pools are validated non-empty on construction.
    pool.choose(rng).map(String::as_str).unwrap_or_default()
}

impl Default for ContentPools {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
            messages: DEFAULT_MESSAGES.iter().map(|s| s.to_string()).collect(),
        }
    }
}
