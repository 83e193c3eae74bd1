use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Internally tracked origin of a synthetic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SourcePlatform {
    WhatsApp,
    Instagram,
    TikTok,
    Snapchat,
    Teams,
    Email,
}

impl SourcePlatform {
    /// Fixed enumeration order used for generation and export.
    pub const ALL: [SourcePlatform; 6] = [
        SourcePlatform::WhatsApp,
        SourcePlatform::Instagram,
        SourcePlatform::TikTok,
        SourcePlatform::Snapchat,
        SourcePlatform::Teams,
        SourcePlatform::Email,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourcePlatform::WhatsApp => "WhatsApp",
            SourcePlatform::Instagram => "Instagram",
            SourcePlatform::TikTok => "TikTok",
            SourcePlatform::Snapchat => "Snapchat",
            SourcePlatform::Teams => "Teams",
            SourcePlatform::Email => "Email",
        }
    }

    /// Position in [`SourcePlatform::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SourcePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourcePlatform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourcePlatform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownPlatform(s.to_string()))
    }
}

/// Origin shown to the user after the many-to-one collapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DisplayPlatform {
    Email,
    Slack,
    Teams,
}

impl DisplayPlatform {
    /// Panel order.
    pub const ALL: [DisplayPlatform; 3] =
        [DisplayPlatform::Email, DisplayPlatform::Slack, DisplayPlatform::Teams];

    pub fn as_str(self) -> &'static str {
        match self {
            DisplayPlatform::Email => "Email",
            DisplayPlatform::Slack => "Slack",
            DisplayPlatform::Teams => "Teams",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for DisplayPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayPlatform {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisplayPlatform::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownDisplay(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_index_matches_enumeration_order() {
        for (i, platform) in SourcePlatform::ALL.iter().enumerate() {
            assert_eq!(platform.index(), i);
        }
    }

    #[test]
    fn test_parse_source_platform_case_insensitive() {
        assert_eq!("whatsapp".parse::<SourcePlatform>().unwrap(), SourcePlatform::WhatsApp);
        assert_eq!(" TikTok ".parse::<SourcePlatform>().unwrap(), SourcePlatform::TikTok);
    }

    #[test]
    fn test_parse_unknown_platform() {
        let err = "Discord".parse::<SourcePlatform>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownPlatform(ref tag) if tag == "Discord"));
    }

    #[test]
    fn test_parse_display_platform() {
        assert_eq!("slack".parse::<DisplayPlatform>().unwrap(), DisplayPlatform::Slack);
        assert!("WhatsApp".parse::<DisplayPlatform>().is_err());
    }

    #[test]
    fn test_serde_uses_tag_names() {
        let json = serde_json::to_string(&SourcePlatform::TikTok).unwrap();
        assert_eq!(json, "\"TikTok\"");
        let parsed: DisplayPlatform = serde_json::from_str("\"Teams\"").unwrap();
        assert_eq!(parsed, DisplayPlatform::Teams);
    }
}
