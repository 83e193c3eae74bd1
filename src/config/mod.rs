//! Generation and export configuration.
//!
//! Every value here has a built-in default matching the stock mock inbox
//! (six source platforms, four of them collapsed into Slack). A TOML file and
//! `--count` overrides can replace any of them; see [`settings`].

pub mod error;
pub mod settings;

use std::collections::{BTreeMap, HashSet};
use std::str::FromStr;

pub use error::ConfigError;
pub use settings::{ConfigFile, CountOverride, default_config_path};

use crate::generator::pools::ContentPools;
use crate::models::{DisplayPlatform, SourcePlatform};

/// Domain appended to derived e-mail addresses.
pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Name of the single catch-all Teams channel.
pub const TEAMS_CHANNEL: &str = "General";

/// Total mapping from source platform to display platform.
///
/// Stored as one slot per [`SourcePlatform::ALL`] entry, so lookups cannot miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTable([DisplayPlatform; 6]);

impl DisplayTable {
    /// Build a table from explicit entries. Every source platform must be present.
    pub fn from_entries(
        entries: &BTreeMap<SourcePlatform, DisplayPlatform>,
    ) -> Result<Self, ConfigError> {
        let mut slots = [DisplayPlatform::Email; 6];
        for platform in SourcePlatform::ALL {
            let display =
                entries.get(&platform).ok_or(ConfigError::IncompleteDisplayTable(platform))?;
            slots[platform.index()] = *display;
        }
        Ok(Self(slots))
    }

    pub fn display_of(&self, source: SourcePlatform) -> DisplayPlatform {
        self.0[source.index()]
    }

    /// Source platforms collapsing into `display`, in enumeration order.
    pub fn sources_for(&self, display: DisplayPlatform) -> impl Iterator<Item = SourcePlatform> + '_ {
        SourcePlatform::ALL.into_iter().filter(move |s| self.display_of(*s) == display)
    }
}

impl Default for DisplayTable {
    fn default() -> Self {
        let mut slots = [DisplayPlatform::Email; 6];
        for platform in SourcePlatform::ALL {
            slots[platform.index()] = match platform {
                SourcePlatform::WhatsApp
                | SourcePlatform::Instagram
                | SourcePlatform::TikTok
                | SourcePlatform::Snapchat => DisplayPlatform::Slack,
                SourcePlatform::Teams => DisplayPlatform::Teams,
                SourcePlatform::Email => DisplayPlatform::Email,
            };
        }
        Self(slots)
    }
}

/// Slack channel name per source platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTable(BTreeMap<SourcePlatform, String>);

impl ChannelTable {
    pub fn from_entries(entries: BTreeMap<SourcePlatform, String>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for (platform, name) in &entries {
            if name.trim().is_empty() {
                return Err(ConfigError::EmptyChannelName(*platform));
            }
            if !seen.insert(name.clone()) {
                return Err(ConfigError::DuplicateChannel(name.clone()));
            }
        }
        Ok(Self(entries))
    }

    /// Configured name, or `#<lowercase tag>` for platforms without one.
    pub fn name_for(&self, source: SourcePlatform) -> String {
        self.0
            .get(&source)
            .cloned()
            .unwrap_or_else(|| format!("#{}", source.as_str().to_lowercase()))
    }
}

impl Default for ChannelTable {
    fn default() -> Self {
        let entries = [
            (SourcePlatform::WhatsApp, "#whatsapp"),
            (SourcePlatform::Instagram, "#instagram"),
            (SourcePlatform::TikTok, "#tiktok"),
            (SourcePlatform::Snapchat, "#snapchat"),
        ];
        Self(entries.into_iter().map(|(p, n)| (p, n.to_string())).collect())
    }
}

/// Target message count per source platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCounts([u32; 6]);

impl PlatformCounts {
    pub fn zero() -> Self {
        Self([0; 6])
    }

    pub fn get(&self, platform: SourcePlatform) -> u32 {
        self.0[platform.index()]
    }

    pub fn set(&mut self, platform: SourcePlatform, count: u32) {
        self.0[platform.index()] = count;
    }

    pub fn total(&self) -> u64 {
        self.0.iter().map(|&c| u64::from(c)).sum()
    }

    /// `(platform, count)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (SourcePlatform, u32)> + '_ {
        SourcePlatform::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

impl Default for PlatformCounts {
    fn default() -> Self {
        let mut counts = Self::zero();
        for platform in SourcePlatform::ALL {
            let count = match platform {
                SourcePlatform::WhatsApp => 20,
                _ => 30,
            };
            counts.set(platform, count);
        }
        counts
    }
}

impl FromIterator<(SourcePlatform, u32)> for PlatformCounts {
    fn from_iter<I: IntoIterator<Item = (SourcePlatform, u32)>>(iter: I) -> Self {
        let mut counts = Self::zero();
        for (platform, count) in iter {
            counts.set(platform, count);
        }
        counts
    }
}

/// Inputs to message generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationConfig {
    pub counts: PlatformCounts,
    pub display: DisplayTable,
    pub pools: ContentPools,
    pub seed: Option<u64>,
}

/// Inputs to the structured exporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    /// External system each source platform is exported to. Kept apart from the
    /// generation display table, so remapping panels leaves the export shape alone.
    pub export_groups: DisplayTable,
    pub channels: ChannelTable,
    pub teams_channel: String,
    pub email_domain: String,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            export_groups: DisplayTable::default(),
            channels: ChannelTable::default(),
            teams_channel: TEAMS_CHANNEL.to_string(),
            email_domain: DEFAULT_EMAIL_DOMAIN.to_string(),
        }
    }
}

/// Fully validated configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub export: ExportLayout,
}

impl AppConfig {
    /// Validate a parsed config file on top of the defaults.
    pub fn from_file(file: &ConfigFile) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for (tag, value) in &file.counts {
            let platform = SourcePlatform::from_str(tag)?;
            let count = settings::count_from_toml(tag, value)?;
            config.generation.counts.set(platform, count);
        }

        if !file.display.is_empty() {
            let mut entries = BTreeMap::new();
            for (tag, display) in &file.display {
                entries.insert(SourcePlatform::from_str(tag)?, DisplayPlatform::from_str(display)?);
            }
            config.generation.display = DisplayTable::from_entries(&entries)?;
        }

        if !file.channels.is_empty() {
            let mut entries: BTreeMap<SourcePlatform, String> =
                ChannelTable::default().0.into_iter().collect();
            for (tag, name) in &file.channels {
                entries.insert(SourcePlatform::from_str(tag)?, name.clone());
            }
            config.export.channels = ChannelTable::from_entries(entries)?;
        }

        if let Some(pools) = &file.pools {
            config.generation.pools =
                ContentPools::new(pools.names.clone(), pools.messages.clone())?;
        }

        if let Some(domain) = &file.email_domain {
            config.export.email_domain = domain.clone();
        }
        config.generation.seed = file.seed;

        Ok(config)
    }

    /// Apply `--count` and `--seed` overrides from the command line.
    pub fn apply_overrides(&mut self, counts: &[CountOverride], seed: Option<u64>) {
        for CountOverride { platform, count } in counts {
            self.generation.counts.set(*platform, *count);
        }
        if seed.is_some() {
            self.generation.seed = seed;
        }
    }
}
