//! Validation errors for generation and export configuration.

use thiserror::Error;

use crate::models::SourcePlatform;

/// Errors raised while validating externally supplied configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Platform tag outside the fixed enumeration.
    #[error("unknown platform tag: {0:?}")]
    UnknownPlatform(String),

    /// Display tag other than Email, Slack or Teams.
    #[error("unknown display platform: {0:?}")]
    UnknownDisplay(String),

    /// Count that is not an integer.
    #[error("count for {platform} must be a non-negative integer, got {value}")]
    InvalidCount { platform: String, value: String },

    /// Count below zero.
    #[error("count for {platform} must be non-negative, got {value}")]
    NegativeCount { platform: String, value: i64 },

    /// Display table that leaves a source platform unmapped.
    #[error("display table has no entry for {0}")]
    IncompleteDisplayTable(SourcePlatform),

    /// Two Slack channels with the same name.
    #[error("duplicate channel name: {0:?}")]
    DuplicateChannel(String),

    #[error("channel name for {0} is empty")]
    EmptyChannelName(SourcePlatform),

    /// Sampling pool with nothing to draw from.
    #[error("content pool {0:?} is empty")]
    EmptyPool(&'static str),

    /// `--count` override not in `PLATFORM=N` form.
    #[error("invalid count override {0:?}, expected PLATFORM=N")]
    InvalidOverride(String),
}
