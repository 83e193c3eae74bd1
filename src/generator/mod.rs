//! Synthetic message generation.
//!
//! Sampling pools, the last-week timestamp synthesizer, and the generator that
//! turns a [`GenerationConfig`](crate::config::GenerationConfig) into a
//! [`ChatSnapshot`](crate::models::ChatSnapshot).

pub mod messages;
pub mod pools;
pub mod timestamps;

pub use messages::{generate, generate_seeded, sort_newest_first};
pub use pools::ContentPools;
pub use timestamps::{format_relative, format_timestamp, random_recent_timestamp};
