//! Data models for generated chat traffic.
//!
//! - [`SourcePlatform`] / [`DisplayPlatform`] - origin tags before and after the collapse
//! - [`Message`] - one flat synthetic message
//! - [`ChatSnapshot`] - the owned, read-only list produced by the generator
//! - [`ExportDocument`] - nested document written by the export sink
//!
//! Export timestamps use the helpers in `parsers::timestamps` so that they serialize
//! as millisecond ISO-8601 strings and read back from either strings or epoch millis.

pub mod export;
pub mod message;
pub mod platform;

pub use export::{Channel, ChannelGroup, ChannelMessage, EmailView, ExportDocument};
pub use message::{ChatSnapshot, Message};
pub use platform::{DisplayPlatform, SourcePlatform};
