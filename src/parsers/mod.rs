//! Reading exported documents back from disk.
//!
//! Timestamps accept both RFC3339 strings and epoch milliseconds on the way in and
//! are always written as millisecond ISO-8601 strings.

pub mod document;
pub mod timestamps;

pub use document::load_export_document;
