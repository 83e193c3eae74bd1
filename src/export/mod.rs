//! Structured export of generated messages.
//!
//! - [`document`] regroups the flat list by source platform into the nested
//!   e-mail / Slack / Teams document
//! - [`sink`] serializes it and saves or downloads it
//! - [`digest`] formats an export document as the plain-text unread summary

pub mod digest;
pub mod document;
pub mod sink;

pub use digest::{DigestSection, format_digest};
pub use document::{email_local_part, subject_line, to_structured_document};
pub use sink::{
    DEFAULT_EXPORT_FILENAME, DownloadTarget, DownloadsFolder, ExportOutcome, ExportSink,
    PathSaveSurface, SaveAttempt, SaveSurface, render_json,
};
