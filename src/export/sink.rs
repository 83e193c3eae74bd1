//! Delivery of the serialized export document.
//!
//! # Error Handling Strategy
//!
//! The sink mirrors a browser "save as" flow with a plain download as backup:
//!
//! - **Save unavailable**: no destination was chosen. Recovered locally by falling
//!   back to the downloads folder; not an error.
//! - **User cancelled**: the destination exists and overwriting was not allowed.
//!   A normal outcome; nothing is written and no fallback runs.
//! - **Save failed**: the preferred write hit an I/O error. The failure is reported
//!   in the outcome and the document is downloaded instead. Only when the fallback
//!   also fails does [`ExportSink::write`] return `Err`.
//!
//! Nothing here touches the in-memory snapshot, so a failed export leaves it intact.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::models::ExportDocument;
use crate::utils::fs::{unique_path, write_atomic};

/// Default file name offered for exports.
pub const DEFAULT_EXPORT_FILENAME: &str = "example.json";

/// Result of one attempt on the preferred save surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveAttempt {
    Saved(PathBuf),
    Unavailable,
    Cancelled,
}

/// Final result of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Written to the chosen destination.
    Saved(PathBuf),
    /// Written to the downloads folder. `save_error` holds the preferred save's
    /// failure when the fallback ran because of one.
    Downloaded { path: PathBuf, save_error: Option<String> },
    /// The user declined; nothing was written.
    Cancelled,
}

/// Preferred, user-chosen save destination.
pub trait SaveSurface {
    /// `Err` means the save was attempted and failed.
    fn save(&mut self, suggested_name: &str, contents: &[u8]) -> Result<SaveAttempt>;
}

/// Generic download path used when the save surface is not available.
pub trait DownloadTarget {
    fn download(&mut self, filename: &str, contents: &[u8]) -> Result<PathBuf>;
}

/// Saves to an explicit path, or into it when the path is a directory.
#[derive(Debug, Clone)]
pub struct PathSaveSurface {
    destination: Option<PathBuf>,
    overwrite: bool,
}

impl PathSaveSurface {
    pub fn new(destination: Option<PathBuf>, overwrite: bool) -> Self {
        Self { destination, overwrite }
    }
}

impl SaveSurface for PathSaveSurface {
    fn save(&mut self, suggested_name: &str, contents: &[u8]) -> Result<SaveAttempt> {
        let Some(destination) = &self.destination else {
            return Ok(SaveAttempt::Unavailable);
        };

        let path =
            if destination.is_dir() { destination.join(suggested_name) } else { destination.clone() };

        if path.exists() && !self.overwrite {
            info!("{} exists and overwrite not allowed", path.display());
            return Ok(SaveAttempt::Cancelled);
        }

        write_atomic(&path, contents)?;
        Ok(SaveAttempt::Saved(path))
    }
}

/// Drops files into a downloads folder without overwriting anything.
#[derive(Debug, Clone)]
pub struct DownloadsFolder {
    dir: PathBuf,
}

impl DownloadsFolder {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// `explicit`, else the platform downloads directory, else the current directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let dir = match explicit.or_else(dirs::download_dir) {
            Some(dir) => dir,
            None => env::current_dir().context("Failed to determine current directory")?,
        };
        Ok(Self::new(dir))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadTarget for DownloadsFolder {
    fn download(&mut self, filename: &str, contents: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create downloads directory: {}", self.dir.display())
        })?;
        let path = unique_path(&self.dir, filename)?;
        write_atomic(&path, contents)?;
        Ok(path)
    }
}

/// Serializes export documents and routes them to a save surface or download target.
pub struct ExportSink {
    surface: Box<dyn SaveSurface>,
    fallback: Box<dyn DownloadTarget>,
}

impl ExportSink {
    pub fn new(surface: Box<dyn SaveSurface>, fallback: Box<dyn DownloadTarget>) -> Self {
        Self { surface, fallback }
    }

    /// Sink writing to `output` (if any) with the downloads folder as backup.
    pub fn for_paths(
        output: Option<PathBuf>,
        overwrite: bool,
        downloads_dir: Option<PathBuf>,
    ) -> Result<Self> {
        let downloads = DownloadsFolder::resolve(downloads_dir)?;
        debug!("download fallback directory: {}", downloads.dir().display());
        Ok(Self::new(Box::new(PathSaveSurface::new(output, overwrite)), Box::new(downloads)))
    }

    pub fn write(&mut self, document: &ExportDocument, suggested_name: &str) -> Result<ExportOutcome> {
        let json = render_json(document)?;
        let contents = json.as_bytes();

        let save_error = match self.surface.save(suggested_name, contents) {
            Ok(SaveAttempt::Saved(path)) => {
                info!("saved export to {}", path.display());
                return Ok(ExportOutcome::Saved(path));
            }
            Ok(SaveAttempt::Cancelled) => {
                info!("export cancelled");
                return Ok(ExportOutcome::Cancelled);
            }
            Ok(SaveAttempt::Unavailable) => {
                info!("no save destination, falling back to download");
                None
            }
            Err(e) => {
                warn!("save failed, falling back to download: {:#}", e);
                Some(format!("{:#}", e))
            }
        };

        let path = self
            .fallback
            .download(suggested_name, contents)
            .context("Failed to download export")?;
        info!("downloaded export to {}", path.display());
        Ok(ExportOutcome::Downloaded { path, save_error })
    }
}

/// Canonical two-space indented JSON form of the document.
pub fn render_json(document: &ExportDocument) -> Result<String> {
    serde_json::to_string_pretty(document).context("Failed to serialize export document")
}
