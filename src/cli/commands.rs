use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand};

use super::logging::LogLevel;
use super::panels::format_panels;
use crate::config::{AppConfig, CountOverride};
use crate::export::{
    DEFAULT_EXPORT_FILENAME, DigestSection, ExportOutcome, ExportSink, format_digest, render_json,
    to_structured_document,
};
use crate::generator::{format_timestamp, generate_seeded};
use crate::grouping::group_by_display;
use crate::models::{ChatSnapshot, SourcePlatform};
use crate::parsers::load_export_document;

#[derive(Parser)]
#[command(name = "mock-inbox")]
#[command(version = "0.1.0")]
#[command(about = "Generate mock chat inboxes and export them as structured JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to $XDG_CONFIG_HOME/mock-inbox/config.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for reproducible generation
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Override a platform's message count, e.g. --count WhatsApp=5
    #[arg(long = "count", global = true, value_name = "PLATFORM=N")]
    pub counts: Vec<CountOverride>,

    /// Log verbosity
    #[arg(short, long, global = true, value_name = "LEVEL", default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate messages and export them as structured JSON
    Export {
        #[command(flatten)]
        target: ExportTarget,

        /// File name used for downloads and directory destinations
        #[arg(long, default_value = DEFAULT_EXPORT_FILENAME)]
        filename: String,

        /// Print the document to stdout instead of saving it
        #[arg(long, conflicts_with_all = ["output", "force", "downloads_dir"])]
        stdout: bool,
    },
    /// Print the display panels
    Show {
        /// Maximum messages listed per panel
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show statistics about a generated inbox
    Stats,
    /// Browse the display panels interactively
    View {
        #[command(flatten)]
        target: ExportTarget,
    },
    /// Print the unread digest of an exported file
    Digest {
        /// Exported JSON document
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = DigestSection::All)]
        section: DigestSection,
    },
}

/// Where exports go.
#[derive(Args, Debug, Clone)]
pub struct ExportTarget {
    /// Save to this file (or into this directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(long)]
    pub force: bool,

    /// Fallback download directory (defaults to the platform downloads folder)
    #[arg(long, value_name = "DIR")]
    pub downloads_dir: Option<PathBuf>,
}

impl ExportTarget {
    fn sink(&self) -> Result<ExportSink> {
        ExportSink::for_paths(self.output.clone(), self.force, self.downloads_dir.clone())
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Export { target, filename, stdout }) => {
            let (config, snapshot) = load_snapshot(&cli)?;
            export(&config, &snapshot, target, filename, *stdout)?;
        }
        Some(Commands::Show { limit }) => {
            let (_, snapshot) = load_snapshot(&cli)?;
            let groups = group_by_display(&snapshot);
            print!("{}", format_panels(&groups, &Utc::now(), *limit));
        }
        Some(Commands::Stats) => {
            let (_, snapshot) = load_snapshot(&cli)?;
            show_stats(&snapshot);
        }
        Some(Commands::View { target }) => {
            let (config, snapshot) = load_snapshot(&cli)?;
            crate::tui::run_interactive(&snapshot, &config.export, target.sink()?)?;
        }
        Some(Commands::Digest { file, section }) => {
            let document = load_export_document(file)?;
            print!("{}", format_digest(&document, *section));
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn load_snapshot(cli: &Cli) -> Result<(AppConfig, ChatSnapshot)> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli.counts, cli.seed);
    let snapshot = generate_seeded(&config.generation, Utc::now());
    Ok((config, snapshot))
}

fn export(
    config: &AppConfig,
    snapshot: &ChatSnapshot,
    target: &ExportTarget,
    filename: &str,
    stdout: bool,
) -> Result<()> {
    let document = to_structured_document(snapshot, &config.export);

    if stdout {
        println!("{}", render_json(&document)?);
        return Ok(());
    }

    match target.sink()?.write(&document, filename)? {
        ExportOutcome::Saved(path) => {
            println!("Saved {} messages to {}", document.message_count(), path.display());
        }
        ExportOutcome::Downloaded { path, save_error } => {
            if let Some(err) = save_error {
                eprintln!("Save failed: {}", err);
            }
            println!("Downloaded {} messages to {}", document.message_count(), path.display());
        }
        ExportOutcome::Cancelled => {
            eprintln!("Export cancelled");
        }
    }

    Ok(())
}

fn show_stats(snapshot: &ChatSnapshot) {
    let groups = group_by_display(snapshot);

    println!("Mock Inbox Statistics");
    println!("=====================");
    println!("Total messages: {}", snapshot.len());
    for platform in SourcePlatform::ALL {
        let count = snapshot.iter().filter(|m| m.source == platform).count();
        println!("  {}: {}", platform, count);
    }
    println!();
    println!("Display panels:");
    for (display, messages) in groups.iter() {
        println!("  {}: {} ({} unread)", display, messages.len(), groups.unread_count(display));
    }

    if let Some(newest) = snapshot.newest() {
        println!(
            "Newest message: {} ({})",
            newest.timestamp.format("%Y-%m-%d %H:%M:%S"),
            format_timestamp(&newest.timestamp)
        );
    }
    if let Some(oldest) = snapshot.oldest() {
        println!(
            "Oldest message: {} ({})",
            oldest.timestamp.format("%Y-%m-%d %H:%M:%S"),
            format_timestamp(&oldest.timestamp)
        );
    }
}
