//! CLI definition and parsing.
//! Defines Args/Command and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug.
//! - Global flags override values loaded from config.xml.

use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::folder::OrgId;

/// Query and relocate folders in a materialized-path hierarchy.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Query and relocate folders in a materialized-path hierarchy")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON file holding the folder collection (overrides config).
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        value_hint = ValueHint::FilePath,
        help = "JSON folder collection to load (default: the default data file if present, else generated sample data)"
    )]
    pub data: Option<PathBuf>,

    /// Seed for generated sample data (overrides config).
    #[arg(long, global = true, help = "Seed for generated sample data")]
    pub seed: Option<u64>,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        global = true,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json_logs: bool,

    /// Result format for listing commands.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print where folder_tree will look for the config file, then exit.
    #[arg(long, help = "Print the config file location used by folder_tree and exit")]
    pub print_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every folder owned by an organization.
    List {
        /// Organization id (default: configured org).
        #[arg(long)]
        org: Option<OrgId>,
    },
    /// List all descendants of a named folder within an organization.
    Children {
        /// Folder name.
        name: String,
        /// Organization id (default: configured org).
        #[arg(long)]
        org: Option<OrgId>,
    },
    /// Move a folder and its subtree under another folder.
    Move {
        /// Folder to move.
        source: String,
        /// New parent folder.
        destination: String,
        /// Write the updated collection back to the data file (default data path if none is set).
        #[arg(long)]
        save: bool,
    },
    /// Generate sample data.
    Generate {
        /// Output file (default: stdout).
        #[arg(long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
        /// Write to the data file (`--data`, config, or the default data path) instead of stdout.
        #[arg(long, conflicts_with = "out")]
        save: bool,
    },
    /// List the organizations present in the collection.
    Orgs,
    /// Write a template config file at the config location.
    InitConfig,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-indented JSON array.
    #[default]
    Json,
    /// One `name | paths | org_id` line per folder.
    Text,
}

impl Args {
    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(data) = &self.data {
            cfg.data_file = Some(data.clone());
        }
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
