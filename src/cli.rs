//! CLI definition and parsing.
//! Defines Args (global logging flags plus one subcommand per library operation)
//! and provides parse() for command-line handling.
//!
//! Notes:
//! - --debug is a shorthand for --log-level debug and wins over it.
//! - Predicates (is-child, equals) answer through the exit status: 0 yes, 1 no.

use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Command-line front end for the plugfs path and file helpers.
/// Flags override values from the XML config ($PLUGFS_CONFIG or the default location).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Portable path and file helpers for plugin discovery"
)]
pub struct Args {
    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(short = 'd', long, global = true, help = "Enable debug logging (shorthand for --log-level debug)")]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, global = true, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long, global = true, help = "Emit logs in structured JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Expand $VARS and a leading ~ in a path.
    Expand { path: String },

    /// Join two paths with exactly one separator.
    Join { base: String, path: String },

    /// Print the parent directory of a path.
    Dirname { path: String },

    /// Make a path absolute against the current directory.
    Absolute { path: String },

    /// Express PATH relative to BASE.
    Relative { path: String, base: String },

    /// Exit 0 if PATH starts with DIR (plain prefix test), 1 otherwise.
    IsChild { path: String, dir: String },

    /// Print the first of CANDIDATE, CANDIDATE.2, ... that does not exist.
    FreePath { candidate: String },

    /// Print the newest numbered copy of ORIGINAL inside COPY_DIR.
    LatestCopy {
        #[arg(value_hint = ValueHint::FilePath)]
        original: PathBuf,
        #[arg(value_hint = ValueHint::DirPath)]
        copy_dir: PathBuf,
    },

    /// Exit 0 if both files have identical contents, 1 otherwise.
    Equals {
        #[arg(value_hint = ValueHint::FilePath)]
        a: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        b: PathBuf,
    },

    /// Copy SRC to DST, replacing DST.
    Copy {
        #[arg(value_hint = ValueHint::FilePath)]
        src: PathBuf,
        #[arg(value_hint = ValueHint::FilePath)]
        dst: PathBuf,
        /// Create missing parent directories of DST first.
        #[arg(long)]
        parents: bool,
        /// Hold advisory locks on SRC (shared) and DST (exclusive) while copying.
        #[arg(long)]
        lock: bool,
    },

    /// Create a directory and all missing parents.
    Mkdir {
        #[arg(value_hint = ValueHint::DirPath)]
        path: PathBuf,
    },

    /// Print the canonical path (or the input if it cannot be resolved).
    Realpath {
        #[arg(value_hint = ValueHint::AnyPath)]
        path: PathBuf,
    },

    /// Create LINK pointing at TARGET.
    Link {
        #[arg(value_hint = ValueHint::AnyPath)]
        target: PathBuf,
        #[arg(value_hint = ValueHint::AnyPath)]
        link: PathBuf,
    },

    /// Print the language tag derived from $LANG.
    Lang,
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
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.json {
            cfg.json_logs = true;
        }
        if let Command::Copy { lock: true, .. } = self.command {
            cfg.lock_copies = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
