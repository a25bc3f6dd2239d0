//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::status::BuildState;

use super::defaults;

/// stash-notify: build status reporter
///
/// Posts the state of a build for one commit to a Bitbucket Server
/// (Stash) build-status endpoint.
#[derive(Debug, Parser)]
#[command(name = "stash-notify")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Server base URL, e.g. `https://stash.example.com`
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// User for Basic authentication
    #[arg(long, global = true, env = "STASH_USERNAME")]
    pub username: Option<String>,

    /// Password for Basic authentication
    #[arg(long, global = true, env = "STASH_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Extra headers as comma-separated 'Key:Value' pairs
    #[arg(long, global = true, value_name = "K:V,...")]
    pub headers: Option<String>,

    /// Accept invalid or self-signed TLS certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Connect timeout in seconds
    #[arg(long = "connect-timeout", global = true, value_name = "SECS")]
    pub connect_timeout: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for stash-notify
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Send one build status notification
    Send(SendArgs),

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Arguments of the `send` subcommand.
#[derive(Debug, Clone, Args)]
pub struct SendArgs {
    /// Build state to report
    #[arg(long, value_enum)]
    pub state: BuildStateArg,

    /// Build plan key
    #[arg(long)]
    pub key: String,

    /// Build display name (only the first line is sent)
    #[arg(long)]
    pub name: String,

    /// Link to the build results
    #[arg(long)]
    pub url: String,

    /// Build description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Commit revision the status belongs to
    #[arg(long)]
    pub revision: String,

    /// Log the request without sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Build state argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BuildStateArg {
    /// The build has started
    #[value(name = "in-progress")]
    InProgress,
    /// The build succeeded
    #[value(name = "successful")]
    Successful,
    /// The build failed
    #[value(name = "failed")]
    Failed,
}

impl From<BuildStateArg> for BuildState {
    fn from(arg: BuildStateArg) -> Self {
        match arg {
            BuildStateArg::InProgress => Self::InProgress,
            BuildStateArg::Successful => Self::Successful,
            BuildStateArg::Failed => Self::Failed,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
