//! Configuration layer for stash-notify.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Connection settings are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** (including their environment variables)
//! 2. **TOML config file**
//! 3. **Built-in defaults**
//!
//! `base_url`, `username`, and `password` have no defaults and must come
//! from the CLI or the file.
//!
//! The `--insecure` flag only enables: once `accept_invalid_certs = true`
//! is set in TOML, the CLI cannot turn certificate checks back on.
//!
//! The extra header string is taken whole from one source; CLI and TOML
//! header strings are not merged.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{BuildStateArg, Cli, Command, SendArgs};
pub use error::{ConfigError, field};
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
