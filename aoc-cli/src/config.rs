//! Configuration resolution from CLI args

use crate::cli::{Args, Commands};
use crate::error::CliError;
use aoc_http_client::AocClient;
use aoc_kit::{AocKit, EnvCredentials, Template};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Year override (None = current year)
    pub year: Option<u16>,
    /// Day override (None = today)
    pub day: Option<u8>,
    /// HTTP client pointed at the configured base URL
    pub client: AocClient,
    /// Environment variable the session is read from
    pub session_var: String,
    /// Quiet mode
    pub quiet: bool,
    /// Subcommand to run, with paths already expanded
    pub command: Commands,
}

impl Config {
    /// Build config from CLI args, validating the base URL up front
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let client = AocClient::builder()
            .base_url(args.base_url.as_str())?
            .build()?;

        if args.session_var.is_empty() {
            return Err(CliError::Config(
                "Session variable name must not be empty".to_string(),
            ));
        }

        let mut command = args.command;
        if let Commands::Scaffold {
            template: Some(path),
            ..
        } = &mut command
        {
            *path = expand_tilde(path);
        }

        Ok(Config {
            year: args.year,
            day: args.day,
            client,
            session_var: args.session_var,
            quiet: args.quiet,
            command,
        })
    }

    pub fn verbose(&self) -> bool {
        !self.quiet
    }

    /// Build the workflow kit, optionally with a template loaded from disk
    pub fn kit(&self, template: Option<&Path>) -> Result<AocKit, CliError> {
        let mut builder = AocKit::builder()
            .client(self.client.clone())
            .credentials(EnvCredentials::new(self.session_var.as_str()));

        if let Some(path) = template {
            builder = builder.template(Template::from_file(path)?);
        }

        Ok(builder.build()?)
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str
            .strip_prefix("~/")
            .or_else(|| (path_str == "~").then_some(""))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
