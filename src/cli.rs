use std::path::{Path, PathBuf};

mod init;
mod parse;
mod pretty;
mod summary;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use parse::Parse;
use structured_report::Config;
use summary::Summary;

/// Config file picked up from the working directory when `--config` is not
/// given.
const DEFAULT_CONFIG_FILE: &str = "report.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file (defaults to ./report.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);
        self.command.run(self.config.as_deref())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Parse a report and print its structure
    Parse(Parse),

    /// Summarize many reports, one line per file
    ///
    /// Directories are searched recursively for `.md` and `.txt` files.
    Summary(Summary),

    /// Write a default configuration file
    Init(init::Command),
}

impl Command {
    fn run(self, config_path: Option<&Path>) -> anyhow::Result<()> {
        match self {
            Self::Parse(command) => command.run(&load_config(config_path)?)?,
            Self::Summary(command) => command.run()?,
            Self::Init(command) => {
                command.run(config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE)))?;
            }
        }
        Ok(())
    }
}

/// Loads the configuration.
///
/// An explicit path must load. The default file is optional and is skipped
/// with a warning if it cannot be parsed.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()));
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if !default_path.exists() {
        tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using default config");
        return Ok(Config::default());
    }

    Ok(Config::load(default_path).unwrap_or_else(|e| {
        tracing::warn!("Ignoring {DEFAULT_CONFIG_FILE}: {e}");
        Config::default()
    }))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn explicit_config_must_load() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        assert!(load_config(Some(&missing)).is_err());
    }

    #[test]
    fn explicit_config_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\noutput = \"summary\"\n")
            .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.output, structured_report::OutputFormat::Summary);
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
