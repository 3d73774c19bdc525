use std::{collections::BTreeMap, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::{DisplayConfig, DisplayTable};

/// Configuration for parsing and presenting reports.
///
/// Display overrides are merged over [`DisplayTable::builtin`], so a config
/// file only needs to mention the titles it wants to change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Display overrides keyed by exact section title.
    pub sections: BTreeMap<String, DisplayConfig>,

    /// Replaces the display config used for titles with no entry.
    pub fallback: Option<DisplayConfig>,

    /// The output format used when none is given on the command line.
    pub output: OutputFormat,
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Builds the display table: the built-in entries, then this config's
    /// overrides.
    #[must_use]
    pub fn display_table(&self) -> DisplayTable {
        let mut table = DisplayTable::builtin();
        for (title, config) in &self.sections {
            table.insert(title.clone(), config.clone());
        }
        if let Some(fallback) = &self.fallback {
            table.set_fallback(fallback.clone());
        }
        table
    }
}

/// How a parsed report is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored cards for the terminal.
    #[default]
    Pretty,
    /// The parsed sections as JSON.
    Json,
    /// The sections written back in canonical report markup.
    Markup,
    /// One line per section.
    Summary,
}

/// Errors that can occur when loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The config file could not be read or written.
    #[error("failed to access config file")]
    Io(#[from] io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// The serialized versions of the configuration.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        output: OutputFormat,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        fallback: Option<DisplayConfig>,

        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        sections: BTreeMap<String, DisplayConfig>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                output,
                fallback,
                sections,
            } => Self {
                sections,
                fallback,
                output,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        let Config {
            sections,
            fallback,
            output,
        } = config;
        Self::V1 {
            output,
            fallback,
            sections,
        }
    }
}
