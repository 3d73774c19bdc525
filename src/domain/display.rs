//! Display metadata for report sections.
//!
//! Renderers choose an icon and colors for each section by looking up the
//! section's exact title. The lookup never normalizes: `"1. Shot Performance"`
//! and `"1. shot performance"` are different keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Icon and color tokens used to draw a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Name of the icon shown next to the section title.
    pub icon: String,
    /// Color token for the title and accents.
    pub color_token: String,
    /// Color token for the card border.
    pub border_color_token: String,
}

impl DisplayConfig {
    /// Creates a display config from its three tokens.
    #[must_use]
    pub fn new(
        icon: impl Into<String>,
        color_token: impl Into<String>,
        border_color_token: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            color_token: color_token.into(),
            border_color_token: border_color_token.into(),
        }
    }
}

impl Default for DisplayConfig {
    /// The generic config applied to sections with no table entry.
    fn default() -> Self {
        Self::new("file-text", "neutral", "neutral-border")
    }
}

/// A title → [`DisplayConfig`] table with a fallback entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTable {
    entries: BTreeMap<String, DisplayConfig>,
    fallback: DisplayConfig,
}

impl DisplayTable {
    /// The table of section titles the report generator is known to produce.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = [
            (
                "1. Shot Performance",
                DisplayConfig::new("gauge", "primary", "primary-border"),
            ),
            (
                "2. Root Cause Analysis",
                DisplayConfig::new("search", "warning", "warning-border"),
            ),
            (
                "3. Recommended Adjustments",
                DisplayConfig::new("sliders", "success", "success-border"),
            ),
            (
                "4. Next Shot Expectations",
                DisplayConfig::new("target", "info", "info-border"),
            ),
            (
                "5. Profile Notes",
                DisplayConfig::new("notebook", "accent", "accent-border"),
            ),
        ]
        .into_iter()
        .map(|(title, config)| (title.to_string(), config))
        .collect();

        Self {
            entries,
            fallback: DisplayConfig::default(),
        }
    }

    /// Returns the config for an exact title match, or the fallback.
    #[must_use]
    pub fn resolve(&self, title: &str) -> &DisplayConfig {
        self.entries.get(title).unwrap_or(&self.fallback)
    }

    /// Adds or replaces the entry for a title.
    ///
    /// Returns the entry that was replaced, if any.
    pub fn insert(&mut self, title: String, config: DisplayConfig) -> Option<DisplayConfig> {
        self.entries.insert(title, config)
    }

    /// Replaces the config used for unknown titles.
    pub fn set_fallback(&mut self, config: DisplayConfig) {
        self.fallback = config;
    }

    /// The config used for unknown titles.
    #[must_use]
    pub const fn fallback(&self) -> &DisplayConfig {
        &self.fallback
    }

    /// Iterates over the explicit entries in title order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DisplayConfig)> {
        self.entries
            .iter()
            .map(|(title, config)| (title.as_str(), config))
    }
}

impl Default for DisplayTable {
    fn default() -> Self {
        Self::builtin()
    }
}
