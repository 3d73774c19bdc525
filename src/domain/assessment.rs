use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A coarse severity classification for a section's assessment.
///
/// Tiers are derived from the free-form status text by case-insensitive
/// substring matching. See [`Tier::classify`] for the matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// The status mentions "good".
    Good,
    /// The status mentions "acceptable".
    Acceptable,
    /// The status mentions "needs improvement".
    NeedsImprovement,
    /// The status mentions "problematic".
    Problematic,
    /// None of the known phrases appear in the status.
    Unknown,
}

impl Tier {
    /// Phrases checked against the lower-cased status, in priority order.
    const PHRASES: [(&'static str, Self); 4] = [
        ("good", Self::Good),
        ("acceptable", Self::Acceptable),
        ("needs improvement", Self::NeedsImprovement),
        ("problematic", Self::Problematic),
    ];

    /// Classifies free-form status text into a tier.
    ///
    /// The lower-cased status is checked for each known phrase in a fixed
    /// order (`good`, `acceptable`, `needs improvement`, `problematic`) and
    /// the first phrase found decides the tier. A status such as
    /// `"Good, but problematic channeling"` is therefore [`Tier::Good`].
    #[must_use]
    pub fn classify(status: &str) -> Self {
        let status = status.to_lowercase();
        Self::PHRASES
            .iter()
            .find(|(phrase, _)| status.contains(phrase))
            .map_or(Self::Unknown, |&(_, tier)| tier)
    }

    /// The canonical lower-case name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Acceptable => "acceptable",
            Self::NeedsImprovement => "needs-improvement",
            Self::Problematic => "problematic",
            Self::Unknown => "unknown",
        }
    }

    /// The color token a renderer should use for this tier's badge.
    #[must_use]
    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Good => "success",
            Self::Acceptable => "info",
            Self::NeedsImprovement => "warning",
            Self::Problematic => "danger",
            Self::Unknown => "neutral",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ParseTierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Self::Good),
            "acceptable" => Ok(Self::Acceptable),
            "needs-improvement" => Ok(Self::NeedsImprovement),
            "problematic" => Ok(Self::Problematic),
            "unknown" => Ok(Self::Unknown),
            other => Err(ParseTierError(other.to_string())),
        }
    }
}

/// Error returned when a string is not the canonical name of a [`Tier`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown assessment tier '{0}'")]
pub struct ParseTierError(String);

/// The status annotation attached to a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentBadge {
    /// The status text exactly as written, trimmed of surrounding whitespace.
    pub status: String,
    /// The tier the status was classified into.
    pub tier: Tier,
}

impl AssessmentBadge {
    /// Builds a badge from status text, classifying its tier.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        let status = status.into();
        let tier = Tier::classify(&status);
        Self { status, tier }
    }
}
