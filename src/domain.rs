//! Domain models for parsed reports.
//!
//! This module contains the output types of the parser, the assessment tier
//! classification, and the display metadata and configuration consumed by
//! renderers.

/// Assessment badges and severity tiers.
pub mod assessment;
pub use assessment::{AssessmentBadge, ParseTierError, Tier};

/// Configuration file handling.
pub mod config;
pub use config::{Config, OutputFormat};

pub mod display;
pub use display::{DisplayConfig, DisplayTable};

mod report;
pub use report::{Section, Subsection};
