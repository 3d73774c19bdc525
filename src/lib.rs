//! Structured Analysis Reports
//!
//! Reports are plain-text documents with numbered sections, labeled
//! subsections of bullet items, and optional assessment badges. This crate
//! parses them into typed, renderable structures.

pub mod domain;
pub use domain::{
    AssessmentBadge, Config, DisplayConfig, DisplayTable, OutputFormat, Section, Subsection, Tier,
};

pub mod parser;
pub use parser::parse_structured_analysis;

pub mod render;
