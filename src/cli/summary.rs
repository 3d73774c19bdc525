use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use structured_report::{Section, Tier, parse_structured_analysis};
use tracing::instrument;
use walkdir::WalkDir;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Summarize many reports, one line per file")]
pub struct Summary {
    /// Report files, or directories to search for `.md` and `.txt` files
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Only list reports with a section assessed at this tier (good,
    /// acceptable, needs-improvement, problematic or unknown)
    #[arg(long, value_name = "TIER")]
    tier: Option<Tier>,
}

impl Summary {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self) -> anyhow::Result<()> {
        let files = collect_files(&self.paths);
        tracing::debug!("Summarizing {} files", files.len());

        let results: Vec<_> = files
            .par_iter()
            .map(|path| {
                let sections = fs::read_to_string(path)
                    .map(|document| parse_structured_analysis(&document));
                (path, sections)
            })
            .collect();

        let mut failures = 0;
        for (path, result) in results {
            match result {
                Ok(sections) if has_tier(&sections, self.tier) => {
                    println!("{}  {}", path.display(), describe(&sections));
                }
                Ok(_) => tracing::trace!("Skipping {} (no matching tier)", path.display()),
                Err(e) => {
                    failures += 1;
                    eprintln!("{}  {}", path.display(), format!("error: {e}").token("danger"));
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{failures} of {} files could not be read", files.len());
        }
        Ok(())
    }
}

/// Expands directories into the report files beneath them, sorted by path.
/// Explicit file arguments are kept as given.
fn collect_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if !path.is_dir() {
            files.push(path.clone());
            continue;
        }

        let mut found: Vec<PathBuf> = WalkDir::new(path)
            .into_iter()
            .filter_map(|entry| {
                entry
                    .map_err(|e| tracing::warn!("Skipping unreadable entry: {e}"))
                    .ok()
            })
            .filter(|entry| entry.file_type().is_file() && is_report(entry.path()))
            .map(walkdir::DirEntry::into_path)
            .collect();
        found.sort();
        files.extend(found);
    }

    files
}

fn is_report(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("txt"))
}

/// Whether any section carries a badge of the given tier. No tier matches
/// every report.
fn has_tier(sections: &[Section], tier: Option<Tier>) -> bool {
    tier.is_none_or(|tier| {
        sections
            .iter()
            .any(|section| section.assessment.as_ref().is_some_and(|badge| badge.tier == tier))
    })
}

fn describe(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "unstructured".to_string();
    }

    let tiers: Vec<&str> = sections
        .iter()
        .map(|section| {
            section
                .assessment
                .as_ref()
                .map_or("-", |badge| badge.tier.as_str())
        })
        .collect();
    format!("{} sections [{}]", sections.len(), tiers.join(", "))
}
