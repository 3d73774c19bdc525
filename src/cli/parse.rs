use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use structured_report::{Config, OutputFormat, parse_structured_analysis, render};
use tracing::instrument;

use super::{pretty, terminal::is_narrow};

#[derive(Debug, Parser)]
#[command(about = "Parse a report and print its structure")]
pub struct Parse {
    /// The report to parse. Reads standard input when omitted or `-`.
    input: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_name = "FORMAT")]
    output: Option<OutputFormat>,
}

impl Parse {
    #[instrument(level = "debug", skip_all)]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let document = read_input(self.input.as_deref())?;
        let sections = parse_structured_analysis(&document);

        match self.output.unwrap_or(config.output) {
            OutputFormat::Pretty => {
                let table = config.display_table();
                print!(
                    "{}",
                    pretty::render(&document, &sections, &table, is_narrow())
                );
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&sections)?);
            }
            OutputFormat::Markup => {
                if sections.is_empty() {
                    println!("{}", document.trim());
                } else {
                    print!("{}", render::to_markup(&sections));
                }
            }
            OutputFormat::Summary => print!("{}", pretty::summary(&sections)),
        }

        Ok(())
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut document = String::new();
            io::stdin()
                .read_to_string(&mut document)
                .context("failed to read standard input")?;
            Ok(document)
        }
    }
}
