use std::path::Path;

use structured_report::{Config, DisplayTable};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Command {
    /// Copy the built-in section display table and fallback into the file so
    /// they can be edited
    #[arg(long)]
    with_sections: bool,
}

impl Command {
    #[instrument]
    pub fn run(self, path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }

        let mut config = Config::default();
        if self.with_sections {
            let table = DisplayTable::builtin();
            config.sections = table
                .iter()
                .map(|(title, display)| (title.to_string(), display.clone()))
                .collect();
            config.fallback = Some(table.fallback().clone());
        }

        config
            .save(path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {e}", path.display()))?;

        println!("Created {}", path.display());
        if config.sections.is_empty() {
            println!();
            println!("Add display overrides with entries such as:");
            println!("  [sections.\"1. Shot Performance\"]");
            println!("  icon = \"gauge\"");
            println!("  color_token = \"primary\"");
            println!("  border_color_token = \"primary-border\"");
        }

        Ok(())
    }
}
