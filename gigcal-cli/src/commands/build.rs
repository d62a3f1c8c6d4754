use std::path::PathBuf;

use anyhow::{Context, Result};
use gigcal_core::GigcalConfig;
use gigcal_core::pipeline;

use crate::render::Render;

/// Command-line values that take precedence over the loaded config.
#[derive(Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub txt_dir: Option<PathBuf>,
    pub ics_dir: Option<PathBuf>,
    pub label: Option<String>,
}

impl Overrides {
    fn apply(self, config: GigcalConfig) -> GigcalConfig {
        GigcalConfig {
            input_file: self.input.unwrap_or(config.input_file),
            txt_dir: self.txt_dir.unwrap_or(config.txt_dir),
            ics_dir: self.ics_dir.unwrap_or(config.ics_dir),
            all_areas_label: self.label.unwrap_or(config.all_areas_label),
            prodid: config.prodid,
        }
        .expanded()
    }
}

pub fn run(overrides: Overrides) -> Result<()> {
    let loaded = GigcalConfig::load(overrides.config.as_deref())?;
    let config = overrides.apply(loaded.config);

    let report = pipeline::run(&config)
        .with_context(|| format!("Failed to build calendars from {}", config.input_file.display()))?;

    println!("{}", report.render());

    Ok(())
}
