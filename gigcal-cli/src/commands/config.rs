use std::path::Path;

use anyhow::Result;
use gigcal_core::GigcalConfig;
use owo_colors::OwoColorize;

pub fn run(explicit: Option<&Path>) -> Result<()> {
    let loaded = GigcalConfig::load(explicit)?;
    let config = &loaded.config;

    println!("{}", "Config".bold());
    match &loaded.source {
        Some(path) => println!("  File:       {}", path.display()),
        None => println!("  File:       {}", "(defaults)".dimmed()),
    }

    println!("{}", "Paths".bold());
    println!("  Input:      {}", config.input_file.display());
    println!("  Text:       {}", config.txt_dir.display());
    println!("  Calendars:  {}", config.ics_dir.display());

    println!("{}", "Calendar".bold());
    println!("  All areas:  {}_Events.ics", config.all_areas_label);
    println!("  PRODID:     {}", config.prodid);

    Ok(())
}
