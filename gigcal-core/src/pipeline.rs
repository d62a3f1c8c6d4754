//! End-to-end run: read the listing, parse, group, write every file.

use std::path::PathBuf;

use crate::config::GigcalConfig;
use crate::error::{GigcalError, GigcalResult};
use crate::group::AreaGroups;
use crate::output::OutputWriter;
use crate::record::{SkippedLine, parse_lines};

/// Files written for one area.
#[derive(Debug, Clone)]
pub struct AreaReport {
    pub area: String,
    pub events: usize,
    pub txt_path: PathBuf,
    pub ics_path: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Non-blank lines in the input.
    pub lines_read: usize,
    /// Lines that became events.
    pub parsed: usize,
    pub skipped: Vec<SkippedLine>,
    pub areas: Vec<AreaReport>,
    /// The calendar spanning every area.
    pub combined_path: PathBuf,
}

/// Run the whole pipeline.
///
/// Bad input lines are skipped and reported. Any I/O failure aborts the run;
/// files written before the failure are left in place.
pub fn run(config: &GigcalConfig) -> GigcalResult<RunReport> {
    let content =
        std::fs::read_to_string(&config.input_file).map_err(|source| GigcalError::ReadInput {
            path: config.input_file.clone(),
            source,
        })?;

    let parsed = parse_lines(&content);
    tracing::debug!(
        lines = parsed.lines_read,
        parsed = parsed.records.len(),
        skipped = parsed.skipped.len(),
        "Parsed input"
    );

    let groups = AreaGroups::from_records(parsed.records);

    let writer = OutputWriter::from_config(config);
    writer.prepare()?;

    let mut areas = Vec::with_capacity(groups.len());
    for group in groups.iter() {
        let txt_path = writer.write_area_txt(&group.area, &group.records)?;
        let ics_path = writer.write_area_ics(&group.area, &group.records)?;

        areas.push(AreaReport {
            area: group.area.clone(),
            events: group.records.len(),
            txt_path,
            ics_path,
        });
    }

    let combined_path = writer.write_combined_ics(&config.all_areas_label, &groups)?;

    Ok(RunReport {
        lines_read: parsed.lines_read,
        parsed: groups.total_records(),
        skipped: parsed.skipped,
        areas,
        combined_path,
    })
}
