//! Writing per-area listings and calendars to disk.

use std::path::{Path, PathBuf};

use crate::config::GigcalConfig;
use crate::error::{GigcalError, GigcalResult};
use crate::group::AreaGroups;
use crate::ics::generate_calendar;
use crate::record::EventRecord;

/// Writes `<area>_Events.txt` and `<area>_Events.ics` files.
///
/// Existing files with the same name are overwritten.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    txt_dir: PathBuf,
    ics_dir: PathBuf,
    prodid: String,
}

impl OutputWriter {
    pub fn new(txt_dir: impl Into<PathBuf>, ics_dir: impl Into<PathBuf>, prodid: &str) -> Self {
        OutputWriter {
            txt_dir: txt_dir.into(),
            ics_dir: ics_dir.into(),
            prodid: prodid.to_string(),
        }
    }

    pub fn from_config(config: &GigcalConfig) -> Self {
        Self::new(&config.txt_dir, &config.ics_dir, &config.prodid)
    }

    /// Create both output directories. Existing directories are fine.
    pub fn prepare(&self) -> GigcalResult<()> {
        for dir in [&self.txt_dir, &self.ics_dir] {
            std::fs::create_dir_all(dir).map_err(|source| GigcalError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn txt_path(&self, area: &str) -> PathBuf {
        self.txt_dir.join(format!("{}_Events.txt", file_stem(area)))
    }

    pub fn ics_path(&self, area: &str) -> PathBuf {
        self.ics_dir.join(format!("{}_Events.ics", file_stem(area)))
    }

    /// Write each record's raw line, newline-terminated, in the given order.
    pub fn write_area_txt(&self, area: &str, records: &[EventRecord]) -> GigcalResult<PathBuf> {
        let content: String = records.iter().map(|r| format!("{}\n", r.raw)).collect();

        let path = self.txt_path(area);
        write_file(&path, &content)?;
        Ok(path)
    }

    pub fn write_area_ics(&self, area: &str, records: &[EventRecord]) -> GigcalResult<PathBuf> {
        let content = generate_calendar(&self.prodid, records)?;

        let path = self.ics_path(area);
        write_file(&path, &content)?;
        Ok(path)
    }

    /// Write one calendar holding every grouped record, area by area.
    ///
    /// An area whose file name matches `label` has its own calendar replaced.
    pub fn write_combined_ics(&self, label: &str, groups: &AreaGroups) -> GigcalResult<PathBuf> {
        if groups.iter().any(|g| file_stem(&g.area) == file_stem(label)) {
            tracing::warn!(
                label,
                "Area calendar is overwritten by the all-areas calendar of the same name"
            );
        }

        let content = generate_calendar(&self.prodid, groups.all_records())?;

        let path = self.ics_path(label);
        write_file(&path, &content)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> GigcalResult<()> {
    std::fs::write(path, content).map_err(|source| GigcalError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "Wrote file");
    Ok(())
}

/// Area name as a file name component. Path separators and NUL become `_`;
/// everything else, including case, is kept.
fn file_stem(area: &str) -> String {
    area.chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            _ => c,
        })
        .collect()
}
