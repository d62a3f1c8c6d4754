//! Terminal rendering for run reports.
//!
//! Extension traits that add colored output to gigcal-core types using
//! owo_colors.

use gigcal_core::pipeline::{AreaReport, RunReport};
use gigcal_core::record::SkippedLine;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for AreaReport {
    fn render(&self) -> String {
        format!(
            "📍 {} {}\n   {}\n   {}",
            self.area.bold(),
            format!("({} {})", self.events, pluralize("event", self.events)).dimmed(),
            self.txt_path.display(),
            self.ics_path.display()
        )
    }
}

impl Render for SkippedLine {
    fn render(&self) -> String {
        format!(
            "   {} line {}: {}\n     {}",
            "-".red(),
            self.line_number,
            self.reason.to_string().red(),
            self.raw.dimmed()
        )
    }
}

impl Render for RunReport {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if self.areas.is_empty() {
            lines.push("No events found.".dimmed().to_string());
        }
        for area in &self.areas {
            lines.push(area.render());
        }

        lines.push(String::new());
        lines.push(format!(
            "📅 {} {}",
            self.combined_path.display().bold(),
            format!(
                "({} {} across {} {})",
                self.parsed,
                pluralize("event", self.parsed),
                self.areas.len(),
                pluralize("area", self.areas.len())
            )
            .dimmed()
        ));

        if !self.skipped.is_empty() {
            lines.push(String::new());
            lines.push(
                format!(
                    "Skipped {} of {} {}:",
                    self.skipped.len(),
                    self.lines_read,
                    pluralize("line", self.lines_read)
                )
                .yellow()
                .to_string(),
            );
            for skipped in &self.skipped {
                lines.push(skipped.render());
            }
        }

        lines.join("\n")
    }
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
