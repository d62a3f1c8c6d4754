//! Parsing of master listing lines into event records.
//!
//! A line is a `|`-separated list of positional fields:
//!
//! ```text
//! date | title | tickets | area | venue | capacity | doors | close | description [| notes | first act | busy from | busy until]
//! ```
//!
//! The first nine fields are required; the last four fall back to defaults.

use chrono::NaiveDate;
use thiserror::Error;

/// Minimum number of `|`-separated fields a line must have.
pub const REQUIRED_FIELDS: usize = 9;

const STATUS_MARKER: &str = "Status:";

const NOT_AVAILABLE: &str = "N/A";
const DEFAULT_FIRST_ACT: &str = "TBA";
const DEFAULT_BUSY_START: &str = "18:00";
const DEFAULT_BUSY_END: &str = "21:00";

/// One gig, as read from a single listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub date: NaiveDate,
    pub title: String,
    pub tickets_url: String,
    pub area: String,
    pub venue: String,
    pub capacity: u32,
    pub doors_open: String,
    pub doors_close: String,
    pub desc_text: String,
    pub status: String,
    pub notes: String,
    pub first_act: String,
    pub busyness_start: String,
    pub busyness_end: String,
    /// The listing line this record was parsed from.
    pub raw: String,
}

/// Why a listing line did not produce a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("expected at least 9 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("'{0}' is not a YYYY-MM-DD date")]
    InvalidDate(String),
}

/// A line that was dropped during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input document.
    pub line_number: usize,
    pub raw: String,
    pub reason: SkipReason,
}

/// Result of parsing a whole listing document.
#[derive(Debug, Default)]
pub struct ParsedInput {
    /// Number of non-blank lines seen.
    pub lines_read: usize,
    pub records: Vec<EventRecord>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a single listing line.
///
/// `line` is expected to be trimmed and non-blank; it is kept verbatim in
/// [`EventRecord::raw`].
pub fn parse_line(line: &str) -> Result<EventRecord, SkipReason> {
    let parts: Vec<&str> = line.split('|').map(str::trim).collect();

    if parts.len() < REQUIRED_FIELDS {
        return Err(SkipReason::TooFewFields { found: parts.len() });
    }

    let date = NaiveDate::parse_from_str(parts[0], "%Y-%m-%d")
        .map_err(|_| SkipReason::InvalidDate(parts[0].to_string()))?;

    let desc_text = parts[8].to_string();
    let status = extract_status(&desc_text);

    Ok(EventRecord {
        date,
        title: parts[1].to_string(),
        tickets_url: non_empty_or(Some(parts[2]), NOT_AVAILABLE),
        area: parts[3].to_string(),
        venue: parts[4].to_string(),
        capacity: parse_capacity(parts[5]),
        doors_open: parts[6].to_string(),
        doors_close: parts[7].to_string(),
        desc_text,
        status,
        notes: non_empty_or(parts.get(9).copied(), NOT_AVAILABLE),
        first_act: non_empty_or(parts.get(10).copied(), DEFAULT_FIRST_ACT),
        busyness_start: non_empty_or(parts.get(11).copied(), DEFAULT_BUSY_START),
        busyness_end: non_empty_or(parts.get(12).copied(), DEFAULT_BUSY_END),
        raw: line.to_string(),
    })
}

/// Parse every non-blank line of a listing document.
///
/// Bad lines are logged and collected in [`ParsedInput::skipped`]; they never
/// stop the remaining lines from being parsed.
pub fn parse_lines(content: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();

    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        parsed.lines_read += 1;

        match parse_line(line) {
            Ok(record) => parsed.records.push(record),
            Err(reason) => {
                tracing::warn!(line_number = index + 1, %reason, "Skipping line: {}", line);
                parsed.skipped.push(SkippedLine {
                    line_number: index + 1,
                    raw: line.to_string(),
                    reason,
                });
            }
        }
    }

    parsed
}

/// Capacity is only taken from an all-digit field; anything else counts as 0.
fn parse_capacity(field: &str) -> u32 {
    if !field.is_empty() && field.chars().all(|c| c.is_ascii_digit()) {
        field.parse().unwrap_or(0)
    } else {
        0
    }
}

/// Text after the last `Status:` marker, or `N/A` when there is none.
fn extract_status(desc_text: &str) -> String {
    match desc_text.rfind(STATUS_MARKER) {
        Some(pos) => desc_text[pos + STATUS_MARKER.len()..].trim().to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn non_empty_or(field: Option<&str>, default: &str) -> String {
    match field {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GIG_NIGHT: &str = "2024-05-01|Gig Night||Soho|The Venue|100|19:00|23:00|Status: Sold Out";

    #[test]
    fn test_parse_line_minimal_fields_get_defaults() {
        let record = parse_line(GIG_NIGHT).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(record.title, "Gig Night");
        assert_eq!(record.tickets_url, "N/A");
        assert_eq!(record.area, "Soho");
        assert_eq!(record.venue, "The Venue");
        assert_eq!(record.capacity, 100);
        assert_eq!(record.doors_open, "19:00");
        assert_eq!(record.doors_close, "23:00");
        assert_eq!(record.status, "Sold Out");
        assert_eq!(record.notes, "N/A");
        assert_eq!(record.first_act, "TBA");
        assert_eq!(record.busyness_start, "18:00");
        assert_eq!(record.busyness_end, "21:00");
        assert_eq!(record.raw, GIG_NIGHT);
    }

    #[test]
    fn test_parse_line_all_fields() {
        let line = " 2024-06-12 | Jazz Brunch | https://tix.example/jb | Camden | Jazz Cafe | 450 | 11:00 | 15:00 | Lazy Sunday set. Status: Limited | Cash only | The Quartet | 12:30 | 14:00 ";
        let record = parse_line(line.trim()).unwrap();

        assert_eq!(record.tickets_url, "https://tix.example/jb");
        assert_eq!(record.capacity, 450);
        assert_eq!(record.desc_text, "Lazy Sunday set. Status: Limited");
        assert_eq!(record.status, "Limited");
        assert_eq!(record.notes, "Cash only");
        assert_eq!(record.first_act, "The Quartet");
        assert_eq!(record.busyness_start, "12:30");
        assert_eq!(record.busyness_end, "14:00");
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        let err = parse_line("2024-05-01|Gig Night|Soho").unwrap_err();
        assert_eq!(err, SkipReason::TooFewFields { found: 3 });
    }

    #[test]
    fn test_parse_line_bad_date() {
        let err = parse_line("01/05/2024|Gig Night||Soho|The Venue|100|19:00|23:00|Status: Sold Out")
            .unwrap_err();
        assert_eq!(err, SkipReason::InvalidDate("01/05/2024".to_string()));
    }

    #[test]
    fn test_capacity_must_be_digits() {
        assert_eq!(parse_capacity("500"), 500);
        assert_eq!(parse_capacity("five hundred"), 0);
        assert_eq!(parse_capacity("-5"), 0);
        assert_eq!(parse_capacity("1,000"), 0);
        assert_eq!(parse_capacity(""), 0);
    }

    #[test]
    fn test_status_uses_last_marker() {
        assert_eq!(
            extract_status("Status: Available. Update Status:  Sold out "),
            "Sold out"
        );
        assert_eq!(extract_status("Just a description"), "N/A");
    }

    #[test]
    fn test_empty_optional_fields_fall_back() {
        let record = parse_line(
            "2024-05-01|Gig Night|x|Soho|The Venue|100|19:00|23:00|desc|||20:00|",
        )
        .unwrap();

        assert_eq!(record.notes, "N/A");
        assert_eq!(record.first_act, "TBA");
        assert_eq!(record.busyness_start, "20:00");
        assert_eq!(record.busyness_end, "21:00");
    }

    #[test]
    fn test_parse_lines_skips_bad_lines_and_continues() {
        let content = format!("{GIG_NIGHT}\n\nnot|enough\n   \n{GIG_NIGHT}\n");
        let parsed = parse_lines(&content);

        assert_eq!(parsed.lines_read, 3);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line_number, 3);
        assert_eq!(parsed.skipped[0].raw, "not|enough");
    }
}
