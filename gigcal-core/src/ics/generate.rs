//! VEVENT / VCALENDAR generation.

use chrono::{NaiveDateTime, NaiveTime};
use icalendar::{Calendar, Component, EventLike};

use crate::attendance::Attendance;
use crate::error::{GigcalError, GigcalResult};
use crate::record::EventRecord;

pub const DEFAULT_PRODID: &str = "EventCalendarGenerator";

/// Generate one VEVENT block (CRLF-terminated) for a record.
///
/// Every call mints a fresh UID, so rendering the same record twice yields
/// two distinct events.
pub fn generate_vevent(record: &EventRecord) -> GigcalResult<String> {
    let start = combine(record, "doors open", &record.doors_open)?;
    let end = combine(record, "doors close", &record.doors_close)?;
    let attendance = Attendance::estimate_for(record);

    // Real newlines here; the icalendar crate writes them as a literal `\n`.
    let description = [
        format!("📍 Venue: {} (Capacity: {})", record.venue, record.capacity),
        format!("🎟 Tickets: {}", record.tickets_url),
        format!("📊 {}", attendance.status_line),
        format!("ℹ️ {}", record.desc_text),
        format!("📝 Notes: {}", record.notes),
        format!("🚪 Doors: {} - {}", record.doors_open, record.doors_close),
        format!("🎤 First act: {}", record.first_act),
        format!(
            "⏰ Busiest: {} - {}",
            record.busyness_start, record.busyness_end
        ),
        format!(
            "👥 Expected attendance: {} / {}",
            attendance.estimate, record.capacity
        ),
    ]
    .join("\n");

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&uuid::Uuid::new_v4().to_string());
    ics_event.summary(&record.title);
    ics_event.add_property("DTSTART", format_local(start));
    ics_event.add_property("DTEND", format_local(end));
    ics_event.description(&description);
    ics_event.location(&record.venue);
    ics_event.add_property("URL", &record.tickets_url);
    ics_event.add_property(
        "CATEGORIES",
        format!("master,{}", record.area.to_lowercase()),
    );

    let mut cal = Calendar::new();
    cal.push(ics_event.done());
    let cal = cal.done();

    Ok(extract_vevent(&cal.to_string()))
}

/// Generate a complete VCALENDAR document holding one VEVENT per record, in order.
pub fn generate_calendar<'a>(
    prodid: &str,
    records: impl IntoIterator<Item = &'a EventRecord>,
) -> GigcalResult<String> {
    let mut output = format!("BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:{prodid}\r\n");

    for record in records {
        output.push_str(&generate_vevent(record)?);
    }

    output.push_str("END:VCALENDAR\r\n");
    Ok(output)
}

/// Pull the VEVENT block out of the icalendar crate's output
/// - Drop DTSTAMP (it would make every run differ)
/// - Keep the list separator in `CATEGORIES:master,<area>` unescaped
fn extract_vevent(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());
    let mut in_vevent = false;

    for line in ics.lines() {
        if line == "BEGIN:VEVENT" {
            in_vevent = true;
        }
        if !in_vevent || line.starts_with("DTSTAMP:") {
            continue;
        }

        match line.strip_prefix("CATEGORIES:master\\,") {
            Some(area) => {
                result.push_str("CATEGORIES:master,");
                result.push_str(area);
            }
            None => result.push_str(line),
        }
        result.push_str("\r\n");

        if line == "END:VEVENT" {
            in_vevent = false;
        }
    }

    result
}

/// Join the record's date with an `HH:MM` time of day.
fn combine(record: &EventRecord, field: &'static str, value: &str) -> GigcalResult<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| GigcalError::InvalidTime {
        field,
        value: value.to_string(),
        title: record.title.clone(),
        date: record.date,
    })?;
    Ok(record.date.and_time(time))
}

/// Floating local time: no `Z`, no `TZID`.
fn format_local(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_line;
    use icalendar::parser::unfold;

    fn make_test_record() -> EventRecord {
        parse_line("2024-05-01|Gig Night||Soho|The Venue|100|19:00|23:00|Status: Sold Out").unwrap()
    }

    fn find_line<'a>(ics: &'a str, prefix: &str) -> &'a str {
        ics.lines()
            .find(|l| l.starts_with(prefix))
            .unwrap_or_else(|| panic!("Missing {prefix} line. ICS:\n{ics}"))
    }

    #[test]
    fn test_generate_vevent_core_properties() {
        let raw = generate_vevent(&make_test_record()).unwrap();
        assert!(raw.starts_with("BEGIN:VEVENT\r\n"));
        assert!(raw.ends_with("END:VEVENT\r\n"));

        let ics = unfold(&raw);
        assert_eq!(find_line(&ics, "SUMMARY:"), "SUMMARY:Gig Night");
        assert_eq!(find_line(&ics, "DTSTART"), "DTSTART:20240501T190000");
        assert_eq!(find_line(&ics, "DTEND"), "DTEND:20240501T230000");
        assert_eq!(find_line(&ics, "LOCATION:"), "LOCATION:The Venue");
        assert_eq!(find_line(&ics, "URL:"), "URL:N/A");
        assert_eq!(find_line(&ics, "CATEGORIES:"), "CATEGORIES:master,soho");
        assert!(!ics.contains("TZID"), "Times must be floating. ICS:\n{ics}");
        assert!(!ics.contains("DTSTAMP"), "DTSTAMP should be stripped. ICS:\n{ics}");
        assert!(!ics.contains("CALSCALE"), "Only the VEVENT block is kept. ICS:\n{ics}");
    }

    #[test]
    fn test_description_uses_literal_line_breaks() {
        let ics = unfold(&generate_vevent(&make_test_record()).unwrap());
        let description = find_line(&ics, "DESCRIPTION:");

        let entries: Vec<&str> = description["DESCRIPTION:".len()..].split("\\n").collect();
        assert_eq!(entries.len(), 9, "Got: {description}");
        assert_eq!(entries[0], "📍 Venue: The Venue (Capacity: 100)");
        assert_eq!(entries[1], "🎟 Tickets: N/A");
        assert_eq!(entries[2], "📊 Sold out: expect a full house");
        assert_eq!(entries[3], "ℹ️ Status: Sold Out");
        assert_eq!(entries[8], "👥 Expected attendance: 100 / 100");
    }

    #[test]
    fn test_text_values_are_escaped() {
        let mut record = make_test_record();
        record.title = "Rock, Paper; Scissors".to_string();
        record.notes = "Bring ID, no bags".to_string();

        let ics = unfold(&generate_vevent(&record).unwrap());

        assert_eq!(
            find_line(&ics, "SUMMARY:"),
            "SUMMARY:Rock\\, Paper\\; Scissors"
        );
        assert!(find_line(&ics, "DESCRIPTION:").contains("Notes: Bring ID\\, no bags"));
    }

    #[test]
    fn test_each_vevent_gets_a_new_uid() {
        let record = make_test_record();
        let first = generate_vevent(&record).unwrap();
        let second = generate_vevent(&record).unwrap();

        assert_ne!(find_line(&first, "UID:"), find_line(&second, "UID:"));

        let strip_uid = |ics: &str| {
            ics.lines()
                .filter(|l| !l.starts_with("UID:"))
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert_eq!(strip_uid(&first), strip_uid(&second));
    }

    #[test]
    fn test_invalid_doors_time_is_an_error() {
        let mut record = make_test_record();
        record.doors_close = "late".to_string();

        let err = generate_vevent(&record).unwrap_err();
        assert!(
            matches!(err, GigcalError::InvalidTime { field: "doors close", .. }),
            "Got: {err}"
        );
    }

    #[test]
    fn test_generate_calendar_wraps_events_in_order() {
        let first = make_test_record();
        let mut second = make_test_record();
        second.title = "Second Set".to_string();

        let ics = generate_calendar("TestProd", [&first, &second]).unwrap();
        let lines: Vec<&str> = ics.lines().collect();

        assert_eq!(&lines[..3], &["BEGIN:VCALENDAR", "VERSION:2.0", "PRODID:TestProd"]);
        assert_eq!(lines.last(), Some(&"END:VCALENDAR"));

        let summaries: Vec<&str> = lines
            .iter()
            .filter(|l| l.starts_with("SUMMARY:"))
            .copied()
            .collect();
        assert_eq!(summaries, vec!["SUMMARY:Gig Night", "SUMMARY:Second Set"]);
    }

    #[test]
    fn test_generate_calendar_with_no_events() {
        let ics = generate_calendar(DEFAULT_PRODID, Vec::<&EventRecord>::new()).unwrap();
        assert_eq!(
            ics,
            "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:EventCalendarGenerator\r\nEND:VCALENDAR\r\n"
        );
    }
}
