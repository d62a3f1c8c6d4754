//! iCalendar generation.
//!
//! Output follows the RFC 5545 layout (CRLF lines, VCALENDAR wrapping
//! VEVENTs) without line folding or timezone data.

mod generate;

pub use generate::{DEFAULT_PRODID, generate_calendar, generate_vevent};
