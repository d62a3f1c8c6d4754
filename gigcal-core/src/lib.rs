//! Core of the gigcal toolkit.
//!
//! Turns a pipe-delimited master listing of gigs into per-area text files
//! and iCalendar documents:
//! - `record` parses one listing line into an `EventRecord`
//! - `attendance` estimates turnout from the free-text status
//! - `group` batches records by area
//! - `ics` renders VEVENT / VCALENDAR text
//! - `output` writes the per-area and combined files
//! - `pipeline` runs all of the above from a `GigcalConfig`

pub mod attendance;
pub mod config;
pub mod error;
pub mod group;
pub mod ics;
pub mod output;
pub mod pipeline;
pub mod record;

pub use config::GigcalConfig;
pub use error::{GigcalError, GigcalResult};
pub use record::EventRecord;
