//! Turnout estimates derived from a record's free-text status.

use crate::record::EventRecord;

/// Coarse ticket status, matched case-insensitively against the status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    SoldOut,
    Limited,
    Available,
    Unknown,
}

/// Classify a status phrase. Rules are checked in order and the first hit wins.
pub fn classify(status: &str) -> StatusCategory {
    let status = status.to_lowercase();

    if status.contains("sold out") {
        StatusCategory::SoldOut
    } else if status.contains("limited") || status.contains("few") {
        StatusCategory::Limited
    } else if status.contains("available") {
        StatusCategory::Available
    } else {
        StatusCategory::Unknown
    }
}

impl StatusCategory {
    /// Expected number of attendees for a venue of the given capacity.
    pub fn estimate(self, capacity: u32) -> u32 {
        let capacity = u64::from(capacity);
        let estimate = match self {
            StatusCategory::SoldOut => capacity,
            StatusCategory::Limited => capacity * 7 / 10,
            StatusCategory::Available => capacity * 4 / 10,
            StatusCategory::Unknown => 0,
        };
        u32::try_from(estimate).unwrap_or(u32::MAX)
    }
}

/// Turnout estimate plus the human-readable line shown in calendar descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendance {
    pub category: StatusCategory,
    pub estimate: u32,
    pub status_line: String,
}

impl Attendance {
    pub fn estimate_for(record: &EventRecord) -> Self {
        let category = classify(&record.status);

        let status_line = match category {
            StatusCategory::SoldOut => "Sold out: expect a full house".to_string(),
            StatusCategory::Limited => "Limited tickets left: expect a busy night".to_string(),
            StatusCategory::Available => "Tickets available: expect a moderate crowd".to_string(),
            StatusCategory::Unknown => format!("Status: {}", record.status),
        };

        Attendance {
            category,
            estimate: category.estimate(record.capacity),
            status_line,
        }
    }
}
