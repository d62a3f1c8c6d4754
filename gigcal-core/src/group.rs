//! Batching of records by area.

use std::collections::HashMap;

use crate::record::EventRecord;

/// All records for one area, in input order.
#[derive(Debug, Clone)]
pub struct AreaGroup {
    pub area: String,
    pub records: Vec<EventRecord>,
}

/// Records grouped by their exact area string.
///
/// Areas keep the order in which they were first seen. Names are not
/// normalized, so `Soho` and `soho` are two separate groups.
#[derive(Debug, Default)]
pub struct AreaGroups {
    groups: Vec<AreaGroup>,
    index: HashMap<String, usize>,
}

impl AreaGroups {
    pub fn from_records(records: impl IntoIterator<Item = EventRecord>) -> Self {
        let mut groups = AreaGroups::default();
        for record in records {
            groups.push(record);
        }
        groups
    }

    pub fn push(&mut self, record: EventRecord) {
        match self.index.get(&record.area) {
            Some(&i) => self.groups[i].records.push(record),
            None => {
                self.index.insert(record.area.clone(), self.groups.len());
                self.groups.push(AreaGroup {
                    area: record.area.clone(),
                    records: vec![record],
                });
            }
        }
    }

    pub fn get(&self, area: &str) -> Option<&AreaGroup> {
        self.index.get(area).map(|&i| &self.groups[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &AreaGroup> {
        self.groups.iter()
    }

    /// Number of distinct areas.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    /// Every record, area by area, each area in input order.
    pub fn all_records(&self) -> impl Iterator<Item = &EventRecord> {
        self.groups.iter().flat_map(|g| g.records.iter())
    }
}
