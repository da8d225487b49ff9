//! Inventory of extracted containers

use crate::models::Record;

/// All containers found in one state document, in extraction order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    records: Vec<Record>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Records in extraction order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of containers
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of containers expected to be running
    pub fn running(&self) -> usize {
        self.records.iter().filter(|r| r.status.is_running()).count()
    }

    /// Number of stopped containers (always `total - running`)
    pub fn stopped(&self) -> usize {
        self.total() - self.running()
    }

    /// Records ordered by module, then name
    pub fn sorted(&self) -> Vec<&Record> {
        let mut sorted: Vec<&Record> = self.records.iter().collect();
        sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        sorted
    }

    /// Check if any container publishes a port
    pub fn has_endpoints(&self) -> bool {
        self.records.iter().any(|r| r.endpoints().next().is_some())
    }
}

impl From<Vec<Record>> for Inventory {
    fn from(records: Vec<Record>) -> Self {
        Self::from_records(records)
    }
}
