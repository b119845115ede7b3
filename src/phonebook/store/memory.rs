use super::DataStore;
use crate::error::Result;
use crate::record::ExportedRecord;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    records: Vec<ExportedRecord>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<ExportedRecord>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &[ExportedRecord] {
        &self.records
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<ExportedRecord>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[ExportedRecord]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
