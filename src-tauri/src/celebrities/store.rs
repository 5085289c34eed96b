// In-memory record store
// Holds every record for the session in document order. Records are replaced
// in place or removed; the store never reorders and never creates records.

use std::collections::HashSet;

use super::record::Celebrity;
use crate::error::{CelebrityError, Result};

#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    records: Vec<Celebrity>,
}

impl RecordStore {
    /// Build a store from a fetched document. Rejects duplicate ids.
    pub fn from_records(records: Vec<Celebrity>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for celeb in &records {
            if !seen.insert(celeb.id) {
                return Err(CelebrityError::DuplicateId(celeb.id));
            }
        }
        Ok(Self { records })
    }

    pub fn all(&self) -> &[Celebrity] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Celebrity> {
        self.records.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Replace the record with the same id, keeping its position
    pub fn replace(&mut self, celebrity: Celebrity) -> Result<()> {
        let slot = self
            .records
            .iter_mut()
            .find(|c| c.id == celebrity.id)
            .ok_or(CelebrityError::RecordNotFound(celebrity.id))?;
        *slot = celebrity;
        Ok(())
    }

    /// Remove a record by id, returning it
    pub fn remove(&mut self, id: i64) -> Result<Celebrity> {
        let index = self
            .records
            .iter()
            .position(|c| c.id == id)
            .ok_or(CelebrityError::RecordNotFound(id))?;
        Ok(self.records.remove(index))
    }
}
