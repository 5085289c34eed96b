// Edit session: a working copy of one record
// Field edits touch only the draft; the store sees the draft on save.

use serde::Serialize;

use super::record::{Celebrity, EditableField};
use crate::error::Result;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    original: Celebrity,
    draft: Celebrity,
}

impl EditSession {
    pub fn begin(record: &Celebrity) -> Self {
        Self {
            original: record.clone(),
            draft: record.clone(),
        }
    }

    pub fn id(&self) -> i64 {
        self.original.id
    }

    pub fn original(&self) -> &Celebrity {
        &self.original
    }

    pub fn draft(&self) -> &Celebrity {
        &self.draft
    }

    /// Draft differs from the record the session started from
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    pub fn set_field(&mut self, field: EditableField, value: &str) -> Result<()> {
        self.draft.set_field(field, value)
    }

    pub fn into_draft(self) -> Celebrity {
        self.draft
    }
}
