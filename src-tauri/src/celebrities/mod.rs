// Celebrity List controller
// Owns the record store and every piece of transient view state (search query,
// expanded row, edit session). All mutations go through the methods below; the
// visible list is recomputed from (store, query) on every read.

pub mod age;
pub mod filter;
pub mod prompt;
pub mod record;
pub mod session;
pub mod source;
pub mod store;
pub mod view;


use serde::Serialize;

use crate::constants::{CONFIRM_DELETE_MESSAGE, UNDERAGE_EDIT_MESSAGE};
use crate::error::{CelebrityError, Result};

pub use age::Clock;
pub use prompt::{Prompt, ScriptedPrompt};
pub use record::{Celebrity, EditableField, Gender};
pub use session::EditSession;
pub use source::{FileSource, RecordSource, StaticSource};
pub use store::RecordStore;
pub use view::{ListView, RowView};

/// Outcome of the one-time document load
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "camelCase")]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(usize),
    Failed(String),
}

/// Result of clicking a row header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Toggle {
    Expanded,
    Collapsed,
    /// Another row is mid-edit; nothing changed
    Blocked,
}

#[derive(Debug, Default)]
pub struct CelebrityList {
    store: RecordStore,
    load_state: LoadState,
    query: String,
    expanded_id: Option<i64>,
    edit: Option<EditSession>,
    clock: Clock,
}

impl CelebrityList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller evaluating ages against the given clock
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    // --- Record store & fetch ---

    /// Populate the store from `source`. Runs at most once per controller:
    /// later calls are ignored whether the first one succeeded or failed.
    /// A failure is logged and leaves the store empty.
    pub fn load(&mut self, source: &dyn RecordSource) -> &LoadState {
        if self.load_state != LoadState::Pending {
            log::debug!("Ignoring reload from {}: already {:?}", source.describe(), self.load_state);
            return &self.load_state;
        }

        self.load_state = match source.fetch().and_then(RecordStore::from_records) {
            Ok(store) => {
                if store.is_empty() {
                    log::warn!("Celebrity document {} is empty", source.describe());
                }
                log::info!("Loaded {} celebrities from {}", store.len(), source.describe());
                let count = store.len();
                self.store = store;
                LoadState::Loaded(count)
            }
            Err(e) => {
                log::error!("Error fetching data from {}: {}", source.describe(), e);
                LoadState::Failed(e.to_string())
            }
        };

        &self.load_state
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn records(&self) -> &[Celebrity] {
        self.store.all()
    }

    pub fn get(&self, id: i64) -> Option<&Celebrity> {
        self.store.get(id)
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    // --- Search filter ---

    pub fn set_search(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn search(&self) -> &str {
        &self.query
    }

    /// Records matching the current query, in store order
    pub fn visible(&self) -> Vec<&Celebrity> {
        filter::filter_records(self.store.all(), &self.query)
    }

    // --- Expansion ---

    pub fn expanded_id(&self) -> Option<i64> {
        self.expanded_id
    }

    /// Header click. Collapses an expanded row, otherwise expands it (and
    /// collapses whichever row was open). Blocked while a different row is
    /// being edited.
    pub fn toggle_details(&mut self, id: i64) -> Result<Toggle> {
        if !self.store.contains(id) {
            return Err(CelebrityError::RecordNotFound(id));
        }
        if let Some(editing) = self.editing_id() {
            if editing != id {
                return Ok(Toggle::Blocked);
            }
        }

        if self.expanded_id == Some(id) {
            self.expanded_id = None;
            Ok(Toggle::Collapsed)
        } else {
            self.expanded_id = Some(id);
            Ok(Toggle::Expanded)
        }
    }

    // --- Edit session ---

    pub fn editing_id(&self) -> Option<i64> {
        self.edit.as_ref().map(|s| s.id())
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_dirty(&self) -> bool {
        self.edit.as_ref().map(|s| s.is_dirty()).unwrap_or(false)
    }

    /// Age of a stored record as of the controller's clock
    pub fn age_of(&self, id: i64) -> Result<u32> {
        let celeb = self.store.get(id).ok_or(CelebrityError::RecordNotFound(id))?;
        age::age_on(&celeb.dob, self.clock.today())
    }

    /// Whether `id` may enter edit mode right now. Pure check, no side
    /// effects: minors and records with an unusable date of birth are refused,
    /// as is any record while a different one is being edited. Asking for the
    /// record already being edited succeeds.
    pub fn check_edit(&self, id: i64) -> Result<()> {
        match self.editing_id() {
            Some(editing) if editing == id => return Ok(()),
            Some(editing) => return Err(CelebrityError::EditInProgress(editing)),
            None => {}
        }

        let age = self.age_of(id)?;
        if !age::is_adult(age) {
            return Err(CelebrityError::Underage { id, age });
        }
        Ok(())
    }

    /// Start the edit session without prompting. Re-checks eligibility, so a
    /// caller that prompted between `check_edit` and this call stays safe.
    pub fn begin_edit(&mut self, id: i64) -> Result<()> {
        self.check_edit(id)?;
        if self.editing_id() == Some(id) {
            return Ok(());
        }

        let record = self.store.get(id).ok_or(CelebrityError::RecordNotFound(id))?;
        self.edit = Some(EditSession::begin(record));
        self.expanded_id = Some(id);
        Ok(())
    }

    /// Enter edit mode for `id`. Minors (and records whose age cannot be
    /// determined) are refused with a blocking notification.
    pub fn start_edit(&mut self, id: i64, prompt: &dyn Prompt) -> Result<()> {
        if let Err(e) = self.check_edit(id) {
            notify_refusal(&e, prompt);
            return Err(e);
        }
        self.begin_edit(id)
    }

    /// Change one field of the draft; the store is untouched
    pub fn update_field(&mut self, field: EditableField, value: &str) -> Result<()> {
        let session = self.edit.as_mut().ok_or(CelebrityError::NoActiveEdit)?;
        session.set_field(field, value)
    }

    /// Commit the draft into the store in place and leave edit mode.
    /// A draft whose date of birth is unusable is refused and stays open.
    pub fn save_edit(&mut self) -> Result<Celebrity> {
        let session = self.edit.as_ref().ok_or(CelebrityError::NoActiveEdit)?;
        age::age_on(&session.draft().dob, self.clock.today())?;

        let draft = match self.edit.take() {
            Some(session) => session.into_draft(),
            None => return Err(CelebrityError::NoActiveEdit),
        };
        self.store.replace(draft.clone())?;
        log::info!("Saved celebrity {}", draft.id);
        Ok(draft)
    }

    /// Discard the draft. No-op when nothing is being edited.
    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            log::debug!("Discarded edit of celebrity {}", session.id());
        }
    }

    // --- Delete ---

    /// Whether `id` may be deleted right now (exists, no edit in progress)
    pub fn check_delete(&self, id: i64) -> Result<()> {
        if !self.store.contains(id) {
            return Err(CelebrityError::RecordNotFound(id));
        }
        if let Some(editing) = self.editing_id() {
            return Err(CelebrityError::EditInProgress(editing));
        }
        Ok(())
    }

    /// Remove the record without asking. Re-checks `check_delete`.
    pub fn delete(&mut self, id: i64) -> Result<Celebrity> {
        self.check_delete(id)?;
        let removed = self.store.remove(id)?;
        if self.expanded_id == Some(id) {
            self.expanded_id = None;
        }
        log::info!("Deleted celebrity {}", id);
        Ok(removed)
    }

    /// Ask for confirmation, then remove the record. Returns whether it was
    /// removed; declining changes nothing.
    pub fn confirm_delete(&mut self, id: i64, prompt: &dyn Prompt) -> Result<bool> {
        self.check_delete(id)?;
        if !prompt.confirm(CONFIRM_DELETE_MESSAGE) {
            return Ok(false);
        }
        self.delete(id)?;
        Ok(true)
    }

    // --- Presentation ---

    pub fn view(&self) -> ListView {
        let today = self.clock.today();
        let rows: Vec<RowView> = self
            .visible()
            .into_iter()
            .map(|c| view::row_view(c, self.expanded_id == Some(c.id), self.edit.as_ref(), today))
            .collect();

        ListView {
            query: self.query.clone(),
            visible: rows.len(),
            rows,
            total: self.store.len(),
            load_state: self.load_state.clone(),
            editing_id: self.editing_id(),
        }
    }
}

/// Show the blocking notice for an age-based edit refusal. Other errors
/// (unknown record, another edit in progress) are left to the caller.
pub fn notify_refusal(err: &CelebrityError, prompt: &dyn Prompt) {
    match err {
        CelebrityError::Underage { id, age } => {
            log::warn!("Refusing edit of celebrity {}: age {}", id, age);
        }
        CelebrityError::InvalidDate(dob) => {
            log::warn!("Refusing edit: unusable date of birth {:?}", dob);
        }
        _ => return,
    }
    prompt.alert(UNDERAGE_EDIT_MESSAGE);
}
