// Celebrity List - Edit and Delete Commands
// Native dialogs are shown only while the list is unlocked: check under the
// lock, release it, prompt, then lock again and apply (which re-checks).

use tauri::{AppHandle, State};

use crate::celebrities::{notify_refusal, EditableField, ListView, Prompt};
use crate::constants::CONFIRM_DELETE_MESSAGE;
use crate::error::CelebrityError;
use super::{DialogPrompt, ListState};

/// Enter edit mode. Minors get a blocking notification and an error.
#[tauri::command(async)]
pub fn start_edit(app: AppHandle, state: State<'_, ListState>, id: i64) -> Result<ListView, String> {
    let checked = state.lock()?.check_edit(id);
    if let Err(e) = checked {
        notify_refusal(&e, &DialogPrompt::new(&app));
        return Err(e.to_string());
    }

    let mut list = state.lock()?;
    list.begin_edit(id).map_err(|e| e.to_string())?;
    Ok(list.view())
}

/// Update one field of the draft (`first`, `last`, `dob`, `gender`, `country`, `description`)
#[tauri::command(async)]
pub fn update_draft_field(state: State<'_, ListState>, field: String, value: String) -> Result<ListView, String> {
    let field: EditableField = field.parse().map_err(|e: CelebrityError| e.to_string())?;
    let mut list = state.lock()?;
    list.update_field(field, &value).map_err(|e| e.to_string())?;
    Ok(list.view())
}

#[tauri::command(async)]
pub fn save_edit(state: State<'_, ListState>) -> Result<ListView, String> {
    let mut list = state.lock()?;
    list.save_edit().map_err(|e| e.to_string())?;
    Ok(list.view())
}

#[tauri::command(async)]
pub fn cancel_edit(state: State<'_, ListState>) -> Result<ListView, String> {
    let mut list = state.lock()?;
    list.cancel_edit();
    Ok(list.view())
}

/// Confirm, then delete. Declining returns the unchanged view.
#[tauri::command(async)]
pub fn delete_celebrity(app: AppHandle, state: State<'_, ListState>, id: i64) -> Result<ListView, String> {
    let checked = state.lock()?.check_delete(id);
    checked.map_err(|e| e.to_string())?;

    let confirmed = DialogPrompt::new(&app).confirm(CONFIRM_DELETE_MESSAGE);

    let mut list = state.lock()?;
    if confirmed {
        list.delete(id).map_err(|e| e.to_string())?;
    }
    Ok(list.view())
}
