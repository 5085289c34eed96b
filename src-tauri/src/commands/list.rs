// Celebrity List - List Commands
// Loading, searching and expanding rows

use std::path::PathBuf;

use serde::Serialize;
use tauri::path::BaseDirectory;
use tauri::{AppHandle, Manager, State};

use crate::celebrities::{FileSource, ListView, Toggle};
use crate::constants::BUNDLED_DATA_RESOURCE;
use crate::settings;
use super::ListState;

/// Header click result plus the refreshed list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub toggle: Toggle,
    pub view: ListView,
}

/// Location of the celebrity document: settings override, else the bundled resource
fn data_path(app: &AppHandle) -> Result<PathBuf, String> {
    if let Some(path) = settings::load_settings().data_source {
        return Ok(PathBuf::from(path));
    }
    app.path()
        .resolve(BUNDLED_DATA_RESOURCE, BaseDirectory::Resource)
        .map_err(|e| format!("Could not resolve bundled data: {}", e))
}

/// Populate the list on first render. Later calls just return the current view.
#[tauri::command(async)]
pub fn load_celebrities(app: AppHandle, state: State<'_, ListState>) -> Result<ListView, String> {
    let mut list = state.lock()?;
    let source = FileSource::new(data_path(&app)?);
    list.load(&source);
    Ok(list.view())
}

#[tauri::command(async)]
pub fn get_list_view(state: State<'_, ListState>) -> Result<ListView, String> {
    let list = state.lock()?;
    Ok(list.view())
}

#[tauri::command(async)]
pub fn set_search(state: State<'_, ListState>, query: String) -> Result<ListView, String> {
    let mut list = state.lock()?;
    list.set_search(&query);
    Ok(list.view())
}

#[tauri::command(async)]
pub fn toggle_details(state: State<'_, ListState>, id: i64) -> Result<ToggleResponse, String> {
    let mut list = state.lock()?;
    let toggle = list.toggle_details(id).map_err(|e| e.to_string())?;
    Ok(ToggleResponse {
        toggle,
        view: list.view(),
    })
}
