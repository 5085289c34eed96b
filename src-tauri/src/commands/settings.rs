// Celebrity List - App Settings Commands

use crate::settings::{self, AppSettings};

#[tauri::command]
pub fn get_app_settings() -> Result<AppSettings, String> {
    Ok(settings::load_settings())
}

#[tauri::command]
pub fn save_app_settings(new_settings: AppSettings) -> Result<(), String> {
    let path = settings::get_settings_path().map_err(|e| e.to_string())?;
    settings::save_settings_to(&path, &new_settings).map_err(|e| e.to_string())
}
