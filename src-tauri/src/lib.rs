// Celebrity List - Library Entry Point

pub mod constants;
pub mod error;
pub mod settings;
pub mod celebrities;
#[cfg(feature = "desktop")]
pub mod commands;

pub use celebrities::CelebrityList;
#[cfg(feature = "desktop")]
pub use commands::ListState;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // The log plugin is not installed yet; report a bad settings file once it is
    let (app_settings, settings_warning) = settings::read_settings();

    tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::new()
                .level(app_settings.level_filter())
                .build(),
        )
        .plugin(tauri_plugin_dialog::init())
        .setup(move |_app| {
            if let Some(warning) = settings_warning {
                log::warn!("{}", warning);
            }
            Ok(())
        })
        .manage(ListState::new())
        .invoke_handler(tauri::generate_handler![
            // List commands
            commands::load_celebrities,
            commands::get_list_view,
            commands::set_search,
            commands::toggle_details,
            // Edit / delete commands
            commands::start_edit,
            commands::update_draft_field,
            commands::save_edit,
            commands::cancel_edit,
            commands::delete_celebrity,
            // Settings
            commands::get_app_settings,
            commands::save_app_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
