// Celebrity List - Commands Module
// Tauri commands organized by concern

pub mod list;
pub mod edit;
pub mod settings;

// Re-export all commands for easy registration
pub use list::*;
pub use edit::*;
pub use settings::*;

use std::sync::{Mutex, MutexGuard};

use tauri::AppHandle;
use tauri_plugin_dialog::{DialogExt, MessageDialogButtons, MessageDialogKind};

use crate::celebrities::{CelebrityList, Prompt};
use crate::constants::PROMPT_TITLE;

/// Controller state managed by Tauri.
/// One list per app instance; every command locks, mutates, and returns a fresh view.
pub struct ListState(pub Mutex<CelebrityList>);

impl ListState {
    pub fn new() -> Self {
        ListState(Mutex::new(CelebrityList::new()))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, CelebrityList>, String> {
        self.0.lock().map_err(|e| e.to_string())
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

/// Native message dialogs. Blocking, so only use from async commands.
pub struct DialogPrompt<'a> {
    app: &'a AppHandle,
}

impl<'a> DialogPrompt<'a> {
    pub fn new(app: &'a AppHandle) -> Self {
        Self { app }
    }
}

impl Prompt for DialogPrompt<'_> {
    fn alert(&self, message: &str) {
        self.app
            .dialog()
            .message(message)
            .title(PROMPT_TITLE)
            .kind(MessageDialogKind::Warning)
            .blocking_show();
    }

    fn confirm(&self, message: &str) -> bool {
        self.app
            .dialog()
            .message(message)
            .title(PROMPT_TITLE)
            .kind(MessageDialogKind::Warning)
            .buttons(MessageDialogButtons::OkCancel)
            .blocking_show()
    }
}
