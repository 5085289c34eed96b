// Celebrity List Constants
// Values shared by the desktop shell, the CLI and the list controller.

// Edit eligibility
pub const MIN_EDIT_AGE: u32 = 18;

// User-facing prompts
pub const UNDERAGE_EDIT_MESSAGE: &str = "Only adults can be edited.";
pub const CONFIRM_DELETE_MESSAGE: &str = "Are you sure you want to delete this user?";
pub const PROMPT_TITLE: &str = "Celebrity List";

// Row indicators
pub const INDICATOR_EXPANDED: &str = "▲";
pub const INDICATOR_COLLAPSED: &str = "▼";

// Data source
pub const DEFAULT_DATA_FILE: &str = "celebrities.json";
pub const BUNDLED_DATA_RESOURCE: &str = "resources/celebrities.json";

// Paths
pub const APP_DIR: &str = ".celebrity-list";
pub const SETTINGS_FILENAME: &str = "settings.json";

// Settings schema version
pub const SETTINGS_VERSION: u32 = 1;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_THEME: &str = "light";

// Gender choices offered by the edit form, in display order
pub const GENDER_OPTIONS: [&str; 5] = [
    "Male", "Female", "Transgender", "Rather not say", "Other"
];

// Date formats accepted for date of birth (RFC 3339 is tried separately)
pub const DOB_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y-%m-%dT%H:%M:%S"];
