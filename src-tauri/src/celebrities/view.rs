// Row presentation returned to the page (and printed by the CLI)

use chrono::NaiveDate;
use serde::Serialize;

use super::age;
use super::record::Celebrity;
use super::session::EditSession;
use super::LoadState;
use crate::constants::{INDICATOR_COLLAPSED, INDICATOR_EXPANDED};

/// Whole list as the page renders it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub query: String,
    pub rows: Vec<RowView>,
    pub visible: usize,
    pub total: usize,
    pub load_state: LoadState,
    pub editing_id: Option<i64>,
}

/// One collapsible row
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub id: i64,
    pub name: String,
    pub picture: String,
    pub expanded: bool,
    pub indicator: &'static str,
    pub editing: bool,
    pub details: Option<RowDetails>,
    pub draft: Option<DraftView>,
}

/// Detail body shown while a row is expanded
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDetails {
    /// None when the date of birth cannot be interpreted
    pub age: Option<u32>,
    pub age_label: String,
    pub gender: String,
    pub country: String,
    pub description: String,
    pub can_edit: bool,
}

/// Edit form state for the row being edited
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    pub record: Celebrity,
    pub dirty: bool,
}

/// "<n> Years", or "Unknown" for an unusable date of birth
pub fn age_label(age: Option<u32>) -> String {
    match age {
        Some(years) => format!("{} Years", years),
        None => "Unknown".to_string(),
    }
}

pub fn row_details(celebrity: &Celebrity, today: NaiveDate) -> RowDetails {
    let age = age::age_on(&celebrity.dob, today).ok();
    RowDetails {
        age,
        age_label: age_label(age),
        gender: celebrity.gender.clone(),
        country: celebrity.country.clone(),
        description: celebrity.description.clone(),
        can_edit: age.map(age::is_adult).unwrap_or(false),
    }
}

pub fn row_view(
    celebrity: &Celebrity,
    expanded: bool,
    session: Option<&EditSession>,
    today: NaiveDate,
) -> RowView {
    let session = session.filter(|s| s.id() == celebrity.id);

    RowView {
        id: celebrity.id,
        name: celebrity.full_name(),
        picture: celebrity.picture.clone(),
        expanded,
        indicator: if expanded { INDICATOR_EXPANDED } else { INDICATOR_COLLAPSED },
        editing: session.is_some(),
        details: expanded.then(|| row_details(celebrity, today)),
        draft: session.filter(|_| expanded).map(|s| DraftView {
            record: s.draft().clone(),
            dirty: s.is_dirty(),
        }),
    }
}
