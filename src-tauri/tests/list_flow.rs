// End-to-end flow through the public API with a document on disk

use std::io::Write;

use chrono::NaiveDate;
use tempfile::NamedTempFile;

use celebrity_list_lib::celebrities::{
    Clock, EditableField, FileSource, LoadState, ScriptedPrompt, Toggle,
};
use celebrity_list_lib::error::CelebrityError;
use celebrity_list_lib::CelebrityList;

const BUNDLED: &str = include_str!("../resources/celebrities.json");

fn document_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(BUNDLED.as_bytes()).unwrap();
    file
}

fn list_on(date: NaiveDate, file: &NamedTempFile) -> CelebrityList {
    let mut list = CelebrityList::with_clock(Clock::Fixed(date));
    list.load(&FileSource::new(file.path()));
    list
}

#[test]
fn test_bundled_document_loads() {
    let file = document_file();
    let list = list_on(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(), &file);
    assert_eq!(list.load_state(), &LoadState::Loaded(6));
    let ids: Vec<i64> = list.records().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_missing_document_leaves_empty_list() {
    let mut list = CelebrityList::new();
    let state = list.load(&FileSource::new("/no/such/dir/celebrities.json")).clone();
    assert!(matches!(state, LoadState::Failed(_)));
    assert!(list.view().rows.is_empty());
}

#[test]
fn test_search_expand_edit_save_delete() {
    let file = document_file();
    let mut list = list_on(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(), &file);

    // Aidan, Jordan and Dan contain "an"
    list.set_search("AN");
    let visible: Vec<i64> = list.visible().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![1, 2, 4]);

    // Maria turns 29 tomorrow
    assert_eq!(list.toggle_details(2).unwrap(), Toggle::Expanded);
    let view = list.view();
    let row = view.rows.iter().find(|r| r.id == 2).unwrap();
    assert_eq!(row.details.as_ref().unwrap().age_label, "28 Years");

    // edit Maria; other rows stay locked until the draft is saved
    list.start_edit(2, &ScriptedPrompt::new()).unwrap();
    assert_eq!(list.toggle_details(1).unwrap(), Toggle::Blocked);
    list.update_field(EditableField::Country, "Portugal").unwrap();
    list.update_field(EditableField::Gender, "Other").unwrap();
    list.save_edit().unwrap();

    let maria = list.get(2).unwrap();
    assert_eq!(maria.country, "Portugal");
    assert_eq!(maria.gender, "Other");
    assert_eq!(maria.email, "maria.jordan@example.com");

    // delete Dan after confirming
    let prompt = ScriptedPrompt::answering([true]);
    assert!(list.confirm_delete(4, &prompt).unwrap());
    let visible: Vec<i64> = list.visible().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![1, 2]);
    assert_eq!(list.records().len(), 5);
}

#[test]
fn test_minor_is_blocked_with_notification() {
    let file = document_file();
    let mut list = list_on(NaiveDate::from_ymd_opt(2024, 6, 14).unwrap(), &file);
    let prompt = ScriptedPrompt::new();

    let err = list.start_edit(3, &prompt).unwrap_err();
    assert!(matches!(err, CelebrityError::Underage { id: 3, age: 12 }));
    assert_eq!(prompt.alerts().len(), 1);
    assert!(list.edit_session().is_none());
}

#[test]
fn test_leap_day_celebrity_turns_eighteen_on_march_first() {
    let file = document_file();

    let mut list = list_on(NaiveDate::from_ymd_opt(2018, 2, 28).unwrap(), &file);
    assert_eq!(list.age_of(6).unwrap(), 17);
    assert!(list.start_edit(6, &ScriptedPrompt::new()).is_err());

    let mut list = list_on(NaiveDate::from_ymd_opt(2018, 3, 1).unwrap(), &file);
    assert_eq!(list.age_of(6).unwrap(), 18);
    assert!(list.start_edit(6, &ScriptedPrompt::new()).is_ok());
}
