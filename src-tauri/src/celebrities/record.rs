// Celebrity record model and editable field definitions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::GENDER_OPTIONS;
use crate::error::{CelebrityError, Result};

/// One celebrity profile, exactly as it appears in the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Celebrity {
    pub id: i64,
    pub first: String,
    pub last: String,
    pub dob: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub description: String,
}

impl Celebrity {
    /// Name shown in the row header: "first last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Assign an editable field. Gender is constrained to the choice list and
    /// stored with its canonical spelling.
    pub fn set_field(&mut self, field: EditableField, value: &str) -> Result<()> {
        match field {
            EditableField::First => self.first = value.to_string(),
            EditableField::Last => self.last = value.to_string(),
            EditableField::Dob => self.dob = value.to_string(),
            EditableField::Gender => self.gender = value.parse::<Gender>()?.as_str().to_string(),
            EditableField::Country => self.country = value.to_string(),
            EditableField::Description => self.description = value.to_string(),
        }
        Ok(())
    }
}

/// Gender choices offered by the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Transgender,
    RatherNotSay,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 5] = [
        Gender::Male,
        Gender::Female,
        Gender::Transgender,
        Gender::RatherNotSay,
        Gender::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => GENDER_OPTIONS[0],
            Gender::Female => GENDER_OPTIONS[1],
            Gender::Transgender => GENDER_OPTIONS[2],
            Gender::RatherNotSay => GENDER_OPTIONS[3],
            Gender::Other => GENDER_OPTIONS[4],
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CelebrityError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CelebrityError::InvalidGender(s.to_string()))
    }
}

/// Fields a user may change during an edit session.
/// `id`, `picture` and `email` are deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    First,
    Last,
    Dob,
    Gender,
    Country,
    Description,
}

impl EditableField {
    pub const ALL: [EditableField; 6] = [
        EditableField::First,
        EditableField::Last,
        EditableField::Dob,
        EditableField::Gender,
        EditableField::Country,
        EditableField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EditableField::First => "first",
            EditableField::Last => "last",
            EditableField::Dob => "dob",
            EditableField::Gender => "gender",
            EditableField::Country => "country",
            EditableField::Description => "description",
        }
    }
}

impl FromStr for EditableField {
    type Err = CelebrityError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(field) = EditableField::ALL.into_iter().find(|f| f.name() == name) {
            return Ok(field);
        }
        match name.as_str() {
            "id" | "picture" | "email" => Err(CelebrityError::FieldNotEditable(name)),
            _ => Err(CelebrityError::UnknownField(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Celebrity {
        Celebrity {
            id: 1,
            first: "Aidan".to_string(),
            last: "Wang".to_string(),
            dob: "1973-10-16".to_string(),
            gender: "male".to_string(),
            email: "aidan.wang@example.com".to_string(),
            picture: "https://randomuser.me/api/portraits/med/men/93.jpg".to_string(),
            country: "New Zealand".to_string(),
            description: "Actor".to_string(),
        }
    }

    #[test]
    fn test_deserialize_sparse_document_entry() {
        let json = r#"{"id": 7, "first": "Ana", "last": "Lopez", "dob": "1990-01-02"}"#;
        let celeb: Celebrity = serde_json::from_str(json).unwrap();
        assert_eq!(celeb.id, 7);
        assert_eq!(celeb.full_name(), "Ana Lopez");
        assert!(celeb.email.is_empty());
        assert!(celeb.picture.is_empty());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let json = r#"{"id": 7, "first": "Ana", "dob": "1990-01-02"}"#;
        assert!(serde_json::from_str::<Celebrity>(json).is_err());
    }

    #[test]
    fn test_gender_parse_is_case_insensitive_and_canonical() {
        assert_eq!("rather NOT say".parse::<Gender>().unwrap(), Gender::RatherNotSay);
        assert_eq!(Gender::RatherNotSay.to_string(), "Rather not say");
        assert!(matches!(
            "robot".parse::<Gender>(),
            Err(CelebrityError::InvalidGender(_))
        ));
    }

    #[test]
    fn test_set_gender_stores_canonical_spelling() {
        let mut celeb = sample();
        celeb.set_field(EditableField::Gender, "female").unwrap();
        assert_eq!(celeb.gender, "Female");
    }

    #[test]
    fn test_invalid_gender_leaves_record_untouched() {
        let mut celeb = sample();
        let before = celeb.clone();
        assert!(celeb.set_field(EditableField::Gender, "unknown").is_err());
        assert_eq!(celeb, before);
    }

    #[test]
    fn test_field_names() {
        assert_eq!("Description".parse::<EditableField>().unwrap(), EditableField::Description);
        assert!(matches!(
            "picture".parse::<EditableField>(),
            Err(CelebrityError::FieldNotEditable(_))
        ));
        assert!(matches!(
            "id".parse::<EditableField>(),
            Err(CelebrityError::FieldNotEditable(_))
        ));
        assert!(matches!(
            "nickname".parse::<EditableField>(),
            Err(CelebrityError::UnknownField(_))
        ));
    }
}
