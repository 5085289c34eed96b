// Celebrity List Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CelebrityError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Celebrity not found: {0}")]
    RecordNotFound(i64),

    #[error("Duplicate celebrity id in document: {0}")]
    DuplicateId(i64),

    #[error("Invalid date of birth: {0}")]
    InvalidDate(String),

    #[error("Celebrity {id} is {age} years old; only adults can be edited")]
    Underage { id: i64, age: u32 },

    #[error("Celebrity {0} is currently being edited")]
    EditInProgress(i64),

    #[error("No edit in progress")]
    NoActiveEdit,

    #[error("Field is not editable: {0}")]
    FieldNotEditable(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for CelebrityError {
    fn from(err: anyhow::Error) -> Self {
        CelebrityError::Other(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CelebrityError>;
