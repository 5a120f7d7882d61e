use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("invalid {field} '{value}'")]
    InvalidId { field: &'static str, value: String },

    #[error("invalid direction '{0}'")]
    InvalidDirection(String),

    #[error("invalid status code '{0}'")]
    InvalidStatus(String),

    #[error("invalid {field} '{value}'")]
    InvalidTiming { field: &'static str, value: String },
}
