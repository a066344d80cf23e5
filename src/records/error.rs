use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordErrorCode {
    QueryFailed,
    SaveFailed,
    DeleteFailed,
    NotFound,
}

impl RecordErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordErrorCode::QueryFailed => "records/query-failed",
            RecordErrorCode::SaveFailed => "records/save-failed",
            RecordErrorCode::DeleteFailed => "records/delete-failed",
            RecordErrorCode::NotFound => "records/not-found",
        }
    }
}

#[derive(Clone, Debug)]
pub struct RecordError {
    pub code: RecordErrorCode,
    message: String,
}

impl RecordError {
    pub fn new(code: RecordErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl Error for RecordError {}

pub type RecordResult<T> = Result<T, RecordError>;

pub fn query_failed(message: impl Into<String>) -> RecordError {
    RecordError::new(RecordErrorCode::QueryFailed, message)
}

pub fn save_failed(message: impl Into<String>) -> RecordError {
    RecordError::new(RecordErrorCode::SaveFailed, message)
}

pub fn delete_failed(message: impl Into<String>) -> RecordError {
    RecordError::new(RecordErrorCode::DeleteFailed, message)
}

pub fn not_found(message: impl Into<String>) -> RecordError {
    RecordError::new(RecordErrorCode::NotFound, message)
}
