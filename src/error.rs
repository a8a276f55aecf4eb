use std::error::Error;
use std::fmt;

/// Custom Error and Result types to unify errors from all sources.
pub type LoaderResult<T> = Result<T, LoaderError>;

#[derive(Debug)]
pub enum LoaderError {
    RootNotFound,
    StatusNotFound,
    Status { status: String, message: String },
    Http(String),
    Cache(String),
    Parse(String),
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoaderError::RootNotFound => write!(f, "Leaderboard root not found"),
            LoaderError::StatusNotFound => write!(f, "Leaderboard status not found"),
            LoaderError::Status { status, message } => write!(
                f,
                "Leaderboard status error, code: '{}', message: '{}'",
                status, message
            ),
            LoaderError::Http(s) => write!(f, "HTTP Error: {}", s),
            LoaderError::Cache(s) => write!(f, "Cache Error: {}", s),
            LoaderError::Parse(s) => write!(f, "Parse Error: {}", s),
        }
    }
}

impl Error for LoaderError {}

impl From<reqwest::Error> for LoaderError {
    fn from(error: reqwest::Error) -> Self {
        LoaderError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for LoaderError {
    fn from(error: serde_json::Error) -> Self {
        LoaderError::Parse(error.to_string())
    }
}
