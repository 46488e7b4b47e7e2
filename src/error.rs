use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("search failed to converge after {steps} windows (stopped at shift {shift})")]
    DidNotConverge { steps: usize, shift: usize },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("failed to read batch input: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Search {
        row: usize,
        #[source]
        source: SearchError,
    },
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Search(#[from] SearchError),
}
