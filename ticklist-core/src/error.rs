use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

use crate::task::TaskId;

/// Failures reading or writing the tasks file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("task id {id} in {} is not a positive integer", path.display())]
    InvalidId { path: PathBuf, id: TaskId },

    #[error("duplicate task id {id} in {}", path.display())]
    DuplicateId { path: PathBuf, id: TaskId },

    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// The file exists but its content can't be trusted.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Malformed { .. } | Self::InvalidId { .. } | Self::DuplicateId { .. }
        )
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task ID {0} not found.")]
    NotFound(TaskId),

    #[error("No task ids left; the highest id is already in use.")]
    IdsExhausted,

    #[error("Task description cannot be empty.")]
    EmptyDescription,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidFormat(String),

    #[error("Due date cannot be in the past.")]
    PastDate(NaiveDate),
}
