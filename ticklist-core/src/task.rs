//! Task record as persisted in `tasks.json`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub type TaskId = u64;

pub const DEFAULT_CATEGORY: &str = "General";

/// Format of `created_at` on disk and on screen.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of `due_date` on disk and on screen.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "created_at_format")]
    pub created_at: NaiveDateTime,
    /// Calendar date only. Serialized as `YYYY-MM-DD` or null.
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Blank categories collapse to [`DEFAULT_CATEGORY`].
pub fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        default_category()
    } else {
        trimmed.to_string()
    }
}

impl Task {
    pub fn new(id: TaskId, description: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            description: description.into(),
            category: default_category(),
            completed: false,
            created_at,
            due_date: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = normalize_category(category);
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Due strictly before `today` and still open.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Line printed after a successful add.
    pub fn confirmation(&self) -> String {
        let due = self
            .due_date
            .map(|d| format!(", Due: {}", d.format(DUE_DATE_FORMAT)))
            .unwrap_or_default();
        format!(
            "Task added: {} (Category: {}{})",
            self.description, self.category, due
        )
    }
}

mod created_at_format {
    use super::CREATED_AT_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&dt.format(CREATED_AT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, CREATED_AT_FORMAT).map_err(serde::de::Error::custom)
    }
}
