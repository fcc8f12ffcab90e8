//! Input checks the caller runs before touching the store.

use chrono::NaiveDate;

use crate::error::{DateError, TaskError};
use crate::task::DUE_DATE_FORMAT;

/// Parse a `YYYY-MM-DD` due date that is not earlier than `today`.
///
/// The returned date displays in canonical `YYYY-MM-DD` form.
pub fn validate_date(text: &str, today: NaiveDate) -> Result<NaiveDate, DateError> {
    let text = text.trim();
    let date = NaiveDate::parse_from_str(text, DUE_DATE_FORMAT)
        .map_err(|_| DateError::InvalidFormat(text.to_string()))?;
    if date < today {
        return Err(DateError::PastDate(date));
    }
    Ok(date)
}

/// Trimmed description, or an error when nothing is left.
pub fn validate_description(text: &str) -> Result<&str, TaskError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyDescription);
    }
    Ok(text)
}
