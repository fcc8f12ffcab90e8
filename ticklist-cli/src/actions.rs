//! User-facing actions shared by the menu loop and the one-shot subcommands.
//!
//! Every failure is printed and swallowed; the only errors returned are
//! failures writing to `out` itself.

use std::io::{self, Write};
use ticklist_core::{Clock, ListFilter, Persisted, StoreError, TaskId, TaskStore, validate_description};

/// Startup message for a tasks file that couldn't be used.
pub fn report_load_error(out: &mut impl Write, err: &StoreError) -> io::Result<()> {
    if err.is_malformed() {
        writeln!(out, "Error: Invalid JSON file. Initializing empty task list.")
    } else {
        writeln!(out, "Error loading tasks: {err}")
    }
}

fn report_save<T>(out: &mut impl Write, p: &Persisted<T>) -> io::Result<()> {
    match &p.save_error {
        Some(e) => writeln!(out, "Error saving tasks: {e}"),
        None => Ok(()),
    }
}

/// Validate raw input and add the task.
///
/// `due` is the raw due-date text; blank means no due date.
pub fn add<C: Clock>(
    store: &mut TaskStore<C>,
    out: &mut impl Write,
    description: &str,
    category: &str,
    due: &str,
) -> io::Result<()> {
    let description = match validate_description(description) {
        Ok(d) => d,
        Err(e) => return writeln!(out, "Error: {e}"),
    };

    let due_date = if due.trim().is_empty() {
        None
    } else {
        match store.validate_date(due) {
            Ok(d) => Some(d),
            Err(e) => return writeln!(out, "Error: {e}"),
        }
    };

    let added = match store.add_task(description, category, due_date) {
        Ok(added) => added,
        Err(e) => return writeln!(out, "Error: {e}"),
    };
    report_save(out, &added)?;
    writeln!(out, "{}", added.value.confirmation())
}

pub fn complete<C: Clock>(store: &mut TaskStore<C>, out: &mut impl Write, id: TaskId) -> io::Result<()> {
    match store.mark_complete(id) {
        Ok(done) => {
            report_save(out, &done)?;
            writeln!(out, "Task {id} marked as completed.")
        }
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

pub fn delete<C: Clock>(store: &mut TaskStore<C>, out: &mut impl Write, id: TaskId) -> io::Result<()> {
    match store.delete_task(id) {
        Ok(removed) => {
            report_save(out, &removed)?;
            writeln!(out, "Task {id} deleted: {}", removed.value.description)
        }
        Err(e) => writeln!(out, "Error: {e}"),
    }
}

pub fn list<C: Clock>(store: &TaskStore<C>, out: &mut impl Write, filter: ListFilter) -> io::Result<()> {
    let Some(rows) = store.list_tasks(filter) else {
        return writeln!(out, "No tasks found.");
    };
    for row in rows {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Parse a typed task id.
pub fn parse_id(raw: &str) -> Option<TaskId> {
    raw.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::{TempDir, tempdir};
    use ticklist_core::FixedClock;

    fn store() -> (TempDir, TaskStore<FixedClock>) {
        let dir = tempdir().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let s = TaskStore::new(dir.path().join("tasks.json"), FixedClock::on(today));
        (dir, s)
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn add_prints_confirmation() {
        let (_dir, mut s) = store();
        let mut out = Vec::new();
        add(&mut s, &mut out, " Ship it ", "Work", "2026-10-25").unwrap();
        assert_eq!(
            text(out),
            "Task added: Ship it (Category: Work, Due: 2026-10-25)\n"
        );
        assert_eq!(s.tasks()[0].description, "Ship it");
    }

    #[test]
    fn add_rejects_blank_and_bad_dates_without_mutating() {
        let (_dir, mut s) = store();
        let mut out = Vec::new();
        add(&mut s, &mut out, "   ", "", "").unwrap();
        add(&mut s, &mut out, "x", "", "tomorrow").unwrap();
        add(&mut s, &mut out, "x", "", "2020-01-01").unwrap();
        assert_eq!(
            text(out),
            "Error: Task description cannot be empty.\n\
             Error: Invalid date format. Use YYYY-MM-DD.\n\
             Error: Due date cannot be in the past.\n"
        );
        assert!(s.is_empty());
    }

    #[test]
    fn complete_and_delete_report_outcomes() {
        let (_dir, mut s) = store();
        let mut out = Vec::new();
        add(&mut s, &mut out, "Buy milk", "", "").unwrap();
        complete(&mut s, &mut out, 1).unwrap();
        complete(&mut s, &mut out, 9).unwrap();
        delete(&mut s, &mut out, 1).unwrap();
        delete(&mut s, &mut out, 1).unwrap();
        list(&s, &mut out, ListFilter::All).unwrap();
        assert_eq!(
            text(out),
            "Task added: Buy milk (Category: General)\n\
             Task 1 marked as completed.\n\
             Error: Task ID 9 not found.\n\
             Task 1 deleted: Buy milk\n\
             Error: Task ID 1 not found.\n\
             No tasks found.\n"
        );
    }

    #[test]
    fn save_failure_is_reported_but_change_kept() {
        let dir = tempdir().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut s = TaskStore::new(dir.path(), FixedClock::on(today));
        let mut out = Vec::new();
        add(&mut s, &mut out, "x", "", "").unwrap();
        let printed = text(out);
        assert!(printed.starts_with("Error saving tasks: write "), "{printed}");
        assert!(printed.ends_with("Task added: x (Category: General)\n"));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn add_reports_exhausted_ids() {
        let (dir, _) = store();
        let path = dir.path().join("tasks.json");
        let created = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        ticklist_core::save_tasks(&path, &[ticklist_core::Task::new(u64::MAX, "last", created)])
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let (mut s, err) = TaskStore::open(&path, FixedClock::on(today));
        assert!(err.is_none());
        let mut out = Vec::new();
        add(&mut s, &mut out, "one more", "", "").unwrap();
        assert_eq!(
            text(out),
            "Error: No task ids left; the highest id is already in use.\n"
        );
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn parses_ids() {
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id("twelve"), None);
        assert_eq!(parse_id("-1"), None);
    }

    #[test]
    fn load_error_messages() {
        let mut out = Vec::new();
        let malformed = StoreError::DuplicateId {
            path: "tasks.json".into(),
            id: 1,
        };
        report_load_error(&mut out, &malformed).unwrap();
        assert_eq!(
            text(out),
            "Error: Invalid JSON file. Initializing empty task list.\n"
        );
    }
}
