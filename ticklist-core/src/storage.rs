//! JSON file persistence for the task list.
//!
//! The file is a top-level array of [`Task`] objects in display order. Every
//! save rewrites the whole file; there is no temp-file rename, so a crash in
//! the middle of a write can leave it truncated.

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::error::StoreError;
use crate::task::Task;

/// Read the task list at `path`.
///
/// A missing or blank file is an empty list, not an error.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no tasks file yet");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                action: "read",
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> =
        serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
            path: path.to_path_buf(),
            source,
        })?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for t in &tasks {
        if t.id == 0 {
            return Err(StoreError::InvalidId {
                path: path.to_path_buf(),
                id: t.id,
            });
        }
        if !seen.insert(t.id) {
            return Err(StoreError::DuplicateId {
                path: path.to_path_buf(),
                id: t.id,
            });
        }
    }

    debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Overwrite `path` with the full task list, creating the parent directory.
pub fn save_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    let io_err = |action, source| StoreError::Io {
        action,
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| io_err("create directory for", e))?;
    }

    let json = serde_json::to_string_pretty(tasks)
        .map_err(|e| io_err("serialize", std::io::Error::other(e)))?;
    fs::write(path, json).map_err(|e| io_err("write", e))?;

    debug!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn sample(id: u64, description: &str) -> Task {
        let created = NaiveDate::from_ymd_opt(2026, 4, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Task::new(id, description, created)
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let tasks = load_tasks(&dir.path().join("tasks.json")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn blank_file_is_empty() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("tasks.json");
        fs::write(&p, "  \n").unwrap();
        assert!(load_tasks(&p).unwrap().is_empty());
    }

    #[test]
    fn garbage_is_malformed() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("tasks.json");
        fs::write(&p, "{not json").unwrap();
        let err = load_tasks(&p).unwrap_err();
        assert!(err.is_malformed(), "got {err:?}");
    }

    #[test]
    fn duplicate_ids_are_malformed() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("tasks.json");
        save_tasks(&p, &[sample(1, "a"), sample(1, "b")]).unwrap();
        match load_tasks(&p).unwrap_err() {
            StoreError::DuplicateId { id, .. } => assert_eq!(id, 1),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn zero_id_is_malformed() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("tasks.json");
        save_tasks(&p, &[sample(0, "a")]).unwrap();
        let err = load_tasks(&p).unwrap_err();
        assert!(err.is_malformed());
        assert!(matches!(err, StoreError::InvalidId { id: 0, .. }), "got {err:?}");
    }

    #[test]
    fn directory_in_place_of_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = load_tasks(dir.path()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }), "got {err:?}");
        assert!(!err.is_malformed());
    }

    #[test]
    fn save_creates_parent_and_preserves_order() {
        let dir = tempdir().unwrap();
        let p = dir.path().join("nested").join("tasks.json");
        let tasks = vec![sample(3, "c"), sample(1, "a"), sample(2, "b")];
        save_tasks(&p, &tasks).unwrap();
        assert_eq!(load_tasks(&p).unwrap(), tasks);
    }
}
