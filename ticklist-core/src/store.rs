//! TaskStore: the task list, its backing file, and the clock.
//!
//! Every mutation is flushed to disk immediately. A failed flush never undoes
//! the in-memory change; it is handed back in [`Persisted::save_error`] so the
//! caller can report that the change is not durable.

use chrono::{NaiveDate, SubsecRound};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{DateError, StoreError, TaskError};
use crate::listing::{ListFilter, TaskRows};
use crate::storage::{load_tasks, save_tasks};
use crate::task::{Task, TaskId, normalize_category};
use crate::time::{Clock, SystemClock};
use crate::validate::validate_date;

/// Result of a mutation plus the outcome of the save that followed it.
#[derive(Debug)]
pub struct Persisted<T> {
    pub value: T,
    pub save_error: Option<StoreError>,
}

impl<T> Persisted<T> {
    pub fn is_durable(&self) -> bool {
        self.save_error.is_none()
    }
}

#[derive(Debug)]
pub struct TaskStore<C: Clock = SystemClock> {
    path: PathBuf,
    tasks: Vec<Task>,
    clock: C,
}

impl<C: Clock> TaskStore<C> {
    /// Empty store backed by `path`. Nothing is read or written.
    pub fn new(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            tasks: Vec::new(),
            clock,
        }
    }

    /// Load the store from `path`.
    ///
    /// An unreadable or malformed file yields an empty store; the error is
    /// returned alongside so the caller can tell the user.
    pub fn open(path: impl Into<PathBuf>, clock: C) -> (Self, Option<StoreError>) {
        let mut store = Self::new(path, clock);
        match store.load() {
            Ok(tasks) => {
                store.tasks = tasks;
                (store, None)
            }
            Err(e) => {
                warn!(error = %e, "starting with an empty task list");
                (store, Some(e))
            }
        }
    }

    /// Read the backing file without touching the in-memory list.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        load_tasks(&self.path)
    }

    /// Write the in-memory list to the backing file.
    pub fn save(&self) -> Result<(), StoreError> {
        save_tasks(&self.path, &self.tasks).inspect_err(|e| warn!(error = %e, "save failed"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Due-date check against this store's clock.
    pub fn validate_date(&self, text: &str) -> Result<NaiveDate, DateError> {
        validate_date(text, self.today())
    }

    /// Ids are never reused while a higher id is still present.
    fn next_id(&self) -> Result<TaskId, TaskError> {
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(TaskError::IdsExhausted)
    }

    fn persist<T>(&self, value: T) -> Persisted<T> {
        Persisted {
            value,
            save_error: self.save().err(),
        }
    }

    /// Append a new open task and save.
    ///
    /// `description` is stored as given; use
    /// [`validate_description`](crate::validate::validate_description) first.
    /// A blank `category` becomes "General". `created_at` keeps whole seconds
    /// only, matching what the file can hold.
    pub fn add_task(
        &mut self,
        description: &str,
        category: &str,
        due_date: Option<NaiveDate>,
    ) -> Result<Persisted<Task>, TaskError> {
        let id = self.next_id()?;
        let mut task = Task::new(id, description, self.clock.now().trunc_subsecs(0));
        task.category = normalize_category(category);
        task.due_date = due_date;

        debug!(id = task.id, category = %task.category, "add task");
        self.tasks.push(task.clone());
        Ok(self.persist(task))
    }

    /// Mark a task done and save. Completing a done task is a no-op success.
    pub fn mark_complete(&mut self, id: TaskId) -> Result<Persisted<Task>, TaskError> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        task.completed = true;
        let task = task.clone();

        debug!(id, "task completed");
        Ok(self.persist(task))
    }

    /// Remove a task, keeping the order of the rest, and save.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Persisted<Task>, TaskError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        let removed = self.tasks.remove(idx);

        debug!(id, "task deleted");
        Ok(self.persist(removed))
    }

    /// Rows for display, or `None` when the filter leaves nothing.
    pub fn list_tasks(&self, filter: ListFilter) -> Option<TaskRows<'_>> {
        let rows = TaskRows::new(&self.tasks, filter, self.today());
        rows.clone().next().is_some().then_some(rows)
    }
}
