//! Filtered, overdue-aware views over the task list.

use chrono::NaiveDate;
use std::fmt;

use crate::task::{CREATED_AT_FORMAT, DUE_DATE_FORMAT, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    #[default]
    All,
    Incomplete,
}

impl ListFilter {
    pub fn from_incomplete_only(incomplete_only: bool) -> Self {
        if incomplete_only {
            Self::Incomplete
        } else {
            Self::All
        }
    }

    fn admits(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Incomplete => !task.completed,
        }
    }
}

/// One displayed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,
    pub overdue: bool,
}

impl fmt::Display for TaskRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = self.task;
        let marker = if t.completed { '✓' } else { ' ' };
        write!(
            f,
            "[{}] ID: {} | {} | Category: {}",
            marker, t.id, t.description, t.category
        )?;
        if let Some(due) = t.due_date {
            write!(f, " | Due: {}", due.format(DUE_DATE_FORMAT))?;
            if self.overdue {
                f.write_str(" (Overdue)")?;
            }
        }
        write!(f, " | Created: {}", t.created_at.format(CREATED_AT_FORMAT))
    }
}

/// Lazy rows over a task slice. Cloning restarts from the first row.
#[derive(Debug, Clone)]
pub struct TaskRows<'a> {
    tasks: std::slice::Iter<'a, Task>,
    filter: ListFilter,
    today: NaiveDate,
}

impl<'a> TaskRows<'a> {
    pub fn new(tasks: &'a [Task], filter: ListFilter, today: NaiveDate) -> Self {
        Self {
            tasks: tasks.iter(),
            filter,
            today,
        }
    }
}

impl<'a> Iterator for TaskRows<'a> {
    type Item = TaskRow<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let filter = self.filter;
        let task = self.tasks.by_ref().find(|t| filter.admits(t))?;
        Some(TaskRow {
            task,
            overdue: task.is_overdue(self.today),
        })
    }
}
