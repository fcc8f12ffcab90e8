//! ticklist-core: task records, their JSON file, and the store that ties them together.

pub mod error;
pub mod listing;
pub mod storage;
pub mod store;
pub mod task;
pub mod time;
pub mod validate;

pub use error::{DateError, StoreError, TaskError};
pub use listing::{ListFilter, TaskRow, TaskRows};
pub use storage::{load_tasks, save_tasks};
pub use store::{Persisted, TaskStore};
pub use task::{DEFAULT_CATEGORY, Task, TaskId};
pub use time::{Clock, FixedClock, SystemClock};
pub use validate::{validate_date, validate_description};
