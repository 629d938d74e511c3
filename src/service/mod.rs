//! Todo service module.
//!
//! [`TodoService`] holds the business rules for lists and entries: presence
//! checks on entity arguments, visibility and completion filters, the
//! transactional list copy, and reminder firing. It reaches the store only
//! through the repositories, opening transaction boundaries where a workflow
//! spans several writes.
//!
//! Time-dependent operations take the reference timestamp as a parameter so
//! that callers decide what "now" is.
//!
//! # Example
//! ```rust,no_run
//! use todolist::service::{ListVisibility, TodoService};
//! use todolist::storage::LocalStorage;
//! use todolist::entities::list;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = TodoService::new(LocalStorage::in_memory().await?);
//!
//! let groceries = service.insert_list(Some(list::Model::new("Groceries", false))).await?;
//! let visible = service.get_todo_lists(ListVisibility::VisibleOnly).await?;
//! assert!(visible.contains(&groceries));
//! # Ok(())
//! # }
//! ```

pub mod entries;
pub mod lists;

use crate::error::{TodoError, TodoResult};
use crate::storage::LocalStorage;

/// Which lists [`TodoService::get_todo_lists`] returns.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ListVisibility {
    #[default]
    All,
    HiddenOnly,
    VisibleOnly,
}

impl ListVisibility {
    /// Value the `hide` column must have, or `None` for no filter.
    pub fn hide_filter(self) -> Option<bool> {
        match self {
            Self::All => None,
            Self::HiddenOnly => Some(true),
            Self::VisibleOnly => Some(false),
        }
    }
}

/// Maps the `hidden` flag of a request: `Some(true)` hidden lists,
/// `Some(false)` visible lists, `None` everything.
impl From<Option<bool>> for ListVisibility {
    fn from(hidden: Option<bool>) -> Self {
        match hidden {
            Some(true) => Self::HiddenOnly,
            Some(false) => Self::VisibleOnly,
            None => Self::All,
        }
    }
}

/// Service exposing list and entry operations over [`LocalStorage`].
#[derive(Clone, Debug)]
pub struct TodoService {
    storage: LocalStorage,
}

impl TodoService {
    pub fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn into_storage(self) -> LocalStorage {
        self.storage
    }
}

fn require<T>(value: Option<T>, name: &'static str) -> TodoResult<T> {
    value.ok_or(TodoError::InvalidArgument(name))
}
