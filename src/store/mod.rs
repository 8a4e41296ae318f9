use thiserror::Error;

use crate::domain::task::{Task, TaskId};

pub mod memory;

/// Duplicate titles are checked at add time only; rename deliberately skips
/// the check, so two tasks can end up with the same title via rename.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddError {
    #[error("a task titled {0:?} already exists")]
    DuplicateTitle(String),
}

/// Owner of the task list. Every method that touches a task returns a fresh
/// record; callers never hold a reference into the store's internal list.
pub trait TaskStore {
    fn all(&self) -> Vec<Task>;
    fn add(&mut self, title: String) -> Result<Task, AddError>;
    /// Flips `done` on the matching task. Unknown id is a silent no-op.
    fn toggle(&mut self, id: TaskId) -> Option<Task>;
    /// Replaces the title, leaving `done` untouched. Unknown id is a silent
    /// no-op. No uniqueness check against other titles.
    fn rename(&mut self, id: TaskId, new_title: String) -> Option<Task>;
    /// Unconditional once called; any confirmation is the caller's job.
    fn remove(&mut self, id: TaskId) -> Option<Task>;
}
