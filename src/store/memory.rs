use std::collections::VecDeque;

use super::{AddError, TaskStore};
use crate::domain::task::{Task, TaskId};

pub struct InMemoryTaskStore {
    items: VecDeque<Task>,
    next_id: TaskId,
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskStore {
    pub fn with_seed<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut store = Self::default();
        for title in titles {
            // Duplicate seed titles are dropped, same as a user-facing add.
            let _ = store.add(title.into());
        }
        store
    }

    fn alloc_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.items.iter().position(|t| t.id == id)
    }
}

impl TaskStore for InMemoryTaskStore {
    fn all(&self) -> Vec<Task> {
        self.items.iter().cloned().collect()
    }

    fn add(&mut self, title: String) -> Result<Task, AddError> {
        // Exact match only: case-sensitive, no trimming.
        if self.items.iter().any(|t| t.title == title) {
            return Err(AddError::DuplicateTitle(title));
        }
        let task = Task::new(self.alloc_id(), title);
        self.items.push_back(task.clone());
        Ok(task)
    }

    fn toggle(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position(id)?;
        let updated = Task {
            done: !self.items[pos].done,
            ..self.items[pos].clone()
        };
        self.items[pos] = updated.clone();
        Some(updated)
    }

    fn rename(&mut self, id: TaskId, new_title: String) -> Option<Task> {
        let pos = self.position(id)?;
        let updated = Task {
            title: new_title,
            ..self.items[pos].clone()
        };
        self.items[pos] = updated.clone();
        Some(updated)
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        let pos = self.position(id)?;
        self.items.remove(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_with_done_false() {
        let mut store = InMemoryTaskStore::default();
        let task = store.add("Buy milk".to_string()).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert!(!task.done);
        assert_eq!(store.all().len(), 1);
    }

    #[test]
    fn add_rejects_exact_duplicate_title() {
        let mut store = InMemoryTaskStore::default();
        store.add("Buy milk".to_string()).unwrap();
        let before = store.all();

        let err = store.add("Buy milk".to_string()).unwrap_err();
        assert_eq!(err, AddError::DuplicateTitle("Buy milk".to_string()));
        assert_eq!(store.all(), before);
    }

    #[test]
    fn duplicate_check_is_exact_match_only() {
        let mut store = InMemoryTaskStore::default();
        store.add("Buy milk".to_string()).unwrap();
        // Case and surrounding whitespace differences are distinct titles.
        store.add("buy milk".to_string()).unwrap();
        store.add("Buy milk ".to_string()).unwrap();
        assert_eq!(store.all().len(), 3);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = InMemoryTaskStore::default();
        let a = store.add("a".to_string()).unwrap();
        let b = store.add("b".to_string()).unwrap();
        let c = store.add("c".to_string()).unwrap();
        assert!(a.id < b.id && b.id < c.id);
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let mut store = InMemoryTaskStore::default();
        let a = store.add("a".to_string()).unwrap();
        let b = store.add("b".to_string()).unwrap();

        let toggled = store.toggle(a.id).unwrap();
        assert!(toggled.done);

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert!(all[0].done);
        assert!(!all[1].done);
        assert_eq!(all[1], b);

        let back = store.toggle(a.id).unwrap();
        assert!(!back.done);
    }

    #[test]
    fn rename_keeps_done_and_order() {
        let mut store = InMemoryTaskStore::default();
        let a = store.add("Buy milk".to_string()).unwrap();
        store.add("Walk dog".to_string()).unwrap();
        store.toggle(a.id).unwrap();

        let renamed = store.rename(a.id, "Buy oat milk".to_string()).unwrap();
        assert_eq!(renamed.title, "Buy oat milk");
        assert!(renamed.done);

        let all = store.all();
        assert_eq!(all[0].id, a.id);
        assert_eq!(all[1].title, "Walk dog");
    }

    #[test]
    fn rename_may_create_duplicate_titles() {
        // Documented inconsistency: uniqueness is enforced at add time only.
        let mut store = InMemoryTaskStore::default();
        store.add("a".to_string()).unwrap();
        let b = store.add("b".to_string()).unwrap();

        store.rename(b.id, "a".to_string()).unwrap();
        let all = store.all();
        assert_eq!(all[0].title, "a");
        assert_eq!(all[1].title, "a");
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut store = InMemoryTaskStore::default();
        let a = store.add("a".to_string()).unwrap();
        let b = store.add("b".to_string()).unwrap();
        let c = store.add("c".to_string()).unwrap();

        let removed = store.remove(b.id).unwrap();
        assert_eq!(removed.id, b.id);

        let all = store.all();
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![a.id, c.id]);
    }

    #[test]
    fn unknown_id_is_a_silent_noop() {
        let mut store = InMemoryTaskStore::default();
        store.add("a".to_string()).unwrap();
        let before = store.all();

        assert!(store.toggle(999).is_none());
        assert!(store.rename(999, "x".to_string()).is_none());
        assert!(store.remove(999).is_none());
        assert_eq!(store.all(), before);
    }

    #[test]
    fn snapshots_do_not_alias_the_store() {
        let mut store = InMemoryTaskStore::default();
        let a = store.add("a".to_string()).unwrap();
        let stale = store.all();

        store.toggle(a.id).unwrap();
        assert!(!stale[0].done);
        assert!(store.all()[0].done);
    }

    #[test]
    fn seed_advances_id_allocation() {
        let mut store = InMemoryTaskStore::with_seed(["a", "b"]);
        let c = store.add("c".to_string()).unwrap();
        let ids: Vec<_> = store.all().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids[0] < ids[1] && ids[1] < c.id);
    }

    #[test]
    fn full_session_scenario() {
        let mut store = InMemoryTaskStore::default();

        let task = store.add("Buy milk".to_string()).unwrap();
        assert_eq!(store.all().len(), 1);

        assert!(store.add("Buy milk".to_string()).is_err());
        assert_eq!(store.all().len(), 1);

        assert!(store.toggle(task.id).unwrap().done);
        let renamed = store.rename(task.id, "Buy oat milk".to_string()).unwrap();
        assert_eq!(renamed.title, "Buy oat milk");
        assert!(renamed.done);

        store.remove(task.id).unwrap();
        assert!(store.all().is_empty());
    }
}
