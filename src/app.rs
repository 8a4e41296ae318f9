use crate::domain::task::{Task, TaskId};
use crate::store::{AddError, TaskStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Adding,
    Renaming(TaskId),
    ConfirmRemove(TaskId),
    /// Blocking notice with a single acknowledgment (duplicate-title add).
    Alert,
}

pub struct App<S: TaskStore> {
    store: S,
    pub tasks: Vec<Task>,
    pub selected: usize,
    pub mode: Mode,
    pub input: String,
    pub status: Option<String>,
    pub alert: Option<String>,
}

impl<S: TaskStore> App<S> {
    pub fn new(store: S) -> Self {
        let tasks = store.all();
        Self {
            store,
            tasks,
            selected: 0,
            mode: Mode::Normal,
            input: String::new(),
            status: None,
            alert: None,
        }
    }

    pub fn reload(&mut self) {
        self.tasks = self.store.all();
        if self.selected >= self.tasks.len() && !self.tasks.is_empty() {
            self.selected = self.tasks.len() - 1;
        }
    }

    pub fn select_next(&mut self) {
        if !self.tasks.is_empty() {
            self.selected = (self.selected + 1).min(self.tasks.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    fn selected_id(&self) -> Option<TaskId> {
        self.tasks.get(self.selected).map(|t| t.id)
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.store.toggle(id);
            self.reload();
            self.set_status("Toggled completion");
        }
    }

    pub fn start_add(&mut self) {
        self.mode = Mode::Adding;
        self.input.clear();
        self.set_status("Type new task and press Enter");
    }

    pub fn submit_add(&mut self) {
        if self.input.trim().is_empty() {
            self.set_status("Cannot add an empty task");
            return;
        }
        let title = self.input.trim().to_owned();
        match self.store.add(title) {
            Ok(_) => {
                self.input.clear();
                self.mode = Mode::Normal;
                self.reload();
                if !self.tasks.is_empty() {
                    self.selected = self.tasks.len() - 1;
                }
                self.set_status("Added");
            }
            Err(AddError::DuplicateTitle(title)) => {
                // Input stays as typed so the title can be adjusted after
                // the alert is dismissed.
                self.mode = Mode::Alert;
                self.alert = Some(format!("A task titled \"{title}\" already exists"));
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.mode = Mode::Adding;
    }

    pub fn start_rename(&mut self) {
        if let Some(id) = self.selected_id() {
            self.input = self.tasks[self.selected].title.clone();
            self.mode = Mode::Renaming(id);
            self.set_status("Edit title and press Enter");
        }
    }

    pub fn submit_rename(&mut self) {
        if let Mode::Renaming(id) = self.mode {
            self.store.rename(id, self.input.clone());
            self.input.clear();
            self.mode = Mode::Normal;
            self.reload();
            self.set_status("Renamed");
        }
    }

    pub fn request_remove(&mut self) {
        if let Some(id) = self.selected_id() {
            self.mode = Mode::ConfirmRemove(id);
        }
    }

    pub fn confirm_remove(&mut self) {
        if let Mode::ConfirmRemove(id) = self.mode {
            self.store.remove(id);
            if self.selected > 0 {
                self.selected -= 1;
            }
            self.mode = Mode::Normal;
            self.reload();
            self.set_status("Removed");
        }
    }

    pub fn cancel_remove(&mut self) {
        self.mode = Mode::Normal;
        self.set_status("Kept");
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::Normal;
        self.input.clear();
        self.set_status("Canceled");
    }

    pub fn set_status(&mut self, msg: &str) {
        self.status = Some(msg.to_string());
    }
}
