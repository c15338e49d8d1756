use anyhow::Context;
use tracing::{debug, warn};

use crate::task::{Draft, Priority, Task};
use crate::view;

/// Owns the full task list plus the transient UI state around it: the search
/// term, the draft being composed, and the id of the task being edited (if
/// any). All mutation goes through the methods here; the presentation layer
/// persists a snapshot whenever a method reports that the task list changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    search: String,
    draft: Draft,
    editing: Option<u64>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    /// Restores a persisted snapshot. Malformed data is discarded and the
    /// store starts empty; the user never sees an error for this.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Vec<Task>>(raw) {
            Ok(tasks) => {
                debug!(count = tasks.len(), "restored task snapshot");
                Self::from_tasks(tasks)
            }
            Err(error) => {
                warn!(%error, "discarding malformed task snapshot");
                Self::new()
            }
        }
    }

    /// Serializes the full task list for the persistent store. Only the
    /// tasks themselves survive a reload; search, draft, and edit mode are
    /// session state.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string(&self.tasks).context("failed to serialize task list")
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// The derived list the presentation layer renders: search-filtered,
    /// then incomplete-first / priority-descending.
    pub fn visible(&self) -> Vec<&Task> {
        view::visible(&self.tasks, &self.search)
    }

    pub fn set_draft_title(&mut self, title: String) {
        self.draft.title = title;
    }

    pub fn set_draft_description(&mut self, description: String) {
        self.draft.description = description;
    }

    pub fn set_draft_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    /// Search only narrows the derived view; it never touches the task list
    /// and is never persisted.
    pub fn set_search(&mut self, term: String) {
        self.search = term;
    }

    /// Commits the draft. An incomplete draft is rejected silently and
    /// nothing changes. In edit mode the target task takes the draft's
    /// fields but keeps its id and completed flag; otherwise a new
    /// incomplete task is appended with a fresh id. On success the draft is
    /// cleared and edit mode ends. Returns whether the task list changed.
    #[tracing::instrument(skip(self))]
    pub fn submit(&mut self) -> bool {
        if !self.draft.is_complete() {
            debug!("rejected submit with empty title or description");
            return false;
        }

        if let Some(id) = self.editing
            && !self.tasks.iter().any(|t| t.id == id)
        {
            // Stale edit target; drop edit mode but keep what was typed.
            warn!(id, "edit target no longer exists");
            self.editing = None;
            return false;
        }

        let draft = std::mem::take(&mut self.draft);
        match self.editing.take() {
            Some(id) => {
                if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
                    task.title = draft.title;
                    task.description = draft.description;
                    task.priority = draft.priority;
                    debug!(id, "updated task from draft");
                }
            }
            None => {
                let id = self.next_id();
                debug!(id, "added task from draft");
                self.tasks
                    .push(Task::new(id, draft.title, draft.description, draft.priority));
            }
        }
        true
    }

    /// Flips the completed flag on the matching task. Returns whether a
    /// task matched.
    #[tracing::instrument(skip(self))]
    pub fn toggle_completed(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                debug!(id, completed = task.completed, "toggled task");
                true
            }
            None => false,
        }
    }

    /// Removes the matching task. If it was the edit target, edit mode ends
    /// too; the half-typed draft is kept so nothing the user wrote is lost.
    #[tracing::instrument(skip(self))]
    pub fn delete(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        if self.editing == Some(id) {
            self.editing = None;
        }
        debug!(id, remaining = self.tasks.len(), "deleted task");
        true
    }

    /// Copies the matching task's fields into the draft and enters edit
    /// mode. No-op if the id matches nothing; the draft is left as typed.
    #[tracing::instrument(skip(self))]
    pub fn start_edit(&mut self, id: u64) -> bool {
        match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => {
                self.draft = Draft::from_task(task);
                self.editing = Some(id);
                true
            }
            None => false,
        }
    }

    // Ids stay unique for the session without relying on the clock: one more
    // than the largest id ever persisted.
    fn next_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}
