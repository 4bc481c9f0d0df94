use chrono::{DateTime, Utc};

use crate::task::{normalize_text, Task, TaskId};

/// The one inline edit in progress: which task, and the draft text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub buffer: String,
}

/// Result of [`TaskListEditor::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(TaskId),
    /// Input was empty after trimming; nothing changed
    Rejected,
}

/// Result of [`TaskListEditor::save_edit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Saved(TaskId),
    /// Blank buffer or vanished task; the session was dropped without mutation
    Discarded,
    NoSession,
}

/// Owned task-list state for a page session.
///
/// Tasks are stored in insertion order; display order is derived by
/// [`TaskListEditor::ordered`].
#[derive(Debug, Default)]
pub struct TaskListEditor {
    tasks: Vec<Task>,
    edit: Option<EditSession>,
    draft: String,
    last_created_at: Option<DateTime<Utc>>,
}

impl TaskListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task from user input.
    ///
    /// Blank input is ignored and kept as the draft; a successful add clears the draft.
    pub fn add(&mut self, input: &str) -> AddOutcome {
        self.add_at(input, Utc::now())
    }

    fn add_at(&mut self, input: &str, now: DateTime<Utc>) -> AddOutcome {
        let Some(text) = normalize_text(input) else {
            tracing::debug!("Ignoring blank task input");
            self.draft = input.to_string();
            return AddOutcome::Rejected;
        };

        // Wall clock can step backwards; creation times must not.
        let created_at = match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_created_at = Some(created_at);

        let mut task = Task::new(text, created_at);
        while self.get(task.id).is_some() {
            task.id = TaskId::new();
        }

        let id = task.id;
        tracing::debug!(task_id = %id, "Added task");
        self.tasks.push(task);
        self.draft.clear();
        AddOutcome::Added(id)
    }

    /// Text currently sitting in the new-task input
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Start editing a task, seeding the buffer with its current text.
    ///
    /// Returns false (and changes nothing) if the task does not exist.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(buffer) = self.get(id).map(|t| t.text.clone()) else {
            tracing::debug!(task_id = %id, "Ignoring edit for unknown task");
            return false;
        };

        self.edit = Some(EditSession {
            task_id: id,
            buffer,
        });
        true
    }

    /// Replace the in-progress edit text. No-op without an active session.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) -> bool {
        match &mut self.edit {
            Some(session) => {
                session.buffer = text.into();
                true
            }
            None => false,
        }
    }

    /// Commit the active edit.
    ///
    /// A blank buffer behaves like [`TaskListEditor::cancel_edit`]. Only `text`
    /// of the target task changes.
    pub fn save_edit(&mut self) -> EditOutcome {
        let Some(session) = self.edit.take() else {
            return EditOutcome::NoSession;
        };

        let Some(text) = normalize_text(&session.buffer) else {
            tracing::debug!(task_id = %session.task_id, "Blank edit discarded");
            return EditOutcome::Discarded;
        };

        match self.tasks.iter_mut().find(|t| t.id == session.task_id) {
            Some(task) => {
                task.text = text;
                tracing::debug!(task_id = %session.task_id, "Saved task edit");
                EditOutcome::Saved(session.task_id)
            }
            None => EditOutcome::Discarded,
        }
    }

    /// Drop the edit session without touching any task
    pub fn cancel_edit(&mut self) -> bool {
        self.edit.take().is_some()
    }

    /// Remove a task. Deleting the task under edit also ends the session.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;

        if self.is_editing(id) {
            self.edit = None;
        }

        if removed {
            tracing::debug!(task_id = %id, "Deleted task");
        } else {
            tracing::debug!(task_id = %id, "Ignoring delete for unknown task");
        }
        removed
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks newest first. Equal timestamps keep the later insertion first.
    pub fn ordered(&self) -> Vec<&Task> {
        let mut ordered: Vec<&Task> = self.tasks.iter().rev().collect();
        ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        ordered
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.edit.as_ref().is_some_and(|s| s.task_id == id)
    }
}
