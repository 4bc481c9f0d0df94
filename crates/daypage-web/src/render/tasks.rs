use daypage_tasks::{EditSession, Task, TaskListEditor};
use hypertext::{prelude::*, Raw};

pub const EMPTY_PLACEHOLDER: &str =
    "You don't have any tasks yet. Add one above to get started.";

// Buttons next to the edit field must not steal focus, or the blur commit fires first.
const KEEP_FOCUS_SCRIPT: &str = "event.preventDefault()";

const EDIT_BLUR_SCRIPT: &str = "if (!this.form.dataset.sent) { \
     this.form.elements.via.value = 'blur'; this.form.requestSubmit(); }";

const EDIT_KEYS_SCRIPT: &str = "if (event.key === 'Enter') { \
     this.form.elements.via.value = 'enter'; \
     } else if (event.key === 'Escape') { \
     event.preventDefault(); this.form.dataset.sent = '1'; \
     document.getElementById('cancel-edit-form').submit(); }";

const EDIT_SUBMIT_SCRIPT: &str = "this.dataset.sent = '1'";

/// Task editor card: add form plus the newest-first list, or the empty placeholder
pub fn render_task_section(editor: &TaskListEditor) -> String {
    let ordered = editor.ordered();
    let items: Vec<String> = ordered
        .iter()
        .map(|task| render_task_item(task, editor.edit_session()))
        .collect();

    maud! {
        section .card.tasks-card {
            p .intro { "Tasks reset when the server restarts." }
            form .add-form action="/tasks" method="post" {
                label .sr-only for="todo-input" { "Add a to-do" }
                input
                    id="todo-input"
                    type="text"
                    name="text"
                    value=(editor.draft())
                    placeholder="What do you need to get done?"
                    autocomplete="off";
                button .primary type="submit" { "Add task" }
            }
            @if ordered.is_empty() {
                p .empty { (EMPTY_PLACEHOLDER) }
            } @else {
                ul .task-list {
                    (Raw::dangerously_create(&items.join("\n")))
                }
            }
        }
    }
    .render()
    .into_inner()
}

fn render_task_item(task: &Task, session: Option<&EditSession>) -> String {
    match session.filter(|s| s.task_id == task.id) {
        Some(session) => render_editing_item(task, session),
        None => render_static_item(task),
    }
}

fn render_static_item(task: &Task) -> String {
    let edit_url = format!("/tasks/{}/edit", task.id);
    let delete_url = format!("/tasks/{}/delete", task.id);

    maud! {
        li .task-item {
            p .task-text { (task.text) }
            div .actions {
                form action=(edit_url) method="post" {
                    button type="submit" { "Edit" }
                }
                form action=(delete_url) method="post" {
                    button .danger type="submit" { "Delete" }
                }
            }
        }
    }
    .render()
    .into_inner()
}

fn render_editing_item(task: &Task, session: &EditSession) -> String {
    let delete_url = format!("/tasks/{}/delete", task.id);

    maud! {
        li .task-item.editing {
            form .edit-form id="edit-form" action="/edit/save" method="post" onsubmit=(EDIT_SUBMIT_SCRIPT) {
                input type="hidden" name="via" value="button";
                input
                    .edit-input
                    type="text"
                    name="text"
                    value=(session.buffer)
                    aria-label="Edit task"
                    autocomplete="off"
                    autofocus
                    onblur=(EDIT_BLUR_SCRIPT)
                    onkeydown=(EDIT_KEYS_SCRIPT);
            }
            div .actions {
                button .primary type="submit" form="edit-form" onmousedown=(KEEP_FOCUS_SCRIPT) { "Save" }
                form id="cancel-edit-form" action="/edit/cancel" method="post" {
                    button type="submit" onmousedown=(KEEP_FOCUS_SCRIPT) { "Cancel" }
                }
                form action=(delete_url) method="post" {
                    button .danger type="submit" onmousedown=(KEEP_FOCUS_SCRIPT) { "Delete" }
                }
            }
        }
    }
    .render()
    .into_inner()
}
