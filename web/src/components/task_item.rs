use crate::api::Task;
use dioxus::prelude::*;

/// A single task row with toggle, edit and delete actions.
#[component]
pub fn TaskItem(
    task: Task,
    on_toggle: EventHandler<(String, bool)>,
    on_edit: EventHandler<Task>,
    on_delete: EventHandler<String>,
) -> Element {
    let completed = task.completed;
    let card_class = if completed {
        "task-card task-card-done"
    } else {
        "task-card"
    };
    let title_class = if completed {
        "task-title task-title-done"
    } else {
        "task-title"
    };

    let toggle_task = task.clone();
    let edit_task = task.clone();
    let delete_id = task.id.clone();

    rsx! {
        div { class: "{card_class}",
            div { class: "task-accent" }
            div { class: "task-body",
                div { class: "task-text",
                    h3 { class: "{title_class}", "{task.title}" }
                    if let Some(description) = task.description.as_ref().filter(|text| !text.is_empty()) {
                        p { class: "task-description", "{description}" }
                    }
                }
                div { class: "task-actions",
                    button {
                        class: "task-action task-action-toggle",
                        title: if completed { "Mark as pending" } else { "Mark as done" },
                        onclick: move |_| on_toggle.call((toggle_task.id.clone(), !toggle_task.completed)),
                        if completed { "↺" } else { "✓" }
                    }
                    button {
                        class: "task-action task-action-edit",
                        title: "Edit task",
                        onclick: move |_| on_edit.call(edit_task.clone()),
                        "✎"
                    }
                    button {
                        class: "task-action task-action-delete",
                        title: "Delete task",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        "✕"
                    }
                }
            }
        }
    }
}
