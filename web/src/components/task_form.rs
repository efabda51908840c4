use crate::api::Task;
use dioxus::prelude::*;

/// Fields collected by the modal form, for both create and edit. The
/// description stays a plain string so an edit can clear it; the view
/// decides how an empty one is sent.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

/// Modal component for creating or editing a task.
///
/// The title must be non-empty; this is the only place the invariant is
/// enforced, the server accepts whatever it is sent.
#[component]
pub fn TaskForm(
    show: bool,
    task_to_edit: Option<Task>,
    on_save: EventHandler<TaskDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = task_to_edit.is_some();
    let mut title = use_signal(|| {
        task_to_edit
            .as_ref()
            .map(|task| task.title.clone())
            .unwrap_or_default()
    });
    let mut description = use_signal(|| {
        task_to_edit
            .as_ref()
            .and_then(|task| task.description.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| None::<String>);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let title = title().trim().to_string();

        if title.is_empty() {
            error.set(Some("Please enter a title".to_string()));
            return;
        }

        error.set(None);
        on_save.call(TaskDraft {
            title,
            description: description().trim().to_string(),
        });
    };

    let handle_title_input = move |evt: FormEvent| {
        title.set(evt.value());
        if error().is_some() {
            error.set(None);
        }
    };

    if !show {
        return rsx! { div {} };
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_cancel.call(()),

            div {
                class: "modal-card",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title",
                        if editing { "Edit task" } else { "New task" }
                    }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_cancel.call(()),
                        "✕"
                    }
                }

                form { onsubmit: handle_submit,
                    div { class: "modal-field",
                        label { class: "modal-label", "Title" }
                        input {
                            r#type: "text",
                            placeholder: "What needs doing?",
                            value: "{title}",
                            oninput: handle_title_input,
                            class: "modal-input",
                            autofocus: true
                        }
                    }

                    div { class: "modal-field",
                        label { class: "modal-label", "Description" }
                        textarea {
                            placeholder: "Optional details...",
                            value: "{description}",
                            oninput: move |evt: FormEvent| description.set(evt.value()),
                            class: "modal-input modal-textarea"
                        }
                    }

                    if let Some(error_msg) = error() {
                        div { class: "modal-error", "{error_msg}" }
                    }

                    div { class: "modal-actions",
                        button {
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            class: "button button-ghost",
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "button button-primary",
                            if editing { "Save" } else { "Create" }
                        }
                    }
                }
            }
        }
    }
}
