use crate::api::{self, NewTask, Task, TaskPatch};
use crate::components::{LoadingSpinner, TaskDraft, TaskForm, TaskItem};
use dioxus::prelude::*;

/// Completion filter applied on top of the search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskFilter {
    All,
    Active,
    Completed,
}

impl TaskFilter {
    fn label(&self) -> &'static str {
        match self {
            TaskFilter::All => "All",
            TaskFilter::Active => "Active",
            TaskFilter::Completed => "Completed",
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Active => !task.completed,
            TaskFilter::Completed => task.completed,
        }
    }
}

/// The task list view. Owns all client-side state: the task list itself,
/// the search query, the completion filter and the modal form.
///
/// Toggle and delete are optimistic: local state mutates before the server
/// answers, and a failed request is only logged.
#[component]
pub fn Tasks() -> Element {
    let mut tasks = use_signal(Vec::<Task>::new);
    let mut loading = use_signal(|| true);
    let mut show_modal = use_signal(|| false);
    let mut editing_task = use_signal(|| None::<Task>);
    let mut search_query = use_signal(String::new);
    let mut filter = use_signal(|| TaskFilter::All);

    // Fetch the task list on mount.
    use_effect(move || {
        spawn(async move {
            match api::get_tasks().await {
                Ok(fetched) => {
                    tasks.set(fetched);
                    loading.set(false);
                }
                Err(err) => {
                    tracing::error!("Failed to load tasks: {}", err);
                    loading.set(false);
                }
            }
        });
    });

    let handle_save = move |draft: TaskDraft| {
        let editing = editing_task();
        spawn(async move {
            match editing {
                Some(task) => {
                    // Always send the description so an edit can clear it.
                    let patch = TaskPatch {
                        title: Some(draft.title),
                        description: Some(draft.description),
                        completed: None,
                    };
                    match api::update_task(&task.id, &patch).await {
                        Ok(updated) => {
                            let id = updated.id.clone();
                            tasks.with_mut(|list| {
                                if let Some(slot) = list.iter_mut().find(|task| task.id == id) {
                                    *slot = updated;
                                }
                            });
                            show_modal.set(false);
                            editing_task.set(None);
                        }
                        Err(err) => tracing::error!("Failed to update task {}: {}", task.id, err),
                    }
                }
                None => {
                    let new_task = NewTask {
                        title: draft.title,
                        description: if draft.description.is_empty() {
                            None
                        } else {
                            Some(draft.description)
                        },
                    };
                    match api::create_task(&new_task).await {
                        Ok(created) => {
                            tasks.with_mut(|list| list.insert(0, created));
                            show_modal.set(false);
                        }
                        Err(err) => tracing::error!("Failed to create task: {}", err),
                    }
                }
            }
        });
    };

    let handle_toggle = move |(id, completed): (String, bool)| {
        // Optimistic: flip locally first, log-only on failure.
        tasks.with_mut(|list| {
            if let Some(task) = list.iter_mut().find(|task| task.id == id) {
                task.completed = completed;
            }
        });
        spawn(async move {
            let patch = TaskPatch {
                completed: Some(completed),
                ..Default::default()
            };
            if let Err(err) = api::update_task(&id, &patch).await {
                tracing::error!("Failed to toggle task {}: {}", id, err);
            }
        });
    };

    let handle_delete = move |id: String| {
        // Optimistic: drop locally first, log-only on failure.
        tasks.with_mut(|list| list.retain(|task| task.id != id));
        spawn(async move {
            if let Err(err) = api::delete_task(&id).await {
                tracing::error!("Failed to delete task {}: {}", id, err);
            }
        });
    };

    let filtered_tasks = use_memo(move || {
        let query = search_query().to_lowercase();
        tasks()
            .into_iter()
            .filter(|task| task.title.to_lowercase().contains(&query) && filter().matches(task))
            .collect::<Vec<_>>()
    });

    let active_count = tasks().iter().filter(|task| !task.completed).count();

    rsx! {
        div { class: "task-panel",
            div { class: "panel-header",
                div {
                    h1 { class: "panel-title", "Task" span { class: "panel-title-accent", "Master" } }
                    p { class: "panel-subtitle", "{active_count} tasks pending" }
                }
                button {
                    class: "button button-add",
                    title: "New task",
                    onclick: move |_| {
                        editing_task.set(None);
                        show_modal.set(true);
                    },
                    "+"
                }
            }

            div { class: "panel-controls",
                input {
                    r#type: "text",
                    placeholder: "Search tasks...",
                    value: "{search_query}",
                    oninput: move |evt: FormEvent| search_query.set(evt.value()),
                    class: "search-input"
                }

                div { class: "filter-tabs",
                    {[TaskFilter::All, TaskFilter::Active, TaskFilter::Completed].iter().map(|tab| {
                        let tab = *tab;
                        let tab_class = if filter() == tab { "filter-tab filter-tab-selected" } else { "filter-tab" };
                        rsx! {
                            button {
                                key: "{tab.label()}",
                                class: "{tab_class}",
                                onclick: move |_| filter.set(tab),
                                "{tab.label()}"
                            }
                        }
                    })}
                }
            }

            div { class: "task-list",
                if loading() {
                    LoadingSpinner { message: "Loading tasks...".to_string() }
                } else if filtered_tasks().is_empty() {
                    div { class: "empty-state",
                        p { "Nothing here yet." }
                    }
                } else {
                    {filtered_tasks().iter().map(|task| rsx! {
                        TaskItem {
                            key: "{task.id}",
                            task: task.clone(),
                            on_toggle: handle_toggle,
                            on_edit: move |task: Task| {
                                editing_task.set(Some(task));
                                show_modal.set(true);
                            },
                            on_delete: handle_delete,
                        }
                    })}
                }
            }
        }

        if show_modal() {
            TaskForm {
                show: show_modal(),
                task_to_edit: editing_task(),
                on_save: handle_save,
                on_cancel: move |_| {
                    show_modal.set(false);
                    editing_task.set(None);
                },
            }
        }
    }
}
