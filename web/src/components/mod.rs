mod background;
mod loading_spinner;
mod task_form;
mod task_item;

pub use background::Background;
pub use loading_spinner::LoadingSpinner;
pub use task_form::{TaskDraft, TaskForm};
pub use task_item::TaskItem;
