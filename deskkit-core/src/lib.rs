//! deskkit-core: record model and JSON persistence shared by the deskkit utilities

pub mod contact;
pub mod dates;
pub mod error;
pub mod forms;
mod lenient;
pub mod persist;
pub mod record;
pub mod store;
pub mod task;

pub use contact::Contact;
pub use dates::{parse_due_date, validate_due_date};
pub use error::StoreError;
pub use forms::{ContactForm, FieldPolicy, TaskForm, split_tags};
pub use persist::{load_records, save_records};
pub use record::Record;
pub use store::RecordStore;
pub use task::{Priority, Task, TaskSummary};

/// Fixed data files, resolved against the working directory.
pub mod paths {
    pub const CONTACTS_FILE: &str = "contacts.json";
    pub const TODO_FILE: &str = "todo.json";
    pub const TODO_TUI_FILE: &str = "todo_gui.json";
}
