//! Raw text forms -> records.
//!
//! Front ends collect plain strings; these types turn them into validated
//! records. What happens to a bad optional field depends on the caller's
//! `FieldPolicy`.

use log::warn;

use crate::contact::Contact;
use crate::dates::parse_due_date;
use crate::error::StoreError;
use crate::record::Record;
use crate::task::{Priority, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldPolicy {
    /// Invalid optional input fails the whole form.
    #[default]
    Reject,
    /// Invalid optional input is dropped (set to absent) and the form goes through.
    Discard,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactForm {
    pub fn from_contact(c: &Contact) -> Self {
        Self {
            name: c.name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
        }
    }

    pub fn build(&self) -> Result<Contact, StoreError> {
        let contact = Contact {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
        };
        contact.validate()?;
        Ok(contact)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub description: String,
    pub priority: String,
    pub due_date: String,
    /// Comma-separated.
    pub tags: String,
    pub completed: bool,
}

impl TaskForm {
    pub fn from_task(t: &Task) -> Self {
        Self {
            description: t.description.clone(),
            priority: t.priority.map(|p| p.to_string()).unwrap_or_default(),
            due_date: t.due_date.clone().unwrap_or_default(),
            tags: t.tags.join(", "),
            completed: t.completed,
        }
    }

    pub fn build(&self, policy: FieldPolicy) -> Result<Task, StoreError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(StoreError::validation(
                "description",
                "Task description cannot be empty.",
            ));
        }

        let priority = match self.priority.trim() {
            "" => None,
            raw => match (Priority::parse(raw), policy) {
                (Some(p), _) => Some(p),
                (None, FieldPolicy::Reject) => {
                    return Err(StoreError::validation(
                        "priority",
                        "Invalid priority level. Use High, Medium or Low.",
                    ));
                }
                (None, FieldPolicy::Discard) => {
                    warn!("discarding invalid priority {raw:?}");
                    None
                }
            },
        };

        let due_date = match self.due_date.trim() {
            "" => None,
            raw => match (parse_due_date(raw), policy) {
                (Some(_), _) => Some(raw.to_string()),
                (None, FieldPolicy::Reject) => {
                    return Err(StoreError::validation(
                        "due_date",
                        "Invalid date format. Please use YYYY-MM-DD.",
                    ));
                }
                (None, FieldPolicy::Discard) => {
                    warn!("discarding invalid due date {raw:?}");
                    None
                }
            },
        };

        Ok(Task {
            description: description.to_string(),
            completed: self.completed,
            priority,
            due_date,
            tags: split_tags(&self.tags),
        })
    }
}

/// Split a comma-separated tag list, trimming and dropping empties.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
