//! To-do task model.
//!
//! Files written by older versions of the tools may hold `""` or `null` where
//! a value is absent, a priority outside the enum, or values of the wrong
//! type. Loading maps all of those to empty values instead of failing the
//! whole file.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::dates::validate_due_date;
use crate::error::StoreError;
use crate::lenient;
use crate::record::{Record, require};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Case-insensitive match against the three levels.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub completed: bool,

    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Option<Priority>,

    /// `YYYY-MM-DD`.
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub due_date: Option<String>,

    #[serde(default, deserialize_with = "lenient::string_list")]
    pub tags: Vec<String>,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
            priority: None,
            due_date: None,
            tags: Vec::new(),
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// `[X]` / `[ ]` checkbox used by both to-do front ends.
    pub fn status_marker(&self) -> &'static str {
        if self.completed { "[X]" } else { "[ ]" }
    }
}

impl Record for Task {
    const KIND: &'static str = "task";

    fn validate(&self) -> Result<(), StoreError> {
        require(
            "description",
            &self.description,
            "Task description cannot be empty.",
        )?;
        if let Some(due) = &self.due_date {
            validate_due_date(due)?;
        }
        Ok(())
    }

    fn label(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
}

impl TaskSummary {
    pub fn of(tasks: &[Task]) -> Self {
        Self {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }

    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}

fn lenient_priority<'de, D>(d: D) -> Result<Option<Priority>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(d)?;
    Ok(match raw {
        Some(Value::String(s)) => Priority::parse(&s),
        _ => None,
    })
}
