use serde::{Deserialize, Serialize};

/// Priority rungs, highest first. Persisted lowercase to match the stored
/// task array (`"high" | "medium" | "low"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// Fixed ranking used by the display sort: high=3, medium=2, low=1.
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parses a form-control value. Anything unrecognized falls back to
    /// `Low`, the same default a fresh draft starts with.
    pub fn parse(value: &str) -> Self {
        match value {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::Low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
}

impl Task {
    pub fn new(id: u64, title: String, description: String, priority: Priority) -> Self {
        Self {
            id,
            title,
            description,
            priority,
            completed: false,
        }
    }
}

/// Transient edit buffer the form binds to. Lives only while the user is
/// composing or editing; reset to default after a successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Draft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
        }
    }

    /// Both text fields are required; presence is the only validation.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.description.is_empty()
    }
}
