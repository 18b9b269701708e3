use serde::{Deserialize, Serialize};

use super::Section;

/// A checkbox line from a ticket file.
///
/// Status comes from two places: the checkbox mark and the enclosing
/// [`Section`]. A task under a "Done" heading is done even when unchecked,
/// and every task under a "Doing" heading is in progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub name: String,
    pub done: bool,
    pub in_progress: bool,
    /// Raw contents of the task's metadata file, if one exists.
    pub metadata: Option<String>,
}

impl Task {
    pub fn new(name: impl Into<String>, checked: bool, section: Section) -> Self {
        Self {
            name: name.into(),
            done: checked || section == Section::Done,
            in_progress: section == Section::Doing,
            metadata: None,
        }
    }
}

/// Metadata lookup result for a single task name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskMetadata {
    pub task_name: String,
    pub metadata: String,
}

/// Metadata file name for a task: `tasks` + name with every space removed.
///
/// Only `' '` is stripped; tabs, slashes and punctuation pass through.
pub fn metadata_file_name(task_name: &str) -> String {
    format!("tasks{}.md", task_name.replace(' ', ""))
}
