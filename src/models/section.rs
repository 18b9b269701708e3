use serde::{Deserialize, Serialize};

/// The kanban column a task belongs to, taken from the nearest `## ` heading.
///
/// - `Todo`: heading contains "todo"
/// - `Doing`: heading contains "work in progress" or "doing"
/// - `Done`: heading contains "done"
/// - `Archive`: heading contains "archive"
/// - `None`: any other heading
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Todo,
    Doing,
    Done,
    Archive,
    None,
}

impl Section {
    /// Classify heading text. Matching is case-insensitive and by substring,
    /// checked in column order so "Todo (done soon)" is still `Todo`.
    pub fn classify(heading: &str) -> Self {
        let heading = heading.trim().to_lowercase();
        if heading.contains("todo") {
            Self::Todo
        } else if heading.contains("work in progress") || heading.contains("doing") {
            Self::Doing
        } else if heading.contains("done") {
            Self::Done
        } else if heading.contains("archive") {
            Self::Archive
        } else {
            Self::None
        }
    }
}
