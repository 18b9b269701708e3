//! Line-oriented Markdown task extraction.
//!
//! The parser walks a ticket file one line at a time, tracking which `## `
//! section it is in. Checkbox lines are only turned into tasks once a
//! heading has been seen; anything before the first heading is ignored.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Section, Task};

const HEADING_PREFIX: &str = "## ";
const DONE_MARK: &str = "x";

static CHECKBOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^- \[([ x])\] (.+)").expect("checkbox pattern is valid")
});

/// Where the scan currently is relative to the ticket's headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// No `## ` heading seen yet; checkbox lines are dropped.
    Unset,
    In(Section),
}

/// Extract tasks from ticket contents in source order.
///
/// Returned tasks carry no metadata; [`crate::board::Board`] attaches it.
/// Malformed lines are skipped silently.
pub fn parse_tasks(contents: &str) -> Vec<Task> {
    let mut state = ParserState::Unset;
    let mut tasks = Vec::new();

    for line in contents.lines() {
        if let Some(heading) = line.strip_prefix(HEADING_PREFIX) {
            state = ParserState::In(Section::classify(heading));
            continue;
        }

        let ParserState::In(section) = state else {
            continue;
        };

        let Some(caps) = CHECKBOX.captures(line) else {
            continue;
        };

        let name = caps[2].trim();
        if name.is_empty() {
            continue;
        }

        tasks.push(Task::new(name, &caps[1] == DONE_MARK, section));
    }

    tasks
}
