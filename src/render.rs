//! Plain-text rendering of tickets for the terminal.

use crate::models::{Task, Ticket, TicketSummary};

const DONE: char = '✓';
const IN_PROGRESS: char = '▶';
const PENDING: char = '○';
const HAS_METADATA: &str = " [+]";

/// Get the status symbol for a task. Done wins over in-progress.
fn task_symbol(task: &Task) -> char {
    if task.done {
        DONE
    } else if task.in_progress {
        IN_PROGRESS
    } else {
        PENDING
    }
}

/// Render a ticket and its tasks.
///
/// Example output:
/// ```text
/// T-12345
/// ├── ✓ Write migration
/// ├── ▶ Wire up handler [+]
/// └── ○ Update docs
/// ```
/// `[+]` marks tasks that have a metadata file.
pub fn render_ticket(ticket: &Ticket) -> String {
    let mut output = String::new();
    output.push_str(&ticket.ticket_id);
    output.push('\n');

    for (i, task) in ticket.tasks.iter().enumerate() {
        let branch = if i == ticket.tasks.len() - 1 {
            "└── "
        } else {
            "├── "
        };
        output.push_str(branch);
        output.push(task_symbol(task));
        output.push(' ');
        output.push_str(&task.name);
        if task.metadata.is_some() {
            output.push_str(HAS_METADATA);
        }
        output.push('\n');
    }

    output
}

/// One ticket per line: id, then the backing file.
pub fn render_ticket_list(tickets: &[TicketSummary]) -> String {
    let width = tickets.iter().map(|t| t.id.len()).max().unwrap_or(0);
    tickets
        .iter()
        .map(|t| format!("{:<width$}  {}\n", t.id, t.file.display(), width = width))
        .collect()
}
