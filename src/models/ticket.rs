use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::Task;

/// A ticket with its parsed tasks, as served by `/ticket/{id}` and
/// `/current-ticket`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    /// Absolute path of the Markdown file backing this ticket.
    pub file: PathBuf,
    pub tasks: Vec<Task>,
}

/// Lightweight ticket reference for listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketSummary {
    /// File stem, e.g. `T-12345`.
    pub id: String,
    pub file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketList {
    pub tickets: Vec<TicketSummary>,
}
