mod parser;

pub use parser::parse_tasks;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::config::Config;
use crate::models::*;

const TICKET_EXTENSION: &str = "md";
const TICKET_PREFIX: &str = "T-";
const METADATA_PREFIX: &str = "tasks";

/// Read-only view over a kanban board directory and its active-ticket pointer.
///
/// Every call goes back to the filesystem; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct Board {
    inner: Arc<Config>,
}

impl Board {
    pub fn new(config: Config) -> Self {
        Self {
            inner: Arc::new(config),
        }
    }

    pub fn board_dir(&self) -> &Path {
        &self.inner.board_dir
    }

    pub fn pointer_file(&self) -> &Path {
        &self.inner.pointer_file
    }

    // ============================================================
    // Active ticket
    // ============================================================

    /// Ticket id from the pointer file, trimmed.
    ///
    /// Returns `None` when the file is missing (even if it vanished mid-read)
    /// or holds only whitespace.
    pub fn read_active_ticket(&self) -> Result<Option<String>> {
        let Some(contents) = read_optional(self.pointer_file())? else {
            return Ok(None);
        };

        let id = contents.trim();
        if id.is_empty() {
            Ok(None)
        } else {
            Ok(Some(id.to_string()))
        }
    }

    pub fn get_active_ticket(&self) -> Result<Option<Ticket>> {
        match self.read_active_ticket()? {
            Some(id) => self.get_ticket(&id),
            None => Ok(None),
        }
    }

    // ============================================================
    // Tickets
    // ============================================================

    /// Resolve a ticket id to its file.
    ///
    /// Tries `<id>.md`, then `T-<id>.md`, then the first `*.md` whose stem
    /// contains `id`. Ids containing a path separator never resolve, so the
    /// result is always a file directly inside the board directory.
    pub fn locate_ticket(&self, ticket_id: &str) -> Result<Option<PathBuf>> {
        if ticket_id.contains(['/', '\\']) {
            tracing::warn!("Rejected ticket id with path separator: {}", ticket_id);
            return Ok(None);
        }

        let candidates = [
            format!("{ticket_id}.{TICKET_EXTENSION}"),
            format!("{TICKET_PREFIX}{ticket_id}.{TICKET_EXTENSION}"),
        ];

        for name in candidates {
            let path = self.board_dir().join(name);
            if path.is_file() {
                return Ok(Some(path));
            }
        }

        let found = self
            .markdown_files()?
            .into_iter()
            .find(|(stem, _)| stem.contains(ticket_id))
            .map(|(_, path)| path);

        Ok(found)
    }

    /// Locate, read and parse a ticket, attaching task metadata.
    pub fn get_ticket(&self, ticket_id: &str) -> Result<Option<Ticket>> {
        let Some(file) = self.locate_ticket(ticket_id)? else {
            tracing::debug!("No file for ticket {}", ticket_id);
            return Ok(None);
        };

        let Some(bytes) = read_optional_bytes(&file)? else {
            return Ok(None);
        };

        // A file caught mid-write may end inside a multi-byte character
        let contents = String::from_utf8_lossy(&bytes);
        let mut tasks = parse_tasks(&contents);
        for task in &mut tasks {
            task.metadata = self.get_task_metadata(&task.name)?;
        }

        tracing::debug!("Parsed {} tasks from {}", tasks.len(), file.display());

        Ok(Some(Ticket {
            ticket_id: ticket_id.to_string(),
            file,
            tasks,
        }))
    }

    /// All ticket files in the board directory, sorted by id.
    ///
    /// Files whose stem starts with `tasks` hold task metadata and are skipped.
    pub fn list_tickets(&self) -> Result<Vec<TicketSummary>> {
        let tickets = self
            .markdown_files()?
            .into_iter()
            .filter(|(stem, _)| !stem.starts_with(METADATA_PREFIX))
            .map(|(id, file)| TicketSummary { id, file })
            .collect();

        Ok(tickets)
    }

    // ============================================================
    // Task metadata
    // ============================================================

    pub fn get_task_metadata(&self, task_name: &str) -> Result<Option<String>> {
        let path = self.board_dir().join(metadata_file_name(task_name));
        if !path.is_file() {
            return Ok(None);
        }
        read_optional(&path)
    }

    /// `(stem, path)` for every `*.md` file directly in the board directory,
    /// sorted by file name. A missing directory is treated as empty.
    fn markdown_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let entries = match fs::read_dir(self.board_dir()) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    "Board directory {} does not exist",
                    self.board_dir().display()
                );
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read board directory {}", self.board_dir().display())
                })
            }
        };

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(TICKET_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let stem = stem.to_string();
            files.push((stem, path));
        }

        files.sort_by(|a, b| a.1.file_name().cmp(&b.1.file_name()));
        Ok(files)
    }
}

/// Read a file to a string, mapping "does not exist" to `None`.
fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}

fn read_optional_bytes(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }
}
