//! Board location configuration.

use std::path::PathBuf;

use anyhow::Result;

/// Environment variable overriding the board directory.
pub const BOARD_DIR_ENV: &str = "KANBAN_DIR";
/// Environment variable overriding the active-ticket pointer file.
pub const POINTER_FILE_ENV: &str = "KANBAN_LAST_TICKET";

/// Where the board lives on disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory holding ticket and `tasks*` metadata files.
    pub board_dir: PathBuf,
    /// Plain-text file naming the active ticket.
    pub pointer_file: PathBuf,
}

impl Config {
    /// Create a config from explicit paths. Relative paths are resolved
    /// against the current working directory.
    pub fn new(board_dir: impl Into<PathBuf>, pointer_file: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            board_dir: absolute(board_dir.into())?,
            pointer_file: absolute(pointer_file.into())?,
        })
    }

    /// Load from `KANBAN_DIR` / `KANBAN_LAST_TICKET`, falling back to
    /// `~/.local/share/nvim/kanban` and `~/.last_ticket`.
    pub fn from_env() -> Result<Self> {
        let board_dir = match std::env::var_os(BOARD_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => home_dir()?.join(".local/share/nvim/kanban"),
        };
        let pointer_file = match std::env::var_os(POINTER_FILE_ENV) {
            Some(file) => PathBuf::from(file),
            None => home_dir()?.join(".last_ticket"),
        };
        Self::new(board_dir, pointer_file)
    }

    /// Replace either path, keeping the other.
    pub fn with_overrides(
        self,
        board_dir: Option<PathBuf>,
        pointer_file: Option<PathBuf>,
    ) -> Result<Self> {
        Self::new(
            board_dir.unwrap_or(self.board_dir),
            pointer_file.unwrap_or(self.pointer_file),
        )
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
