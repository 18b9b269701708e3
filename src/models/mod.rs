//! Domain models for the kanban board API.
//!
//! # Core Concepts
//!
//! - [`Ticket`]: one kanban card, backed by a single Markdown file in the board
//!   directory and rebuilt from that file on every request.
//! - [`Section`]: the `## ` heading group a task sits under (todo, doing, done,
//!   archive or an unrecognized heading).
//! - [`Task`]: a checkbox line inside a section, with status derived from both
//!   the checkbox mark and the section.
//! - [`TaskMetadata`]: free text attached to a task by filename convention.
//!
//! Nothing here is persisted in memory; the board files are the only state.

mod section;
mod task;
mod ticket;

pub use section::*;
pub use task::*;
pub use ticket::*;
