//! `uav-command`: waypoint commands, the command backlog, and file loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`command`]   | `Command` value record                                    |
//! | [`backlog`]   | `CommandBacklog` (`Vec<Command>`, earliest due at the end) |
//! | [`loader`]    | `load_commands`, `load_commands_reader`                   |
//! | [`error`]     | `CommandError`, `CommandResult<T>`                        |
//!
//! The backlog is filled once before the run and drained destructively as
//! simulated time passes each command's due time.

pub mod backlog;
pub mod command;
pub mod error;
pub mod loader;


pub use backlog::CommandBacklog;
pub use command::Command;
pub use error::{CommandError, CommandResult};
pub use loader::{load_commands, load_commands_reader};
