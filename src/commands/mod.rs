//! CLI commands.
//!
//! Each command is a separate module implementing the `CommandExecutor`
//! trait; the binary only parses arguments and dispatches.

mod hide;
mod info;
mod reveal;

pub use hide::HideCommand;
pub use info::InfoCommand;
pub use reveal::RevealCommand;

use anyhow::Result;

/// Trait for command execution.
///
/// Each command struct holds its parsed arguments and implements this
/// trait to define its execution logic.
pub trait CommandExecutor {
    /// Executes the command with its parsed arguments.
    fn execute(&self) -> Result<()>;
}
