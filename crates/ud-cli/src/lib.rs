//! ud-cli library
//!
//! Application controller, rendering and the interactive session behind the
//! `ud` binary. Exported for the end-to-end tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod render;
pub mod session;
pub mod session_command;

#[cfg(test)]
mod tests;

pub use app::{App, Screen};
pub use cli::Cli;
pub use commands::{Commands, OutputFormat, execute};
pub use error::{CliError, Result as CliErrorResult};
pub use session_command::{SessionCommand, SessionLine};
