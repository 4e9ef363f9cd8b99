//! Command dispatch: bridges CLI args -> session actions -> output formatting.

pub mod box_cmd;
pub mod catalog;
pub mod config_cmd;
pub mod util;

use pokebox_core::Session;

use crate::cli::Command;
use crate::error::CliError;
use crate::output::Ui;

/// Dispatch a service-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, session: Session, ui: &Ui) -> Result<(), CliError> {
    match cmd {
        Command::Catalog(args) => catalog::handle(session, args, ui).await,
        Command::Box(args) => box_cmd::handle(session, args, ui).await,
        // Config and Completions are handled before a session exists
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
