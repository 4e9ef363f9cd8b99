//! Shared helpers for command handlers.

use pokebox_core::Session;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(prompt_err)
}

/// Map a dialoguer failure (no TTY, interrupted) into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Prompt {
        reason: e.to_string(),
    }
}

/// Surface the failure behind the last dispatch, if there was one.
///
/// Local form rejections come first: they mean nothing was sent.
pub fn check(session: &Session) -> Result<(), CliError> {
    if let Some(errors) = &session.state().form_errors {
        return Err(CliError::Validation {
            field: "entry".into(),
            reason: errors.to_string(),
        });
    }
    match session.last_failure() {
        Some(error) => Err(error.clone().into()),
        None => Ok(()),
    }
}
