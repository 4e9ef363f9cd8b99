// ── Core error types ──
//
// User-facing errors from pokebox-core. `Display` is exactly the text
// placed in the session's error slot, so variants carry finished
// messages rather than raw HTTP details.

use pokebox_api::Operation;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error)]
pub enum CoreError {
    // ── Client-side ──────────────────────────────────────────────────
    /// Form input rejected locally; never reaches the network.
    #[error("{0}")]
    Validation(ValidationErrors),

    // ── Remote status classes ────────────────────────────────────────
    #[error("{message}")]
    Unauthorized { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    Server { message: String },

    /// Any non-2xx status outside the four classes above.
    #[error("{message} (HTTP {status})")]
    Unknown { status: u16, message: String },

    // ── No response ──────────────────────────────────────────────────
    #[error("Failed to {operation}")]
    Transport { operation: Operation, detail: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether the failure came back from the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized { .. }
                | Self::NotFound { .. }
                | Self::BadRequest { .. }
                | Self::Server { .. }
                | Self::Unknown { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<pokebox_api::Error> for CoreError {
    fn from(err: pokebox_api::Error) -> Self {
        match err {
            pokebox_api::Error::Unauthorized { message } => Self::Unauthorized { message },
            pokebox_api::Error::NotFound { message } => Self::NotFound { message },
            pokebox_api::Error::BadRequest { message } => Self::BadRequest { message },
            pokebox_api::Error::Server { message } => Self::Server { message },
            pokebox_api::Error::Status { status, message } => Self::Unknown { status, message },
            pokebox_api::Error::Transport { operation, source } => Self::Transport {
                operation,
                detail: source.to_string(),
            },
            pokebox_api::Error::Deserialization { message, body: _ } => {
                Self::Internal(format!("Unexpected response: {message}"))
            }
            err @ (pokebox_api::Error::InvalidUrl(_)
            | pokebox_api::Error::InvalidBaseUrl(_)
            | pokebox_api::Error::InvalidToken(_)
            | pokebox_api::Error::Tls(_)) => Self::Config {
                message: err.to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_keep_the_message() {
        let err: CoreError = pokebox_api::Error::BadRequest {
            message: "level must be a number".into(),
        }
        .into();
        assert!(matches!(err, CoreError::BadRequest { .. }));
        assert_eq!(err.to_string(), "level must be a number");
        assert!(err.is_remote());
    }

    #[test]
    fn other_statuses_become_unknown() {
        let err: CoreError = pokebox_api::Error::Status {
            status: 418,
            message: "I'm a teapot".into(),
        }
        .into();
        assert_eq!(err.to_string(), "I'm a teapot (HTTP 418)");
    }

    #[test]
    fn setup_failures_are_config_errors() {
        let err: CoreError = pokebox_api::Error::InvalidBaseUrl("mailto:x".into()).into();
        assert!(matches!(err, CoreError::Config { .. }));
        assert!(!err.is_remote());
    }
}
