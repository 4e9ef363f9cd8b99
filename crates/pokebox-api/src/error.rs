use std::fmt;

use thiserror::Error;

/// The remote call that was being attempted when a transport failure hit.
///
/// Carried by [`Error::Transport`] so the caller can say *what* failed even
/// though no HTTP response ever arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListPokemon,
    GetPokemon,
    ListBoxIds,
    GetBoxEntry,
    CreateBoxEntry,
    UpdateBoxEntry,
    DeleteBoxEntry,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Self::ListPokemon => "fetch Pokemon",
            Self::GetPokemon => "fetch Pokemon details",
            Self::ListBoxIds => "fetch Box entries",
            Self::GetBoxEntry => "fetch Box entry",
            Self::CreateBoxEntry => "create Box entry",
            Self::UpdateBoxEntry => "update Box entry",
            Self::DeleteBoxEntry => "delete Box entry",
        };
        f.write_str(phrase)
    }
}

/// Top-level error type for the `pokebox-api` crate.
///
/// Non-2xx responses are classified by status code. Every status variant
/// carries a human-readable `message` taken from the JSON error body when
/// the server sent one, else the status text, else a fixed default.
/// `pokebox-core` maps these into its user-facing taxonomy.
#[derive(Debug, Error)]
pub enum Error {
    // ── Status classes ──────────────────────────────────────────────
    /// 401: bearer token missing, expired or rejected.
    #[error("{message}")]
    Unauthorized { message: String },

    /// 404: the named Pokemon or Box entry does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// 400: the server rejected the request body or query.
    #[error("{message}")]
    BadRequest { message: String },

    /// 500: the server failed while handling the request.
    #[error("{message}")]
    Server { message: String },

    /// Any other non-2xx status.
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// No response was received (connection refused, DNS failure, reset...).
    #[error("Failed to {operation}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// Building the HTTP client failed (bad CA file, TLS backend error).
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Configuration ───────────────────────────────────────────────
    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL parsed but cannot carry path segments (e.g. `mailto:`).
    #[error("Base URL cannot be used for HTTP requests: {0}")]
    InvalidBaseUrl(String),

    /// The bearer token contains bytes that are not valid in a header.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// The HTTP status that produced this error, if a response arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::NotFound { .. } => Some(404),
            Self::BadRequest { .. } => Some(400),
            Self::Server { .. } => Some(500),
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client itself never retries; callers decide.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Server { .. } => true,
            _ => false,
        }
    }

    /// The operation a transport failure interrupted.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::Transport { operation, .. } => Some(*operation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_variants() {
        let cases = [
            (Error::Unauthorized { message: String::new() }, Some(401)),
            (Error::NotFound { message: String::new() }, Some(404)),
            (Error::BadRequest { message: String::new() }, Some(400)),
            (Error::Server { message: String::new() }, Some(500)),
            (Error::Status { status: 418, message: String::new() }, Some(418)),
            (Error::Tls("x".into()), None),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err:?}");
        }
    }

    #[test]
    fn status_display_is_the_message() {
        let err = Error::BadRequest {
            message: "level must be a number".into(),
        };
        assert_eq!(err.to_string(), "level must be a number");

        let err = Error::Status {
            status: 409,
            message: "Conflict".into(),
        };
        assert_eq!(err.to_string(), "Conflict (HTTP 409)");
    }

    #[test]
    fn operation_phrases() {
        assert_eq!(Operation::ListPokemon.to_string(), "fetch Pokemon");
        assert_eq!(Operation::DeleteBoxEntry.to_string(), "delete Box entry");
    }
}
