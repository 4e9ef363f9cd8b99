//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use pokebox_config::ConfigError;
use pokebox_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Failed to {operation}")]
    #[diagnostic(
        code(pokebox::connection_failed),
        help(
            "Check that the service is running and reachable.\n\
             Cause: {detail}"
        )
    )]
    ConnectionFailed { operation: String, detail: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(pokebox::auth_failed),
        help(
            "Verify the bearer token for this profile.\n\
             Run: pokebox config set-token"
        )
    )]
    AuthFailed { message: String },

    #[error("No credentials configured for profile '{profile}'")]
    #[diagnostic(
        code(pokebox::no_credentials),
        help(
            "Store a token with: pokebox config set-token --profile {profile}\n\
             Or set the POKEBOX_TOKEN environment variable."
        )
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(pokebox::not_found),
        help("Run: pokebox {list_command} to see what exists")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    /// The service answered 404 without telling us which record.
    #[error("{message}")]
    #[diagnostic(code(pokebox::not_found))]
    RemoteNotFound { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(pokebox::rejected))]
    Rejected { message: String },

    #[error("API error ({code}): {message}")]
    #[diagnostic(code(pokebox::api_error))]
    ApiError { code: String, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(pokebox::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(pokebox::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: pokebox config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("No service configured")]
    #[diagnostic(
        code(pokebox::no_config),
        help(
            "Create a profile with: pokebox config init\n\
             Or pass --base-url. Expected config at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error("{message}")]
    #[diagnostic(code(pokebox::config))]
    Config { message: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Prompt failed: {reason}")]
    #[diagnostic(
        code(pokebox::prompt),
        help("Use --yes (-y) or pass values as flags in non-interactive contexts.")
    )]
    Prompt { reason: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {0}")]
    #[diagnostic(code(pokebox::render))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } | Self::RemoteNotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Rejected { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => CliError::Validation {
                field: "entry".into(),
                reason: errors.to_string(),
            },
            CoreError::Unauthorized { message } => CliError::AuthFailed { message },
            CoreError::NotFound { message } => CliError::RemoteNotFound { message },
            CoreError::BadRequest { message } => CliError::Rejected { message },
            CoreError::Server { message } => CliError::ApiError {
                code: "server".into(),
                message,
            },
            CoreError::Unknown { status, message } => CliError::ApiError {
                code: status.to_string(),
                message,
            },
            CoreError::Transport { operation, detail } => CliError::ConnectionFailed {
                operation: operation.to_string(),
                detail,
            },
            CoreError::Config { message } => CliError::Config { message },
            CoreError::Internal(message) => CliError::ApiError {
                code: "internal".into(),
                message,
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
