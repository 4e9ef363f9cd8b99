//! Shared configuration for pokebox.
//!
//! TOML profiles, bearer-token resolution (env + keyring + plaintext),
//! and translation to `pokebox_core::SessionConfig`. The CLI layers its
//! flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use pokebox_core::{SessionConfig, TlsVerification};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Keyring service name. Entries are keyed `<profile>/token`.
pub const KEYRING_SERVICE: &str = "pokebox";

/// Prefix for environment overrides (`POKEBOX_DEFAULTS__OUTPUT=json`).
pub const ENV_PREFIX: &str = "POKEBOX_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when `--profile` is not given.
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    /// Named service profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds. Unset keeps the HTTP client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: None,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

/// A named service profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Service root (e.g. "http://localhost:8080"); `/api/` is implied.
    pub base_url: String,

    /// Bearer token (plaintext; prefer keyring or `token_env`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Environment variable holding the bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,

    /// Path to a custom CA certificate (PEM).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ca_cert: Option<PathBuf>,

    /// Accept invalid TLS certificates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insecure: Option<bool>,

    /// Request timeout in seconds (overrides `defaults.timeout`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Known size of the remote catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_size: Option<u32>,
}

impl Profile {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "pokebox", "pokebox").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("pokebox");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load defaults, then `path` (if it exists), then `POKEBOX_*` env vars.
///
/// Nested keys use a double underscore: `POKEBOX_DEFAULTS__OUTPUT`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file is missing or unreadable.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Profile resolution ──────────────────────────────────────────────

/// Pick the active profile name: explicit choice, then `default_profile`,
/// then `"default"`.
pub fn active_profile_name(explicit: Option<&str>, config: &Config) -> String {
    explicit
        .map(str::to_owned)
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

// ── Token resolution ────────────────────────────────────────────────

/// Resolve the bearer token: `token_env` variable, then system keyring,
/// then plaintext `token`.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            debug!(env = %env_name, "token from environment");
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Ok(entry) = keyring_entry(profile_name) {
        if let Ok(secret) = entry.get_password() {
            debug!(profile = %profile_name, "token from keyring");
            return Ok(SecretString::from(secret));
        }
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Store a bearer token in the system keyring for `profile_name`.
pub fn store_token(profile_name: &str, token: &str) -> Result<(), ConfigError> {
    keyring_entry(profile_name)?.set_password(token)?;
    Ok(())
}

fn keyring_entry(profile_name: &str) -> Result<keyring::Entry, keyring::Error> {
    keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/token"))
}

// ── Translation to core ─────────────────────────────────────────────

/// Parse and check a service base URL.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let url: Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "base_url".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("expected http or https, got '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// TLS mode for a profile. `insecure` wins over `ca_cert`.
pub fn profile_tls(profile: &Profile) -> TlsVerification {
    if profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Build a `SessionConfig` from a profile, resolving its token.
pub fn profile_to_session_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<SessionConfig, ConfigError> {
    let token = resolve_token(profile, profile_name)?;
    session_config(profile, token, defaults)
}

/// Build a `SessionConfig` from a profile and an already-resolved token.
pub fn session_config(
    profile: &Profile,
    token: SecretString,
    defaults: &Defaults,
) -> Result<SessionConfig, ConfigError> {
    let base_url = parse_base_url(&profile.base_url)?;

    let mut config = SessionConfig::new(base_url, token);
    config.tls = profile_tls(profile);
    config.timeout = profile
        .timeout
        .or(defaults.timeout)
        .map(Duration::from_secs);
    if let Some(page_size) = profile.page_size {
        if page_size == 0 {
            return Err(ConfigError::Validation {
                field: "page_size".into(),
                reason: "must be at least 1".into(),
            });
        }
        config.page_size = page_size;
    }
    if let Some(catalog_size) = profile.catalog_size {
        config.catalog_size = catalog_size;
    }
    Ok(config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.default_profile.as_deref(), Some("default"));
        assert_eq!(config.defaults.output, "table");
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        let mut profile = Profile::new("http://localhost:8080");
        profile.token_env = Some("POKEBOX_TEST_TOKEN_UNSET".into());
        profile.timeout = Some(5);
        config.profiles.insert("local".into(), profile);
        config.default_profile = Some("local".into());

        save_config_to(&config, &path).unwrap();
        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, config);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("[profiles.local]"));
        assert!(!raw.contains("ca_cert"));
    }

    #[test]
    fn parses_handwritten_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "home"

[defaults]
output = "json"

[profiles.home]
base_url = "https://pokebox.example"
insecure = true
page_size = 20
"#,
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.defaults.output, "json");
        assert_eq!(config.defaults.color, "auto");
        let home = &config.profiles["home"];
        assert_eq!(home.page_size, Some(20));
        assert_eq!(profile_tls(home), TlsVerification::DangerAcceptInvalid);
    }

    #[test]
    fn active_profile_precedence() {
        let mut config = Config::default();
        assert_eq!(active_profile_name(None, &config), "default");
        config.default_profile = Some("home".into());
        assert_eq!(active_profile_name(None, &config), "home");
        assert_eq!(active_profile_name(Some("work"), &config), "work");
    }

    #[test]
    fn plaintext_token_is_last_resort() {
        let mut profile = Profile::new("http://localhost:8080");
        profile.token_env = Some("POKEBOX_TEST_TOKEN_NEVER_SET".into());
        profile.token = Some("plain".into());

        let token = resolve_token(&profile, "pokebox-test-plaintext-profile").unwrap();
        assert_eq!(token.expose_secret(), "plain");
    }

    #[test]
    fn missing_token_is_no_credentials() {
        let profile = Profile::new("http://localhost:8080");
        let err = resolve_token(&profile, "pokebox-test-empty-profile").unwrap_err();
        assert!(matches!(err, ConfigError::NoCredentials { ref profile } if profile == "pokebox-test-empty-profile"));
    }

    #[test]
    fn session_config_from_profile() {
        let mut profile = Profile::new("http://localhost:8080");
        profile.token = Some("t".into());
        profile.ca_cert = Some(PathBuf::from("/etc/ca.pem"));
        profile.page_size = Some(25);

        let defaults = Defaults {
            timeout: Some(12),
            ..Defaults::default()
        };
        let config =
            profile_to_session_config(&profile, "pokebox-test-session-profile", &defaults).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
        assert_eq!(config.tls, TlsVerification::CustomCa(PathBuf::from("/etc/ca.pem")));
        assert_eq!(config.timeout, Some(Duration::from_secs(12)));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.catalog_size, 874);
    }

    #[test]
    fn rejects_bad_urls_and_zero_page_size() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("ftp://example.com").is_err());

        let mut profile = Profile::new("http://localhost");
        profile.token = Some("t".into());
        profile.page_size = Some(0);
        let err = profile_to_session_config(&profile, "pokebox-test-zero", &Defaults::default())
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "page_size"));
    }
}
