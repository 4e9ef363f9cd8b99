//! Flag overrides on top of `pokebox-config` profiles.
//!
//! Precedence, highest first: command-line flags (and their `POKEBOX_*`
//! env twins), the active profile, `[defaults]`.

use pokebox_config::{self as cfg, Config, Profile};
use pokebox_core::SessionConfig;
use secrecy::SecretString;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Whether the command calls `box/*` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Catalog reads only; the token may be absent.
    Anonymous,
    Authenticated,
}

pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    cfg::active_profile_name(global.profile.as_deref(), config)
}

/// Build a `SessionConfig` from the config file, profile, and CLI overrides.
pub fn build_session_config(
    global: &GlobalOpts,
    config: &Config,
    access: Access,
) -> Result<SessionConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    let mut profile = match config.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        // An explicitly requested profile must exist
        None if global.profile.is_some() => {
            let mut available: Vec<_> = config.profiles.keys().cloned().collect();
            available.sort();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
            });
        }
        None => {
            let base_url = global.base_url.clone().ok_or_else(|| CliError::NoConfig {
                path: cfg::config_path().display().to_string(),
            })?;
            Profile::new(base_url)
        }
    };

    apply_overrides(&mut profile, global);

    let token = match global.token.clone() {
        Some(token) => SecretString::from(token),
        None => match cfg::resolve_token(&profile, &profile_name) {
            Ok(token) => token,
            Err(_) if access == Access::Anonymous => SecretString::from(String::new()),
            Err(e) => return Err(e.into()),
        },
    };

    Ok(cfg::session_config(&profile, token, &config.defaults)?)
}

fn apply_overrides(profile: &mut Profile, global: &GlobalOpts) {
    if let Some(ref url) = global.base_url {
        profile.base_url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;
    use pokebox_core::TlsVerification;
    use secrecy::ExposeSecret;

    use super::*;
    use crate::cli::Cli;

    fn global(args: &[&str]) -> GlobalOpts {
        let mut argv = vec!["pokebox"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["box", "list"]);
        Cli::try_parse_from(argv).unwrap().global
    }

    fn config_with_home() -> Config {
        let mut config = Config::default();
        let mut home = Profile::new("http://home.example:8080");
        home.token = Some("from-profile".into());
        config.profiles.insert("home".into(), home);
        config.default_profile = Some("home".into());
        config
    }

    #[test]
    fn flags_override_profile() {
        let g = global(&["--base-url", "http://other:9000", "-k", "--timeout", "3"]);
        let built = build_session_config(&g, &config_with_home(), Access::Authenticated).unwrap();
        assert_eq!(built.base_url.as_str(), "http://other:9000/");
        assert_eq!(built.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(built.timeout, Some(std::time::Duration::from_secs(3)));
    }

    #[test]
    fn token_flag_wins() {
        let g = global(&["--token", "from-flag"]);
        let built = build_session_config(&g, &config_with_home(), Access::Authenticated).unwrap();
        assert_eq!(built.token.expose_secret(), "from-flag");
    }

    #[test]
    fn base_url_alone_is_enough_for_catalog_reads() {
        let g = global(&["--base-url", "http://localhost:8080", "-p", "default"]);
        let config = Config::default();
        let built = build_session_config(&g, &config, Access::Anonymous);
        // Explicit "-p default" with no such profile is an error
        assert!(matches!(built, Err(CliError::ProfileNotFound { .. })));

        let g = global(&["--base-url", "http://localhost:8080"]);
        let built = build_session_config(&g, &config, Access::Anonymous).unwrap();
        assert_eq!(built.base_url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn missing_url_is_no_config() {
        let g = global(&[]);
        let err = build_session_config(&g, &Config::default(), Access::Anonymous).unwrap_err();
        assert!(matches!(err, CliError::NoConfig { .. }));
    }

    #[test]
    fn unknown_profile_lists_available() {
        let g = global(&["-p", "work"]);
        let err = build_session_config(&g, &config_with_home(), Access::Anonymous).unwrap_err();
        match err {
            CliError::ProfileNotFound { name, available } => {
                assert_eq!(name, "work");
                assert_eq!(available, "home");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
