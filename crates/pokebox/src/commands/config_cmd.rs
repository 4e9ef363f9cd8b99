//! Config subcommand handlers.

use dialoguer::{Input, Password, Select};

use pokebox_config::{self as cfg, Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::active_profile_name;
use crate::error::CliError;
use crate::output::{self, Ui};

use super::util::prompt_err;

const REDACTED: &str = "********";

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = cfg::config_path();
            let mut config = cfg::load_config_or_default();
            eprintln!("pokebox configuration wizard");
            eprintln!("  Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default(active_profile_name(global, &config))
                .interact_text()
                .map_err(prompt_err)?;

            let base_url: String = Input::new()
                .with_prompt("Service URL")
                .default("http://localhost:8080".into())
                .validate_with(|input: &String| {
                    cfg::parse_base_url(input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_err)?;

            let mut profile = Profile::new(base_url);

            let store_choices = &[
                "Store token in system keyring (recommended)",
                "Read token from an environment variable",
                "Save token to config file (plaintext)",
                "Skip (catalog browsing only)",
            ];
            let store_selection = Select::new()
                .with_prompt("Bearer token for Box access")
                .items(store_choices)
                .default(0)
                .interact()
                .map_err(prompt_err)?;

            match store_selection {
                0 => {
                    let token = prompt_token()?;
                    cfg::store_token(&profile_name, &token)?;
                    eprintln!("  Token stored in system keyring");
                }
                1 => {
                    let var: String = Input::new()
                        .with_prompt("Environment variable")
                        .default("POKEBOX_TOKEN".into())
                        .interact_text()
                        .map_err(prompt_err)?;
                    profile.token_env = Some(var);
                }
                2 => profile.token = Some(prompt_token()?),
                _ => {}
            }

            config.profiles.insert(profile_name.clone(), profile);
            config.default_profile = Some(profile_name.clone());
            cfg::save_config_to(&config, &config_path)?;

            eprintln!("\nConfiguration written to {}", config_path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Try it: pokebox catalog list");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let config = redacted(cfg::load_config()?);
            let ui = Ui::resolve(global, &config.defaults);
            let out = output::render_single(
                ui.format,
                &config,
                |c| toml::to_string_pretty(c).unwrap_or_else(|e| format!("{c:#?}\n({e})")),
                |c| active_profile_name(global, c),
            )?;
            output::print_output(&out, ui.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            println!("{}", cfg::config_path().display());
            Ok(())
        }

        // ── SetToken ────────────────────────────────────────────────
        ConfigCommand::SetToken { token } => {
            let config = cfg::load_config_or_default();
            let profile_name = active_profile_name(global, &config);
            let token = match token {
                Some(token) => token,
                None => prompt_token()?,
            };
            cfg::store_token(&profile_name, &token)?;
            if !global.quiet {
                eprintln!("Token stored in system keyring for profile '{profile_name}'");
            }
            Ok(())
        }
    }
}

fn prompt_token() -> Result<String, CliError> {
    let token = Password::new()
        .with_prompt("Bearer token")
        .interact()
        .map_err(prompt_err)?;
    if token.trim().is_empty() {
        return Err(CliError::Validation {
            field: "token".into(),
            reason: "token cannot be empty".into(),
        });
    }
    Ok(token)
}

/// Replace plaintext tokens so `config show` is safe to paste.
fn redacted(mut config: Config) -> Config {
    for profile in config.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some(REDACTED.into());
        }
    }
    config
}
