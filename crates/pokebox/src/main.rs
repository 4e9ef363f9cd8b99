mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pokebox_core::Session;

use crate::cli::{Cli, Command};
use crate::config::Access;
use crate::error::CliError;
use crate::output::Ui;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Shell completions need neither config nor a service
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "pokebox", &mut std::io::stdout());
            Ok(())
        }

        Command::Config(args) => commands::config_cmd::handle(args, &cli.global),

        cmd => {
            let cfg = pokebox_config::load_config()?;
            let ui = Ui::resolve(&cli.global, &cfg.defaults);
            let access = match cmd {
                Command::Catalog(_) => Access::Anonymous,
                _ => Access::Authenticated,
            };
            let session_config = config::build_session_config(&cli.global, &cfg, access)?;
            let session = Session::new(&session_config)?;

            tracing::debug!(command = ?cmd, base_url = %session_config.base_url, "dispatching command");
            commands::dispatch(cmd, session, &ui).await
        }
    }
}
