//! Clap derive structures for the `pokebox` CLI.
//!
//! Also compiled by `build.rs` for man page generation, so this file may
//! only depend on clap and clap_complete.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// pokebox -- browse the Pokémon catalog and manage your Box
#[derive(Debug, Parser)]
#[command(
    name = "pokebox",
    version,
    about = "Browse the Pokémon catalog and manage your Box",
    long_about = "Browse a paginated Pokémon catalog and keep a personal Box of \
        caught Pokémon on a remote pokebox service.\n\n\
        Catalog reads are anonymous; Box commands send the configured bearer token.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Service profile to use
    #[arg(long, short = 'p', env = "POKEBOX_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Service base URL (overrides profile)
    #[arg(long, env = "POKEBOX_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Bearer token for Box calls (overrides profile)
    #[arg(long, env = "POKEBOX_TOKEN", global = true, hide_env = true)]
    pub token: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "POKEBOX_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "POKEBOX_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "POKEBOX_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the Pokémon catalog
    #[command(alias = "cat")]
    Catalog(CatalogArgs),

    /// Manage the Pokémon in your Box
    #[command(name = "box", alias = "b")]
    Box(BoxArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Catalog ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// List one page of the catalog
    #[command(alias = "ls")]
    List {
        /// Page number, starting at 1
        #[arg(
            long,
            short = 'P',
            default_value = "1",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        page: u32,
    },

    /// Show full details for one Pokémon
    Show {
        /// Pokémon name (e.g. "pikachu", "mr mime")
        name: String,
    },
}

// ── Box ─────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BoxArgs {
    #[command(subcommand)]
    pub command: BoxCommand,
}

#[derive(Debug, Subcommand)]
pub enum BoxCommand {
    /// List every entry in the Box
    #[command(alias = "ls")]
    List,

    /// Catch a Pokémon: add a new Box entry
    #[command(alias = "catch")]
    Add {
        /// Pokémon name
        name: String,

        /// Where it was caught
        #[arg(long, short = 'l')]
        location: String,

        /// Level at capture (1-100)
        #[arg(long, allow_negative_numbers = true)]
        level: i64,

        /// Free-form notes
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Edit an existing Box entry
    Edit {
        /// Entry ID (see `pokebox box list`)
        id: String,

        #[arg(long, short = 'l')]
        location: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        level: Option<i64>,

        /// Replace the notes; pass an empty string to clear them
        #[arg(long, short = 'n')]
        notes: Option<String>,
    },

    /// Release a Pokémon: delete a Box entry
    #[command(alias = "rm", alias = "release")]
    Delete {
        /// Entry ID (see `pokebox box list`)
        id: String,
    },
}

// ── Config ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive setup wizard
    Init,

    /// Show the resolved configuration (tokens redacted)
    Show,

    /// Print the config file path
    Path,

    /// Store a bearer token in the system keyring
    SetToken {
        /// Token value (prompted for when omitted)
        #[arg(long)]
        token: Option<String>,
    },
}

// ── Completions ─────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
