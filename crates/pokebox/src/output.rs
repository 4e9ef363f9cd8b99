//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;
use tabled::{Table, Tabled, settings::Style};

use pokebox_config::Defaults;
use pokebox_core::PokemonType;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

/// Presentation settings resolved from flags and config defaults.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    pub format: OutputFormat,
    pub color: bool,
    pub quiet: bool,
    pub yes: bool,
}

impl Ui {
    /// Flags win; config `[defaults]` fill the gaps.
    pub fn resolve(global: &GlobalOpts, defaults: &Defaults) -> Self {
        use clap::ValueEnum;

        let format = global
            .output
            .or_else(|| OutputFormat::from_str(&defaults.output, true).ok())
            .unwrap_or(OutputFormat::Table);
        let color = global
            .color
            .or_else(|| ColorMode::from_str(&defaults.color, true).ok())
            .unwrap_or(ColorMode::Auto);

        Self {
            format,
            color: should_color(color),
            quiet: global.quiet,
            yes: global.yes,
        }
    }

    /// Status line on stderr, unless `--quiet`.
    pub fn note(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

// ── Color helpers ────────────────────────────────────────────────────

pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
    }
}

/// Type names joined with "/", each tinted with its catalog color.
pub fn type_badges(types: &[PokemonType], color: bool) -> String {
    types
        .iter()
        .map(|t| match parse_hex(&t.color) {
            Some((r, g, b)) if color => t.name.truecolor(r, g, b).bold().to_string(),
            _ => t.name.clone(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

pub fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_owned()
    }
}

/// `#RRGGBB` or `RRGGBB`.
fn parse_hex(raw: &str) -> Option<(u8, u8, u8)> {
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
pub fn render_list<T, R>(
    format: OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(data.iter().map(&id_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// Render a single item. Table mode uses `detail_fn` for a hand-laid view.
pub fn render_single<T>(
    format: OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

pub fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Render(e.to_string()))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Render(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct NameRow {
        name: String,
    }

    fn grass() -> PokemonType {
        PokemonType {
            name: "grass".into(),
            color: "#7AC74C".into(),
        }
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex("#7AC74C"), Some((0x7A, 0xC7, 0x4C)));
        assert_eq!(parse_hex("ffffff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#fff"), None);
        assert_eq!(parse_hex("#zzzzzz"), None);
    }

    #[test]
    fn badges_without_color_are_plain() {
        let poison = PokemonType {
            name: "poison".into(),
            color: "not a color".into(),
        };
        assert_eq!(type_badges(&[grass(), poison], false), "grass/poison");
    }

    #[test]
    fn badges_with_color_carry_escape_codes() {
        let out = type_badges(&[grass()], true);
        assert!(out.contains("grass"));
        assert!(out.contains("\u{1b}["));
    }

    #[test]
    fn plain_and_json_lists() {
        let data = vec![grass()];
        let plain = render_list(
            OutputFormat::Plain,
            &data,
            |t| NameRow {
                name: t.name.clone(),
            },
            |t| t.name.clone(),
        )
        .unwrap();
        assert_eq!(plain, "grass");

        let json = render_list(
            OutputFormat::JsonCompact,
            &data,
            |t| NameRow {
                name: t.name.clone(),
            },
            |t| t.name.clone(),
        )
        .unwrap();
        assert_eq!(json, r##"[{"name":"grass","color":"#7AC74C"}]"##);
    }
}
