//! Catalog command handlers.

use std::fmt::Write as _;
use std::sync::Arc;

use tabled::Tabled;

use pokebox_core::{Action, CatalogEntity, CoreError, Modal, Session};

use crate::cli::{CatalogArgs, CatalogCommand, OutputFormat};
use crate::error::CliError;
use crate::output::{self, Ui};

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct EntityRow {
    #[tabled(rename = "#")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Types")]
    types: String,
    #[tabled(rename = "Total")]
    total: String,
}

impl EntityRow {
    fn new(e: &Arc<CatalogEntity>, color: bool) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            types: output::type_badges(&e.types, color),
            total: e.stats.total().to_string(),
        }
    }
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Stat")]
    stat: &'static str,
    #[tabled(rename = "Value")]
    value: u32,
}

#[derive(Tabled)]
struct MoveRow {
    #[tabled(rename = "Move")]
    name: String,
    #[tabled(rename = "Type")]
    move_type: String,
    #[tabled(rename = "Power")]
    power: String,
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(mut session: Session, args: CatalogArgs, ui: &Ui) -> Result<(), CliError> {
    match args.command {
        CatalogCommand::List { page } => {
            session.dispatch(Action::GoToPage(page)).await;
            util::check(&session)?;

            let state = session.state();
            let out = output::render_list(
                ui.format,
                &state.catalog_page,
                |e| EntityRow::new(e, ui.color),
                |e| e.name.clone(),
            )?;
            output::print_output(&out, ui.quiet);

            let pagination = &state.pagination;
            if state.catalog_page.is_empty() {
                ui.note(&format!(
                    "Page {} is past the end of the catalog ({} pages)",
                    pagination.page(),
                    pagination.page_count()
                ));
            } else if ui.format == OutputFormat::Table {
                ui.note(&output::dim(
                    &format!("Page {} of {}", pagination.page(), pagination.page_count()),
                    ui.color,
                ));
            }
            Ok(())
        }

        CatalogCommand::Show { name } => {
            select(&mut session, &name).await?;

            let Some(Modal::Details(entity)) = &session.state().modal else {
                return Err(pokemon_not_found(name));
            };
            let out = output::render_single(
                ui.format,
                entity.as_ref(),
                |e| detail(e, ui.color),
                |e| e.name.clone(),
            )?;
            output::print_output(&out, ui.quiet);
            Ok(())
        }
    }
}

/// Open the details modal for `name`, fetching the record by name.
pub async fn select(session: &mut Session, name: &str) -> Result<(), CliError> {
    session.dispatch(Action::SelectEntity(name.to_owned())).await;
    if matches!(session.last_failure(), Some(CoreError::NotFound { .. })) {
        return Err(pokemon_not_found(name.to_owned()));
    }
    util::check(session)
}

pub fn pokemon_not_found(name: String) -> CliError {
    CliError::NotFound {
        resource_type: "Pokémon".into(),
        identifier: name,
        list_command: "catalog list".into(),
    }
}

// ── Detail view ─────────────────────────────────────────────────────

fn detail(e: &CatalogEntity, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}  {}", e.id, e.name, output::type_badges(&e.types, color));
    if !e.description.is_empty() {
        let _ = writeln!(out, "{}", output::dim(&e.description, color));
    }
    out.push('\n');

    let s = e.stats;
    let stats = [
        StatRow { stat: "HP", value: s.hp },
        StatRow { stat: "Attack", value: s.attack },
        StatRow { stat: "Defense", value: s.defense },
        StatRow { stat: "Sp. Atk", value: s.special_attack },
        StatRow { stat: "Sp. Def", value: s.special_defense },
        StatRow { stat: "Speed", value: s.speed },
        StatRow { stat: "Total", value: s.total() },
    ];
    out.push_str(&output::render_table(&stats));

    if !e.moves.is_empty() {
        let moves: Vec<MoveRow> = e
            .moves
            .iter()
            .map(|m| MoveRow {
                name: m.name.clone(),
                move_type: output::type_badges(std::slice::from_ref(&m.move_type), color),
                power: m.power.map_or_else(|| "-".into(), |p| p.to_string()),
            })
            .collect();
        out.push('\n');
        out.push_str(&output::render_table(&moves));
    }

    let _ = write!(out, "\n{}", output::dim(&format!("Sprite: {}", e.sprites.front), color));
    out
}
