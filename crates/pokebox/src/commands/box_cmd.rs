//! Box command handlers.

use serde::Serialize;
use tabled::Tabled;

use pokebox_core::{
    Action, CollectionEntry, CollectionRow, CoreError, EntryDraft, EntryId, Modal, Session, View,
};

use crate::cli::{BoxArgs, BoxCommand};
use crate::error::CliError;
use crate::output::{self, Ui};

use super::util;

// ── Rows ────────────────────────────────────────────────────────────

/// Serialized form of a Box entry: the stored record plus the resolved
/// catalog name.
#[derive(Serialize)]
struct BoxItem<'a> {
    #[serde(flatten)]
    entry: &'a CollectionEntry,
    pokemon: Option<&'a str>,
}

impl<'a> From<CollectionRow<'a>> for BoxItem<'a> {
    fn from(row: CollectionRow<'a>) -> Self {
        Self {
            entry: row.entry,
            pokemon: row.entity.map(|e| e.name.as_str()),
        }
    }
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Pokémon")]
    pokemon: String,
    #[tabled(rename = "Lv")]
    level: u8,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Caught")]
    caught: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl From<&BoxItem<'_>> for EntryRow {
    fn from(item: &BoxItem<'_>) -> Self {
        let e = item.entry;
        Self {
            id: e.id.to_string(),
            pokemon: item
                .pokemon
                .map_or_else(|| format!("#{}", e.pokemon_id), str::to_owned),
            level: e.level,
            location: e.location.clone(),
            caught: e.created_at.format("%Y-%m-%d %H:%M").to_string(),
            notes: e.notes.clone().unwrap_or_default(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(mut session: Session, args: BoxArgs, ui: &Ui) -> Result<(), CliError> {
    match args.command {
        BoxCommand::List => {
            load_collection(&mut session).await?;

            let items: Vec<BoxItem<'_>> = session
                .state()
                .collection_rows()
                .into_iter()
                .map(BoxItem::from)
                .collect();
            let out = output::render_list(
                ui.format,
                &items,
                |i| EntryRow::from(i),
                |i| i.entry.id.to_string(),
            )?;
            output::print_output(&out, ui.quiet);
            if items.is_empty() {
                ui.note("The Box is empty. Catch one with: pokebox box add <name>");
            }
            Ok(())
        }

        BoxCommand::Add {
            name,
            location,
            level,
            notes,
        } => {
            super::catalog::select(&mut session, &name).await?;
            session.dispatch(Action::RequestCatch).await;
            if !matches!(session.state().modal, Some(Modal::Creating { .. })) {
                return Err(super::catalog::pokemon_not_found(name));
            }

            let mut draft = EntryDraft::new(location, level);
            draft.notes = notes;
            session.dispatch(Action::SubmitForm(draft)).await;
            util::check(&session)?;

            ui.note(&format!("Caught {name}"));
            Ok(())
        }

        BoxCommand::Edit {
            id,
            location,
            level,
            notes,
        } => {
            load_collection(&mut session).await?;

            let id = EntryId::from(id);
            let Some(existing) = session.state().entry(&id) else {
                return Err(entry_not_found(&id));
            };
            let mut draft = EntryDraft::from_entry(existing);
            if let Some(location) = location {
                draft.location = location;
            }
            if let Some(level) = level {
                draft.level = level;
            }
            if notes.is_some() {
                draft.notes = notes;
            }

            session.dispatch(Action::RequestEdit(id.clone())).await;
            session.dispatch(Action::SubmitForm(draft)).await;
            util::check(&session)?;

            ui.note(&format!("Updated entry {id}"));
            Ok(())
        }

        BoxCommand::Delete { id } => {
            let id = EntryId::from(id);
            session.dispatch(Action::RequestDelete(id.clone())).await;

            if !util::confirm(&format!("Release entry '{id}' from the Box?"), ui.yes)? {
                session.dispatch(Action::Cancel).await;
                ui.note("Cancelled");
                return Ok(());
            }
            session.dispatch(Action::ConfirmDelete).await;
            if matches!(session.last_failure(), Some(CoreError::NotFound { .. })) {
                return Err(entry_not_found(&id));
            }
            util::check(&session)?;

            ui.note(&format!("Released entry {id}"));
            Ok(())
        }
    }
}

async fn load_collection(session: &mut Session) -> Result<(), CliError> {
    session.dispatch(Action::SwitchView(View::Collection)).await;
    util::check(session)
}

fn entry_not_found(id: &EntryId) -> CliError {
    CliError::NotFound {
        resource_type: "Box entry".into(),
        identifier: id.to_string(),
        list_command: "box list".into(),
    }
}
