//! Reducer: pure function `(state, action) -> Option<Effect>`.
//!
//! No I/O, no clock. Anything that needs the network is returned as an
//! [`Effect`] for the session to run; its outcome comes back as a result
//! action.

use std::sync::Arc;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::{Modal, SessionState, View};

/// Apply one action to the state.
#[allow(clippy::too_many_lines)]
pub fn reduce(state: &mut SessionState, action: Action) -> Option<Effect> {
    match action {
        // ===== Intents =====
        Action::Start => enter_view(state),

        Action::SelectEntity(name) => {
            if state.modal.is_some() || state.loading.details {
                return None;
            }
            state.loading.details = true;
            state.error = None;
            Some(Effect::FetchDetails(name))
        }

        Action::RequestCatch => {
            let Some(Modal::Details(entity)) = state.modal.take() else {
                return None;
            };
            state.modal = Some(Modal::Creating {
                entity,
                pending: false,
            });
            state.form_errors = None;
            None
        }

        Action::RequestEdit(id) => {
            if state.modal.is_some() {
                return None;
            }
            let entry = state.entry(&id)?.clone();
            state.modal = Some(Modal::Editing {
                entry,
                pending: false,
            });
            state.form_errors = None;
            None
        }

        Action::RequestDelete(id) => {
            if state.modal.is_some() {
                return None;
            }
            state.modal = Some(Modal::ConfirmingDelete { id, pending: false });
            None
        }

        Action::ConfirmDelete => match &mut state.modal {
            Some(Modal::ConfirmingDelete { id, pending }) if !*pending => {
                *pending = true;
                state.error = None;
                Some(Effect::DeleteEntry(id.clone()))
            }
            _ => None,
        },

        Action::Cancel => {
            if !state.is_pending() {
                close_modal(state);
            }
            None
        }

        Action::SubmitForm(draft) => {
            let effect = match &state.modal {
                Some(Modal::Creating {
                    entity,
                    pending: false,
                }) => draft.validate().map(|entry| Effect::CreateEntry {
                    pokemon_id: entity.id,
                    entry,
                }),
                Some(Modal::Editing {
                    entry: existing,
                    pending: false,
                }) => draft.validate().map(|entry| Effect::UpdateEntry {
                    id: existing.id.clone(),
                    entry,
                }),
                _ => return None,
            };
            match effect {
                Ok(effect) => {
                    set_pending(state);
                    state.form_errors = None;
                    state.error = None;
                    Some(effect)
                }
                Err(errors) => {
                    state.form_errors = Some(errors);
                    None
                }
            }
        }

        Action::ChangePage(direction) => {
            if state.view != View::Catalog || state.loading.page {
                return None;
            }
            if state.pagination.step(direction) {
                load_page(state)
            } else {
                None
            }
        }

        Action::GoToPage(page) => {
            if state.view != View::Catalog || state.loading.page {
                return None;
            }
            if state.pagination.go_to(page) {
                load_page(state)
            } else {
                None
            }
        }

        Action::SwitchView(view) => {
            if view == state.view || !state.can_switch_view() || state.is_pending() {
                return None;
            }
            close_modal(state);
            state.view = view;
            enter_view(state)
        }

        // ===== Results =====
        Action::PageLoaded(entities) => {
            let page: Vec<_> = entities.into_iter().map(Arc::new).collect();
            state.cache.merge(page.iter().cloned());
            state.catalog_page = page;
            state.loading.page = false;
            None
        }

        Action::PageFailed(error) => {
            state.loading.page = false;
            state.error = Some(error.to_string());
            None
        }

        Action::DetailsLoaded(entity) => {
            let entity = Arc::new(entity);
            state.cache.merge([Arc::clone(&entity)]);
            state.loading.details = false;
            if state.modal.is_none() {
                state.modal = Some(Modal::Details(entity));
            }
            None
        }

        Action::DetailsFailed(error) => {
            state.loading.details = false;
            state.error = Some(error.to_string());
            None
        }

        Action::CollectionSynced(outcome) => {
            state.cache.merge(outcome.backfilled);
            state.entries = outcome.entries;
            state.loading.collection = false;
            state.error = outcome.backfill_error.as_ref().map(ToString::to_string);
            None
        }

        Action::CollectionFailed(error) => {
            state.loading.collection = false;
            state.error = Some(error.to_string());
            None
        }

        Action::EntryCreated(_) => {
            if !matches!(state.modal, Some(Modal::Creating { pending: true, .. })) {
                return None;
            }
            close_modal(state);
            start_sync(state)
        }

        Action::EntryUpdated(_) => {
            if !matches!(state.modal, Some(Modal::Editing { pending: true, .. })) {
                return None;
            }
            close_modal(state);
            start_sync(state)
        }

        Action::CreateFailed(error) | Action::UpdateFailed(error) => {
            clear_pending(state);
            state.error = Some(error.to_string());
            None
        }

        Action::EntryDeleted(_) => {
            state.modal = None;
            start_sync(state)
        }

        Action::DeleteFailed { id, error } => {
            state.modal = None;
            state.error = Some(format!("{error} (entry {id})"));
            None
        }
    }
}

// ── Transitions shared by several actions ────────────────────────────

fn enter_view(state: &mut SessionState) -> Option<Effect> {
    match state.view {
        View::Catalog => load_page(state),
        View::Collection => start_sync(state),
    }
}

fn load_page(state: &mut SessionState) -> Option<Effect> {
    state.error = None;
    match state.pagination.fetch_window() {
        Some(window) => {
            state.loading.page = true;
            Some(Effect::FetchPage(window))
        }
        None => {
            state.catalog_page.clear();
            None
        }
    }
}

fn start_sync(state: &mut SessionState) -> Option<Effect> {
    state.loading.collection = true;
    state.error = None;
    Some(Effect::SyncCollection)
}

fn close_modal(state: &mut SessionState) {
    state.modal = None;
    state.form_errors = None;
}

fn set_pending(state: &mut SessionState) {
    if let Some(Modal::Creating { pending, .. } | Modal::Editing { pending, .. }) =
        &mut state.modal
    {
        *pending = true;
    }
}

fn clear_pending(state: &mut SessionState) {
    if let Some(Modal::Creating { pending, .. } | Modal::Editing { pending, .. }) =
        &mut state.modal
    {
        *pending = false;
    }
}
