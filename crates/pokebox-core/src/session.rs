// ── Session driver ──
//
// Owns the client and the state value. Every dispatched action runs
// through the reducer; any effect it returns is executed here and its
// result fed back in, until the reducer has nothing left to do. Each
// transition publishes a fresh snapshot on a watch channel.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, warn};

use pokebox_api::PokeboxClient;
use pokebox_api::transport::{TlsMode, TransportConfig};

use crate::action::Action;
use crate::config::{SessionConfig, TlsVerification};
use crate::effect::Effect;
use crate::error::CoreError;
use crate::model::CatalogEntity;
use crate::pagination::Pagination;
use crate::reducer::reduce;
use crate::state::SessionState;
use crate::sync;

pub struct Session {
    client: PokeboxClient,
    state: SessionState,
    snapshot: watch::Sender<Arc<SessionState>>,
    last_failure: Option<CoreError>,
}

impl Session {
    /// Build the HTTP client from configuration. Does not touch the network.
    pub fn new(config: &SessionConfig) -> Result<Self, CoreError> {
        let transport = build_transport(config);
        let client = PokeboxClient::new(config.base_url.as_str(), config.token.clone(), &transport)?;
        Ok(Self::with_client(client, config.pagination()))
    }

    pub fn with_client(client: PokeboxClient, pagination: Pagination) -> Self {
        let state = SessionState::new(pagination);
        let (snapshot, _) = watch::channel(Arc::new(state.clone()));
        Self {
            client,
            state,
            snapshot,
            last_failure: None,
        }
    }

    pub fn client(&self) -> &PokeboxClient {
        &self.client
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Typed error behind the most recent failed effect of the last
    /// `dispatch`. The state's error slot holds only its message.
    pub fn last_failure(&self) -> Option<&CoreError> {
        self.last_failure.as_ref()
    }

    /// Current state as a shared, immutable snapshot.
    pub fn snapshot(&self) -> Arc<SessionState> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshots published after every transition.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SessionState>> {
        self.snapshot.subscribe()
    }

    /// Apply an action and run every effect it leads to.
    ///
    /// Returns once the state is quiescent: no fetch or mutation is left
    /// in flight.
    pub async fn dispatch(&mut self, action: Action) {
        self.last_failure = None;
        let mut next = Some(action);
        while let Some(action) = next.take() {
            if let Some(error) = action.failure() {
                self.last_failure = Some(error.clone());
            }
            let effect = reduce(&mut self.state, action);
            self.publish();
            if let Some(effect) = effect {
                next = Some(self.run(effect).await);
            }
        }
    }

    fn publish(&self) {
        self.snapshot.send_replace(Arc::new(self.state.clone()));
    }

    async fn run(&self, effect: Effect) -> Action {
        debug!(?effect, "running effect");
        match effect {
            Effect::FetchPage(window) => {
                match self.client.list_pokemon(window.limit, window.offset).await {
                    Ok(page) => {
                        Action::PageLoaded(page.into_iter().map(CatalogEntity::from).collect())
                    }
                    Err(e) => {
                        warn!(error = %e, offset = window.offset, "catalog page fetch failed");
                        Action::PageFailed(e.into())
                    }
                }
            }
            Effect::FetchDetails(name) => match self.client.get_pokemon(&name).await {
                Ok(pokemon) => Action::DetailsLoaded(pokemon.into()),
                Err(e) => {
                    warn!(error = %e, %name, "details fetch failed");
                    Action::DetailsFailed(e.into())
                }
            },
            Effect::SyncCollection => {
                match sync::sync_collection(&self.client, &self.state.cache).await {
                    Ok(outcome) => {
                        if let Some(e) = &outcome.backfill_error {
                            warn!(error = %e, "catalog backfill failed");
                        }
                        Action::CollectionSynced(outcome)
                    }
                    Err(e) => {
                        warn!(error = %e, "collection sync failed");
                        Action::CollectionFailed(e)
                    }
                }
            }
            Effect::CreateEntry { pokemon_id, entry } => {
                match sync::create_entry(&self.client, pokemon_id, entry, Utc::now()).await {
                    Ok(created) => Action::EntryCreated(created),
                    Err(e) => {
                        warn!(error = %e, %pokemon_id, "create failed");
                        Action::CreateFailed(e)
                    }
                }
            }
            Effect::UpdateEntry { id, entry } => {
                match sync::update_entry(&self.client, &id, entry).await {
                    Ok(updated) => Action::EntryUpdated(updated),
                    Err(e) => {
                        warn!(error = %e, %id, "update failed");
                        Action::UpdateFailed(e)
                    }
                }
            }
            Effect::DeleteEntry(id) => match sync::delete_entry(&self.client, &id).await {
                Ok(()) => Action::EntryDeleted(id),
                Err(error) => {
                    warn!(%error, %id, "delete failed");
                    Action::DeleteFailed { id, error }
                }
            },
        }
    }
}

fn build_transport(config: &SessionConfig) -> TransportConfig {
    TransportConfig {
        tls: tls_to_transport(&config.tls),
        timeout: config.timeout,
    }
}

fn tls_to_transport(tls: &TlsVerification) -> TlsMode {
    match tls {
        TlsVerification::SystemDefaults => TlsMode::System,
        TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
        TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
    }
}
