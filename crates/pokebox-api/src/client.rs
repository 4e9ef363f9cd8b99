// Hand-crafted async HTTP client for the Pokebox API.
//
// Base path: /api/
// Auth: `Authorization: Bearer <token>` on every `box/*` call; catalog
// reads are public.

use reqwest::header::HeaderValue;
use reqwest::{Method, RequestBuilder, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{Error, Operation};
use crate::transport::TransportConfig;
use crate::types::{BoxEntryResponse, InsertBoxEntry, PokemonResponse, UpdateBoxEntry};

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
}

/// Whether a request carries the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Public,
    Bearer,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the Pokebox catalog and Box API.
///
/// Every public method issues exactly one HTTP round trip and never
/// retries. Cloning is cheap: the underlying `reqwest::Client` is
/// reference-counted.
#[derive(Clone)]
pub struct PokeboxClient {
    http: reqwest::Client,
    base_url: Url,
    token: SecretString,
}

impl std::fmt::Debug for PokeboxClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PokeboxClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl PokeboxClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL, bearer token and transport config.
    pub fn new(
        base_url: &str,
        token: SecretString,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http, token)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(
        base_url: &str,
        http: reqwest::Client,
        token: SecretString,
    ) -> Result<Self, Error> {
        HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|e| Error::InvalidToken(e.to_string()))?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Normalize the base URL so it always ends with `/api/`.
    ///
    /// `https://host` and `https://host/api` both become `https://host/api/`.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(raw.to_owned()));
        }

        let path = url.path().trim_end_matches('/').to_owned();
        if path.ends_with("/api") {
            url.set_path(&format!("{path}/"));
        } else {
            url.set_path(&format!("{path}/api/"));
        }

        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append percent-encoded path segments to the base URL.
    ///
    /// A trailing `""` segment produces a trailing slash (`box/`).
    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, access: Access) -> RequestBuilder {
        debug!("{method} {url}");
        let builder = self.http.request(method, url);
        match access {
            Access::Public => builder,
            Access::Bearer => builder.bearer_auth(self.token.expose_secret()),
        }
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        op: Operation,
        segments: &[&str],
        access: Access,
    ) -> Result<T, Error> {
        let url = self.endpoint(segments)?;
        let resp = send(op, self.request(Method::GET, url, access)).await?;
        handle_response(op, resp).await
    }

    async fn get_with_params<T: DeserializeOwned>(
        &self,
        op: Operation,
        segments: &[&str],
        params: &[(&str, String)],
    ) -> Result<T, Error> {
        let url = self.endpoint(segments)?;
        debug!("params={params:?}");
        let resp = send(op, self.request(Method::GET, url, Access::Public).query(params)).await?;
        handle_response(op, resp).await
    }

    async fn send_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        op: Operation,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.endpoint(segments)?;
        let resp = send(op, self.request(method, url, Access::Bearer).json(body)).await?;
        handle_response(op, resp).await
    }

    async fn delete(&self, op: Operation, segments: &[&str]) -> Result<(), Error> {
        let url = self.endpoint(segments)?;
        let resp = send(op, self.request(Method::DELETE, url, Access::Bearer)).await?;
        handle_empty(resp).await
    }

    // ━━ Public API ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

    // ── Catalog ──────────────────────────────────────────────────────

    /// `GET pokemon/?limit&offset`: one page of the catalog.
    pub async fn list_pokemon(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<PokemonResponse>, Error> {
        self.get_with_params(
            Operation::ListPokemon,
            &["pokemon", ""],
            &[("limit", limit.to_string()), ("offset", offset.to_string())],
        )
        .await
    }

    /// `GET pokemon/{name}`: a single catalog record by name.
    pub async fn get_pokemon(&self, name: &str) -> Result<PokemonResponse, Error> {
        self.get(Operation::GetPokemon, &["pokemon", name], Access::Public)
            .await
    }

    // ── Box ──────────────────────────────────────────────────────────

    /// `GET box/`: identifiers of every Box entry.
    pub async fn list_box_ids(&self) -> Result<Vec<String>, Error> {
        self.get(Operation::ListBoxIds, &["box", ""], Access::Bearer)
            .await
    }

    /// `GET box/{id}`
    pub async fn get_box_entry(&self, id: &str) -> Result<BoxEntryResponse, Error> {
        self.get(Operation::GetBoxEntry, &["box", id], Access::Bearer)
            .await
    }

    /// `POST box/`
    pub async fn create_box_entry(
        &self,
        entry: &InsertBoxEntry,
    ) -> Result<BoxEntryResponse, Error> {
        self.send_json(Operation::CreateBoxEntry, Method::POST, &["box", ""], entry)
            .await
    }

    /// `PUT box/{id}`
    pub async fn update_box_entry(
        &self,
        id: &str,
        entry: &UpdateBoxEntry,
    ) -> Result<BoxEntryResponse, Error> {
        self.send_json(Operation::UpdateBoxEntry, Method::PUT, &["box", id], entry)
            .await
    }

    /// `DELETE box/{id}`
    pub async fn delete_box_entry(&self, id: &str) -> Result<(), Error> {
        self.delete(Operation::DeleteBoxEntry, &["box", id]).await
    }
}

// ── Response handling ────────────────────────────────────────────────

async fn send(op: Operation, builder: RequestBuilder) -> Result<reqwest::Response, Error> {
    builder
        .send()
        .await
        .map_err(|source| Error::Transport {
            operation: op,
            source,
        })
}

async fn handle_response<T: DeserializeOwned>(
    op: Operation,
    resp: reqwest::Response,
) -> Result<T, Error> {
    let status = resp.status();
    if !status.is_success() {
        return Err(parse_error(status, resp).await);
    }

    let body = resp.text().await.map_err(|source| Error::Transport {
        operation: op,
        source,
    })?;
    serde_json::from_str(&body).map_err(|e| {
        let preview: String = body.chars().take(200).collect();
        Error::Deserialization {
            message: format!("{e} (body preview: {preview:?})"),
            body,
        }
    })
}

async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
    let status = resp.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(parse_error(status, resp).await)
    }
}

async fn parse_error(status: StatusCode, resp: reqwest::Response) -> Error {
    let raw = resp.text().await.unwrap_or_default();
    classify(status, error_message(status, &raw))
}

/// Pick the human-readable message for a failed response.
///
/// The JSON body's `message` wins. reqwest does not surface the server's
/// reason phrase, so the fixed per-status defaults come next and the
/// status code's canonical text is the last resort.
fn error_message(status: StatusCode, raw: &str) -> String {
    serde_json::from_str::<ErrorResponse>(raw)
        .ok()
        .and_then(|err| err.message)
        .filter(|message| !message.trim().is_empty())
        .or_else(|| default_message(status).map(str::to_owned))
        .or_else(|| status.canonical_reason().map(str::to_owned))
        .unwrap_or_else(|| "Error occurred".to_owned())
}

fn default_message(status: StatusCode) -> Option<&'static str> {
    match status {
        StatusCode::UNAUTHORIZED => Some("Invalid or missing authentication token"),
        StatusCode::NOT_FOUND => Some("Entry does not exist"),
        StatusCode::BAD_REQUEST => Some("Invalid request"),
        StatusCode::INTERNAL_SERVER_ERROR => Some("Internal server error"),
        _ => None,
    }
}

fn classify(status: StatusCode, message: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED => Error::Unauthorized { message },
        StatusCode::NOT_FOUND => Error::NotFound { message },
        StatusCode::BAD_REQUEST => Error::BadRequest { message },
        StatusCode::INTERNAL_SERVER_ERROR => Error::Server { message },
        other => Error::Status {
            status: other.as_u16(),
            message,
        },
    }
}
