// ── Runtime session configuration ──
//
// Describes *where* the service lives and how to reach it. Never touches
// disk: the CLI (via pokebox-config) builds a `SessionConfig` and hands
// it in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use crate::pagination::{CATALOG_SIZE, PAGE_SIZE, Pagination};

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed local servers).
    DangerAcceptInvalid,
}

/// Configuration for one session against one service.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Service root, e.g. `http://localhost:8080`. `/api/` is appended
    /// when missing.
    pub base_url: Url,
    /// Bearer token for Box calls.
    pub token: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub timeout: Option<Duration>,
    pub page_size: u32,
    /// Known size of the remote catalog.
    pub catalog_size: u32,
}

impl SessionConfig {
    pub fn new(base_url: Url, token: SecretString) -> Self {
        Self {
            base_url,
            token,
            tls: TlsVerification::default(),
            timeout: None,
            page_size: PAGE_SIZE,
            catalog_size: CATALOG_SIZE,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::with_bounds(self.page_size, self.catalog_size)
    }
}
