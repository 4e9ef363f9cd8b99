// pokebox-api: Async Rust client for the Pokebox catalog and Box HTTP API

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

pub use client::PokeboxClient;
pub use error::{Error, Operation};
pub use transport::{TlsMode, TransportConfig};
