// ── In-memory stores ──

mod catalog_cache;

pub use catalog_cache::CatalogCache;
