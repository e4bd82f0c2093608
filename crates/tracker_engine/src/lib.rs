//! Tracker engine: catalog lookups, enrichment and detail loading.
mod catalog;
mod detail;
mod engine;
mod enrich;
mod fetch;
mod franchise;
mod jikan;
mod kitsu;
mod matcher;
mod types;

pub use catalog::{Catalog, CatalogEntry, LinkProvider, PosterImages};
pub use detail::{load_detail, lookup_genres, lookup_links, ChannelDetailSink, DetailEvent, DetailSink};
pub use engine::{EngineConfig, EngineHandle};
pub use enrich::{enrich_all, enrich_entry, EnrichmentMode};
pub use fetch::{FetchSettings, JsonFetcher};
pub use franchise::{aggregate_franchise, load_franchise, FRANCHISE_SEARCH_LIMIT, FRANCHISE_SUBTYPES};
pub use jikan::{JikanLinks, JIKAN_BASE_URL};
pub use kitsu::{KitsuCatalog, KitsuStreamingLinks, KITSU_BASE_URL};
pub use matcher::best_match;
pub use tracker_core::LinkSource;
pub use types::{EngineError, EngineEvent, FailureKind, FetchError};
