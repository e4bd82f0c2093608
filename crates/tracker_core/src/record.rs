use std::fmt;

use crate::{CatalogId, CuratedEntry, Unmatched, WatchStatus};

pub const NO_SYNOPSIS: &str = "No synopsis available.";
pub const NOT_AVAILABLE: &str = "N/A";
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300?text=No+Image";
pub const PLACEHOLDER_THUMB: &str = "https://via.placeholder.com/64?text=No+Image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rank {
    Ranked(u32),
    #[default]
    NotAvailable,
}

impl From<Option<u32>> for Rank {
    fn from(value: Option<u32>) -> Self {
        value.map_or(Rank::NotAvailable, Rank::Ranked)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Ranked(rank) => write!(f, "{rank}"),
            Rank::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// Catalog fields of the matched candidate, already reduced to what a
/// record needs. Blank strings count as missing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogMetadata {
    pub id: String,
    pub synopsis: Option<String>,
    pub start_date: Option<String>,
    pub episode_count: Option<u32>,
    pub status: Option<String>,
    pub poster_url: Option<String>,
    pub poster_thumb_url: Option<String>,
    pub genre_ref: Option<String>,
    pub popularity_rank: Option<u32>,
    pub rating_rank: Option<u32>,
}

/// A curated entry merged with catalog metadata, or with sentinels when no
/// metadata could be obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedRecord {
    pub entry: CuratedEntry,
    /// The entry's status, defaulted to `Unwatched` when absent.
    pub watch_status: WatchStatus,
    pub catalog_id: CatalogId,
    pub synopsis: String,
    pub year: String,
    pub episode_count: String,
    pub catalog_status: String,
    pub poster_url: String,
    pub poster_thumb_url: String,
    /// Opaque reference for the genre lookup. `None` for synthetic ids.
    pub genre_ref: Option<String>,
    pub popularity_rank: Rank,
    pub rating_rank: Rank,
}

impl EnrichedRecord {
    pub fn matched(entry: CuratedEntry, meta: CatalogMetadata) -> Self {
        let catalog_id = CatalogId::from_catalog(meta.id, &entry.title);
        let year = meta
            .start_date
            .as_deref()
            .filter(|date| !date.trim().is_empty())
            .map(|date| date.chars().take(4).collect())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        // A zero episode count means the catalog does not know it yet.
        let episode_count = meta
            .episode_count
            .filter(|count| *count > 0)
            .map(|count| count.to_string())
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Self {
            watch_status: resolved_status(&entry),
            catalog_id,
            synopsis: non_blank_or(meta.synopsis, NO_SYNOPSIS),
            year,
            episode_count,
            catalog_status: non_blank_or(meta.status, NOT_AVAILABLE),
            poster_url: non_blank_or(meta.poster_url, PLACEHOLDER_POSTER),
            poster_thumb_url: non_blank_or(meta.poster_thumb_url, PLACEHOLDER_THUMB),
            genre_ref: meta.genre_ref.filter(|r| !r.trim().is_empty()),
            popularity_rank: meta.popularity_rank.into(),
            rating_rank: meta.rating_rank.into(),
            entry,
        }
    }

    /// Sentinel record for a search that yielded nothing usable.
    pub fn unmatched(entry: CuratedEntry, reason: Unmatched) -> Self {
        Self {
            watch_status: resolved_status(&entry),
            catalog_id: CatalogId::synthetic(reason, &entry.title),
            synopsis: NO_SYNOPSIS.to_string(),
            year: NOT_AVAILABLE.to_string(),
            episode_count: NOT_AVAILABLE.to_string(),
            catalog_status: NOT_AVAILABLE.to_string(),
            poster_url: PLACEHOLDER_POSTER.to_string(),
            poster_thumb_url: PLACEHOLDER_THUMB.to_string(),
            genre_ref: None,
            popularity_rank: Rank::NotAvailable,
            rating_rank: Rank::NotAvailable,
            entry,
        }
    }

    pub fn title(&self) -> &str {
        &self.entry.title
    }
}

fn resolved_status(entry: &CuratedEntry) -> WatchStatus {
    entry.watch_status.clone().unwrap_or_default()
}

fn non_blank_or(value: Option<String>, sentinel: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| sentinel.to_string())
}
