use std::collections::BTreeMap;

use tracker_core::{CatalogMetadata, EnrichedRecord, ExternalLink};

use crate::FetchError;

/// One search candidate, reduced from the catalog's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogEntry {
    pub id: String,
    pub canonical_title: Option<String>,
    /// Localized titles keyed by locale tag (`en`, `en_jp`, `ja_jp`, ...).
    pub titles: BTreeMap<String, String>,
    pub abbreviated_titles: Vec<String>,
    pub synopsis: Option<String>,
    pub start_date: Option<String>,
    pub episode_count: Option<u32>,
    pub status: Option<String>,
    pub subtype: Option<String>,
    pub poster: PosterImages,
    pub popularity_rank: Option<u32>,
    pub rating_rank: Option<u32>,
    pub genre_ref: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PosterImages {
    pub tiny: Option<String>,
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub original: Option<String>,
}

impl CatalogEntry {
    pub fn title(&self, locale: &str) -> Option<&str> {
        self.titles.get(locale).map(String::as_str)
    }

    /// Canonical title, else English, else any localized title, else the id.
    pub fn display_title(&self) -> &str {
        self.canonical_title
            .as_deref()
            .or_else(|| self.title("en"))
            .or_else(|| self.titles.values().next().map(String::as_str))
            .unwrap_or(&self.id)
    }

    pub fn metadata(&self) -> CatalogMetadata {
        let thumb = [&self.poster.tiny, &self.poster.small, &self.poster.original]
            .into_iter()
            .find_map(|image| image.clone().filter(|url| !url.trim().is_empty()));
        CatalogMetadata {
            id: self.id.clone(),
            synopsis: self.synopsis.clone(),
            start_date: self.start_date.clone(),
            episode_count: self.episode_count,
            status: self.status.clone(),
            poster_url: self.poster.large.clone(),
            poster_thumb_url: thumb,
            genre_ref: self.genre_ref.clone(),
            popularity_rank: self.popularity_rank,
            rating_rank: self.rating_rank,
        }
    }
}

/// Text-searchable anime catalog.
#[async_trait::async_trait]
pub trait Catalog: Send + Sync {
    /// Free-text title search. `limit` caps the page size when given.
    async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<CatalogEntry>, FetchError>;

    /// Genre names behind a reference taken from a search result.
    async fn genres(&self, reference: &str) -> Result<Vec<String>, FetchError>;
}

/// Source of external and streaming links for a record.
#[async_trait::async_trait]
pub trait LinkProvider: Send + Sync {
    async fn external_links(&self, record: &EnrichedRecord) -> Result<Vec<ExternalLink>, FetchError>;
}
