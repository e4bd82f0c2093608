use std::sync::mpsc;

use tracker_core::{EnrichedRecord, ExternalLink, FranchiseInfo, SelectionToken};
use tracker_logging::{tracker_debug, tracker_warn};

use crate::catalog::{Catalog, LinkProvider};
use crate::franchise::load_franchise;
use crate::{EngineEvent, FetchError};

/// One resolved section of a selection's detail, tagged with its selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    Genres {
        token: SelectionToken,
        genres: Vec<String>,
    },
    Links {
        token: SelectionToken,
        links: Vec<ExternalLink>,
    },
    Franchise {
        token: SelectionToken,
        result: Result<FranchiseInfo, FetchError>,
    },
}

pub trait DetailSink: Send + Sync {
    fn emit(&self, event: DetailEvent);
}

pub struct ChannelDetailSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelDetailSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl DetailSink for ChannelDetailSink {
    fn emit(&self, event: DetailEvent) {
        let _ = self.tx.send(EngineEvent::Detail(event));
    }
}

/// Runs the genre, link and franchise lookups for one selection side by side.
/// Each section is emitted as soon as it resolves; there is no joint result.
pub async fn load_detail(
    catalog: &dyn Catalog,
    link_provider: &dyn LinkProvider,
    token: SelectionToken,
    record: &EnrichedRecord,
    sink: &dyn DetailSink,
) {
    let genres = async {
        let genres = lookup_genres(catalog, record).await;
        sink.emit(DetailEvent::Genres { token, genres });
    };
    let external = async {
        let links = lookup_links(link_provider, record).await;
        sink.emit(DetailEvent::Links { token, links });
    };
    let franchise = async {
        let result = load_franchise(catalog, record.title()).await;
        if let Err(err) = &result {
            tracker_warn!("franchise lookup for {:?} failed: {}", record.title(), err);
        }
        sink.emit(DetailEvent::Franchise { token, result });
    };
    futures_util::join!(genres, external, franchise);
}

/// Genre names for `record`; empty for synthetic ids, missing references and
/// failed lookups.
pub async fn lookup_genres(catalog: &dyn Catalog, record: &EnrichedRecord) -> Vec<String> {
    if record.catalog_id.is_synthetic() {
        return Vec::new();
    }
    let Some(reference) = record.genre_ref.as_deref() else {
        return Vec::new();
    };
    match catalog.genres(reference).await {
        Ok(genres) => genres,
        Err(err) => {
            tracker_warn!("genre lookup for {} failed: {}", record.catalog_id, err);
            Vec::new()
        }
    }
}

pub async fn lookup_links(provider: &dyn LinkProvider, record: &EnrichedRecord) -> Vec<ExternalLink> {
    match provider.external_links(record).await {
        Ok(links) => {
            tracker_debug!("{} external links for {:?}", links.len(), record.title());
            links
        }
        Err(err) => {
            tracker_warn!("link lookup for {:?} failed: {}", record.title(), err);
            Vec::new()
        }
    }
}
