#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tracker_core::{EnrichedRecord, ExternalLink};
use tracker_engine::{
    Catalog, CatalogEntry, DetailEvent, DetailSink, FailureKind, FetchError, LinkProvider,
};

/// In-memory catalog answering searches by exact query text.
#[derive(Default)]
pub struct FakeCatalog {
    results: HashMap<String, Result<Vec<CatalogEntry>, FetchError>>,
    genres: Option<Result<Vec<String>, FetchError>>,
    searches: Mutex<Vec<(String, Option<u32>)>>,
    genre_calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(mut self, query: &str, entries: Vec<CatalogEntry>) -> Self {
        self.results.insert(query.to_string(), Ok(entries));
        self
    }

    pub fn with_failure(mut self, query: &str, kind: FailureKind) -> Self {
        self.results
            .insert(query.to_string(), Err(FetchError::new(kind, "fake failure")));
        self
    }

    pub fn with_genres(mut self, genres: Result<Vec<String>, FetchError>) -> Self {
        self.genres = Some(genres);
        self
    }

    pub fn searches(&self) -> Vec<(String, Option<u32>)> {
        self.searches.lock().unwrap().clone()
    }

    pub fn genre_calls(&self) -> usize {
        self.genre_calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Catalog for FakeCatalog {
    async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<CatalogEntry>, FetchError> {
        self.searches
            .lock()
            .unwrap()
            .push((query.to_string(), limit));
        self.results.get(query).cloned().unwrap_or(Ok(Vec::new()))
    }

    async fn genres(&self, _reference: &str) -> Result<Vec<String>, FetchError> {
        self.genre_calls.fetch_add(1, Ordering::SeqCst);
        self.genres.clone().unwrap_or(Ok(Vec::new()))
    }
}

pub struct FakeLinks {
    result: Result<Vec<ExternalLink>, FetchError>,
    calls: AtomicUsize,
}

impl FakeLinks {
    pub fn new(result: Result<Vec<ExternalLink>, FetchError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LinkProvider for FakeLinks {
    async fn external_links(&self, _record: &EnrichedRecord) -> Result<Vec<ExternalLink>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DetailEvent>>,
}

impl RecordingSink {
    pub fn take(&self) -> Vec<DetailEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl DetailSink for RecordingSink {
    fn emit(&self, event: DetailEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn titled(id: &str, canonical: &str) -> CatalogEntry {
    CatalogEntry {
        id: id.to_string(),
        canonical_title: Some(canonical.to_string()),
        ..CatalogEntry::default()
    }
}
