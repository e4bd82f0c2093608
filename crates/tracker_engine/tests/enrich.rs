mod common;

use std::time::{Duration, Instant};

use common::{titled, FakeCatalog};
use pretty_assertions::assert_eq;
use tracker_core::{
    CuratedEntry, Rank, WatchStatus, ERROR_PREFIX, FALLBACK_PREFIX, NOT_AVAILABLE, NO_SYNOPSIS,
    PLACEHOLDER_POSTER, PLACEHOLDER_THUMB,
};
use tracker_engine::{enrich_all, enrich_entry, CatalogEntry, EnrichmentMode, FailureKind, PosterImages};

fn init_logging() {
    tracker_logging::initialize_for_tests();
}

#[tokio::test]
async fn matched_entry_merges_catalog_fields() {
    init_logging();
    let found = CatalogEntry {
        synopsis: Some("A hunter explores.".to_string()),
        start_date: Some("2011-10-02".to_string()),
        episode_count: Some(148),
        status: Some("finished".to_string()),
        poster: PosterImages {
            small: Some("https://img.test/small.jpg".to_string()),
            large: Some("https://img.test/large.jpg".to_string()),
            ..PosterImages::default()
        },
        popularity_rank: Some(30),
        rating_rank: Some(4),
        genre_ref: Some("https://kitsu.test/anime/6448/genres".to_string()),
        ..titled("6448", "Hunter x Hunter (2011)")
    };
    let catalog = FakeCatalog::new().with_results(
        "Hunter x Hunter (2011)",
        vec![titled("1", "Hunter x Hunter"), found],
    );

    let record = enrich_entry(&catalog, CuratedEntry::titled("Hunter x Hunter (2011)")).await;

    assert_eq!(record.catalog_id.as_str(), "6448");
    assert_eq!(record.synopsis, "A hunter explores.");
    assert_eq!(record.year, "2011");
    assert_eq!(record.episode_count, "148");
    assert_eq!(record.catalog_status, "finished");
    assert_eq!(record.poster_url, "https://img.test/large.jpg");
    assert_eq!(record.poster_thumb_url, "https://img.test/small.jpg");
    assert_eq!(record.popularity_rank, Rank::Ranked(30));
    assert_eq!(record.rating_rank, Rank::Ranked(4));
    assert_eq!(
        record.genre_ref.as_deref(),
        Some("https://kitsu.test/anime/6448/genres")
    );
    assert_eq!(record.watch_status, WatchStatus::Unwatched);
}

#[tokio::test]
async fn zero_candidates_yield_fallback_sentinels() {
    init_logging();
    let catalog = FakeCatalog::new();

    let record = enrich_entry(&catalog, CuratedEntry::titled("Made Up Show")).await;

    assert_eq!(record.catalog_id.as_str(), "fallback-Made-Up-Show");
    assert!(record.catalog_id.as_str().starts_with(FALLBACK_PREFIX));
    assert_eq!(record.synopsis, NO_SYNOPSIS);
    assert_eq!(record.year, NOT_AVAILABLE);
    assert_eq!(record.episode_count, NOT_AVAILABLE);
    assert_eq!(record.catalog_status, NOT_AVAILABLE);
    assert_eq!(record.poster_url, PLACEHOLDER_POSTER);
    assert_eq!(record.poster_thumb_url, PLACEHOLDER_THUMB);
    assert_eq!(record.genre_ref, None);
    assert_eq!(record.popularity_rank, Rank::NotAvailable);
    assert_eq!(record.rating_rank, Rank::NotAvailable);
}

#[tokio::test]
async fn search_failure_yields_error_token_with_same_sentinels() {
    init_logging();
    let catalog = FakeCatalog::new().with_failure("Made Up Show", FailureKind::Timeout);
    let entry = CuratedEntry {
        watch_status: Some(WatchStatus::Watched),
        ..CuratedEntry::titled("Made Up Show")
    };

    let record = enrich_entry(&catalog, entry.clone()).await;
    let fallback = enrich_entry(&FakeCatalog::new(), entry).await;

    assert!(record.catalog_id.as_str().starts_with(ERROR_PREFIX));
    assert_ne!(record.catalog_id, fallback.catalog_id);
    assert_eq!(record.synopsis, fallback.synopsis);
    assert_eq!(record.year, fallback.year);
    assert_eq!(record.poster_url, fallback.poster_url);
    assert_eq!(record.genre_ref, fallback.genre_ref);
    assert_eq!(record.watch_status, WatchStatus::Watched);
}

#[tokio::test]
async fn every_entry_yields_exactly_one_record_with_non_empty_id() {
    init_logging();
    let catalog = FakeCatalog::new()
        .with_results("Found", vec![titled("10", "Found")])
        .with_failure("Broken", FailureKind::Network)
        .with_results("Blank Id", vec![titled("", "Blank Id")]);
    let entries = vec![
        CuratedEntry::titled("Found"),
        CuratedEntry::titled("Missing"),
        CuratedEntry::titled("Broken"),
        CuratedEntry::titled("Blank Id"),
        CuratedEntry::titled(""),
        CuratedEntry::titled("Found"),
    ];

    let records = enrich_all(&catalog, entries.clone(), EnrichmentMode::Concurrent).await;

    assert_eq!(records.len(), entries.len());
    assert!(records.iter().all(|r| !r.catalog_id.as_str().is_empty()));
    let mut titles: Vec<_> = records.iter().map(|r| r.title().to_string()).collect();
    let mut expected: Vec<_> = entries.iter().map(|e| e.title.clone()).collect();
    titles.sort();
    expected.sort();
    assert_eq!(titles, expected);
    assert!(records
        .iter()
        .filter(|r| r.title() == "Broken")
        .all(|r| r.catalog_id.as_str().starts_with(ERROR_PREFIX)));
    assert_eq!(catalog.searches().len(), entries.len());
}

#[tokio::test]
async fn throttled_mode_searches_sequentially_with_delay() {
    init_logging();
    let catalog = FakeCatalog::new();
    let entries = vec![
        CuratedEntry::titled("one"),
        CuratedEntry::titled("two"),
        CuratedEntry::titled("three"),
    ];
    let mode = EnrichmentMode::Throttled {
        delay: Duration::from_millis(20),
    };

    let started = Instant::now();
    let records = enrich_all(&catalog, entries, mode).await;

    assert!(started.elapsed() >= Duration::from_millis(40));
    let order: Vec<_> = records.iter().map(|r| r.title()).collect();
    assert_eq!(order, vec!["one", "two", "three"]);
    let searched: Vec<_> = catalog.searches().into_iter().map(|(q, _)| q).collect();
    assert_eq!(searched, vec!["one", "two", "three"]);
}
