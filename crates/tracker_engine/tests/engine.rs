mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{titled, FakeCatalog, FakeLinks};
use tracker_core::{CuratedEntry, ExternalLink};
use tracker_engine::{DetailEvent, EngineConfig, EngineEvent, EngineHandle, EnrichmentMode};

const WAIT: Duration = Duration::from_secs(5);

fn engine(catalog: FakeCatalog, links: FakeLinks) -> EngineHandle {
    EngineHandle::with_providers(Arc::new(catalog), Arc::new(links), EnrichmentMode::Concurrent)
        .expect("engine starts")
}

#[test]
fn startup_reports_readiness_before_any_command() {
    let engine = EngineHandle::new(EngineConfig::default());

    let engine = engine.expect("default config starts");
    assert!(engine.try_recv().is_none());
}

#[test]
fn enrichment_pass_reports_every_record_at_once() {
    tracker_logging::initialize_for_tests();
    let catalog = FakeCatalog::new().with_results("Monster", vec![titled("19", "Monster")]);
    let engine = engine(catalog, FakeLinks::new(Ok(Vec::new())));

    engine.enrich_all(vec![
        CuratedEntry::titled("Monster"),
        CuratedEntry::titled("Unheard Of"),
    ]);

    match engine.recv_timeout(WAIT) {
        Some(EngineEvent::EnrichmentFinished(records)) => {
            assert_eq!(records.len(), 2);
            assert_eq!(records[0].catalog_id.as_str(), "19");
            assert!(records[1].catalog_id.is_synthetic());
        }
        other => panic!("expected enrichment result, got {other:?}"),
    }
    assert!(engine.try_recv().is_none());
}

#[test]
fn detail_sections_arrive_as_separate_events() {
    tracker_logging::initialize_for_tests();
    let catalog = FakeCatalog::new().with_results("Monster", vec![titled("19", "Monster")]);
    let links = FakeLinks::new(Ok(vec![ExternalLink::new("Netflix", "https://netflix.test")]));
    let engine = engine(catalog, links);

    engine.enrich_all(vec![CuratedEntry::titled("Monster")]);
    let record = match engine.recv_timeout(WAIT) {
        Some(EngineEvent::EnrichmentFinished(mut records)) => records.remove(0),
        other => panic!("expected enrichment result, got {other:?}"),
    };

    engine.load_detail(4, record);

    let mut sections = Vec::new();
    for _ in 0..3 {
        match engine.recv_timeout(WAIT) {
            Some(EngineEvent::Detail(event)) => sections.push(event),
            other => panic!("expected detail event, got {other:?}"),
        }
    }
    assert!(sections
        .iter()
        .any(|event| matches!(event, DetailEvent::Genres { token: 4, .. })));
    assert!(sections.iter().any(|event| matches!(
        event,
        DetailEvent::Links { token: 4, links } if links.len() == 1
    )));
    assert!(sections.iter().any(|event| matches!(
        event,
        DetailEvent::Franchise { token: 4, result: Ok(_) }
    )));
}
