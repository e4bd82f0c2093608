use std::time::Duration;

use futures_util::future::join_all;
use tracker_core::{CuratedEntry, EnrichedRecord, Unmatched};
use tracker_logging::{tracker_debug, tracker_info, tracker_warn};

use crate::catalog::Catalog;
use crate::matcher::best_match;

/// How the enrichment pass schedules its catalog searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnrichmentMode {
    /// Every search in flight at once.
    #[default]
    Concurrent,
    /// One search at a time with a fixed pause in between.
    Throttled { delay: Duration },
}

/// Enriches one entry. Never fails: a missing match or a failed search
/// yields a sentinel record with a synthetic catalog id.
pub async fn enrich_entry(catalog: &dyn Catalog, entry: CuratedEntry) -> EnrichedRecord {
    match catalog.search(&entry.title, None).await {
        Ok(candidates) => match best_match(&entry.title, &candidates) {
            Some(found) => {
                tracker_debug!("matched {:?} to catalog id {}", entry.title, found.id);
                let metadata = found.metadata();
                EnrichedRecord::matched(entry, metadata)
            }
            None => {
                tracker_debug!("no catalog candidates for {:?}", entry.title);
                EnrichedRecord::unmatched(entry, Unmatched::NoMatch)
            }
        },
        Err(err) => {
            tracker_warn!("catalog search for {:?} failed: {}", entry.title, err);
            EnrichedRecord::unmatched(entry, Unmatched::LookupFailed)
        }
    }
}

/// Enriches every entry and returns once all of them have settled, one
/// record per entry.
pub async fn enrich_all(
    catalog: &dyn Catalog,
    entries: Vec<CuratedEntry>,
    mode: EnrichmentMode,
) -> Vec<EnrichedRecord> {
    tracker_info!("enriching {} entries ({:?})", entries.len(), mode);
    let records = match mode {
        EnrichmentMode::Concurrent => {
            join_all(entries.into_iter().map(|entry| enrich_entry(catalog, entry))).await
        }
        EnrichmentMode::Throttled { delay } => {
            let mut records = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                if index > 0 {
                    tokio::time::sleep(delay).await;
                }
                records.push(enrich_entry(catalog, entry).await);
            }
            records
        }
    };
    let synthetic = records
        .iter()
        .filter(|record| record.catalog_id.is_synthetic())
        .count();
    tracker_info!(
        "enrichment finished: {} records, {} without catalog data",
        records.len(),
        synthetic
    );
    records
}
