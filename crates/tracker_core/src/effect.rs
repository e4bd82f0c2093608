use crate::{CuratedEntry, EnrichedRecord, SelectionToken};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Enrich the whole curated list and report back with `Msg::EnrichmentFinished`.
    EnrichAll { entries: Vec<CuratedEntry> },
    /// Run the detail lookups for a freshly selected record.
    LoadDetail {
        token: SelectionToken,
        record: EnrichedRecord,
    },
}
