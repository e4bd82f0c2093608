use tracker_core::{Effect, Msg};
use tracker_engine::{DetailEvent, EngineConfig, EngineError, EngineEvent, EngineHandle};
use tracker_logging::{tracker_debug, tracker_info};

/// Hands effects to the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            engine: EngineHandle::new(config)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::EnrichAll { entries } => {
                    tracker_info!("EnrichAll entries={}", entries.len());
                    self.engine.enrich_all(entries);
                }
                Effect::LoadDetail { token, record } => {
                    tracker_debug!("LoadDetail token={} id={}", token, record.catalog_id);
                    self.engine.load_detail(token, record);
                }
            }
        }
    }

    /// Drains every engine event received so far.
    pub fn poll(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::EnrichmentFinished(records) => Msg::EnrichmentFinished(records),
        EngineEvent::Detail(DetailEvent::Genres { token, genres }) => {
            Msg::GenresResolved { token, genres }
        }
        EngineEvent::Detail(DetailEvent::Links { token, links }) => {
            Msg::LinksResolved { token, links }
        }
        EngineEvent::Detail(DetailEvent::Franchise { token, result }) => Msg::FranchiseResolved {
            token,
            result: result.map_err(|err| err.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use tracker_core::{CuratedEntry, EnrichedRecord, FranchiseInfo, Unmatched};
    use tracker_engine::{FailureKind, FetchError};

    use super::*;

    #[test]
    fn franchise_failure_becomes_a_displayable_message() {
        let event = EngineEvent::Detail(DetailEvent::Franchise {
            token: 3,
            result: Err(FetchError::new(FailureKind::HttpStatus(429), "Too Many Requests")),
        });

        assert_eq!(
            map_event(event),
            Msg::FranchiseResolved {
                token: 3,
                result: Err("http status 429: Too Many Requests".to_string()),
            }
        );
    }

    #[test]
    fn section_events_keep_their_token() {
        let ok = EngineEvent::Detail(DetailEvent::Franchise {
            token: 8,
            result: Ok(FranchiseInfo::default()),
        });
        let genres = EngineEvent::Detail(DetailEvent::Genres {
            token: 8,
            genres: vec!["Drama".to_string()],
        });

        assert_eq!(
            map_event(ok),
            Msg::FranchiseResolved {
                token: 8,
                result: Ok(FranchiseInfo::default()),
            }
        );
        assert_eq!(
            map_event(genres),
            Msg::GenresResolved {
                token: 8,
                genres: vec!["Drama".to_string()],
            }
        );
    }

    #[test]
    fn enrichment_result_passes_through_whole() {
        let records = vec![EnrichedRecord::unmatched(
            CuratedEntry::titled("Solo"),
            Unmatched::NoMatch,
        )];
        assert_eq!(
            map_event(EngineEvent::EnrichmentFinished(records.clone())),
            Msg::EnrichmentFinished(records)
        );
    }
}
