use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use tracker_core::{CuratedEntry, EnrichedRecord, LinkSource, SelectionToken};
use tracker_logging::tracker_debug;

use crate::catalog::{Catalog, LinkProvider};
use crate::detail::{load_detail, ChannelDetailSink};
use crate::enrich::{enrich_all, EnrichmentMode};
use crate::fetch::{FetchSettings, JsonFetcher};
use crate::jikan::{JikanLinks, JIKAN_BASE_URL};
use crate::kitsu::{KitsuCatalog, KitsuStreamingLinks, KITSU_BASE_URL};
use crate::{EngineError, EngineEvent};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub fetch: FetchSettings,
    pub kitsu_base_url: String,
    pub jikan_base_url: String,
    pub link_source: LinkSource,
    pub enrichment: EnrichmentMode,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fetch: FetchSettings::default(),
            kitsu_base_url: KITSU_BASE_URL.to_string(),
            jikan_base_url: JIKAN_BASE_URL.to_string(),
            link_source: LinkSource::default(),
            enrichment: EnrichmentMode::default(),
        }
    }
}

enum EngineCommand {
    EnrichAll {
        entries: Vec<CuratedEntry>,
    },
    LoadDetail {
        token: SelectionToken,
        record: EnrichedRecord,
    },
}

/// Runs catalog work on a background tokio runtime. Commands go in through
/// the handle; results come back as `EngineEvent`s via `try_recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// `LinkSource::ByTitle` uses Jikan; `LinkSource::ById` uses Kitsu streaming links.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let fetcher = JsonFetcher::new(config.fetch.clone())?;
        let catalog: Arc<dyn Catalog> =
            Arc::new(KitsuCatalog::new(fetcher.clone(), config.kitsu_base_url.clone()));
        let links: Arc<dyn LinkProvider> = match config.link_source {
            LinkSource::ByTitle => Arc::new(JikanLinks::new(fetcher, config.jikan_base_url)),
            LinkSource::ById => Arc::new(KitsuStreamingLinks::new(fetcher, config.kitsu_base_url)),
        };
        Self::with_providers(catalog, links, config.enrichment)
    }

    pub fn with_providers(
        catalog: Arc<dyn Catalog>,
        links: Arc<dyn LinkProvider>,
        mode: EnrichmentMode,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let catalog = catalog.clone();
                let links = links.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(catalog.as_ref(), links.as_ref(), mode, command, event_tx).await;
                });
            }
            tracker_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enrich_all(&self, entries: Vec<CuratedEntry>) {
        let _ = self.cmd_tx.send(EngineCommand::EnrichAll { entries });
    }

    pub fn load_detail(&self, token: SelectionToken, record: EnrichedRecord) {
        let _ = self.cmd_tx.send(EngineCommand::LoadDetail { token, record });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    catalog: &dyn Catalog,
    links: &dyn LinkProvider,
    mode: EnrichmentMode,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::EnrichAll { entries } => {
            let records = enrich_all(catalog, entries, mode).await;
            let _ = event_tx.send(EngineEvent::EnrichmentFinished(records));
        }
        EngineCommand::LoadDetail { token, record } => {
            let sink = ChannelDetailSink::new(event_tx);
            load_detail(catalog, links, token, &record, &sink).await;
        }
    }
}
