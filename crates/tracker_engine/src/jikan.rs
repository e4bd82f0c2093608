//! Jikan (MyAnimeList) provider for external links, looked up by title.

use serde::Deserialize;
use tracker_core::{EnrichedRecord, ExternalLink};
use tracker_logging::tracker_debug;

use crate::catalog::LinkProvider;
use crate::fetch::JsonFetcher;
use crate::FetchError;

pub const JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";
const JSON: &str = "application/json";

#[derive(Debug, Clone)]
pub struct JikanLinks {
    fetcher: JsonFetcher,
    base_url: String,
}

impl JikanLinks {
    pub fn new(fetcher: JsonFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    async fn first_match(&self, title: &str) -> Result<Option<u64>, FetchError> {
        let mut url = JsonFetcher::parse_url(&format!("{}/anime", self.base()))?;
        url.query_pairs_mut()
            .append_pair("q", title)
            .append_pair("limit", "1");
        let found: SearchResponse = self.fetcher.get_json(url, JSON).await?;
        Ok(found.data.first().map(|anime| anime.mal_id))
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[async_trait::async_trait]
impl LinkProvider for JikanLinks {
    /// Works for every record, synthetic ids included, since only the title is used.
    async fn external_links(&self, record: &EnrichedRecord) -> Result<Vec<ExternalLink>, FetchError> {
        let Some(mal_id) = self.first_match(record.title()).await? else {
            tracker_debug!("jikan has no entry for {:?}", record.title());
            return Ok(Vec::new());
        };
        let url = JsonFetcher::parse_url(&format!("{}/anime/{mal_id}/external", self.base()))?;
        let links: ExternalResponse = self.fetcher.get_json(url, JSON).await?;
        Ok(links
            .data
            .into_iter()
            .filter_map(|link| match (link.name, link.url) {
                (Some(name), Some(url)) => Some(ExternalLink::new(name, url)),
                _ => None,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    mal_id: u64,
}

#[derive(Debug, Deserialize)]
struct ExternalResponse {
    #[serde(default)]
    data: Vec<WireLink>,
}

#[derive(Debug, Deserialize)]
struct WireLink {
    name: Option<String>,
    url: Option<String>,
}
