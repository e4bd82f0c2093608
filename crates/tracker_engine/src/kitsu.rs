//! Kitsu JSON:API provider: title search, genres by reference and
//! id-keyed streaming links.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use tracker_core::{EnrichedRecord, ExternalLink};
use tracker_logging::tracker_debug;
use url::Url;

use crate::catalog::{Catalog, CatalogEntry, LinkProvider, PosterImages};
use crate::fetch::JsonFetcher;
use crate::FetchError;

pub const KITSU_BASE_URL: &str = "https://kitsu.io/api/edge";
const JSON_API: &str = "application/vnd.api+json";

#[derive(Debug, Clone)]
pub struct KitsuCatalog {
    fetcher: JsonFetcher,
    base_url: String,
}

impl KitsuCatalog {
    pub fn new(fetcher: JsonFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl Catalog for KitsuCatalog {
    async fn search(&self, query: &str, limit: Option<u32>) -> Result<Vec<CatalogEntry>, FetchError> {
        let mut url = endpoint(&self.base_url, "anime")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("filter[text]", query);
            if let Some(limit) = limit {
                pairs.append_pair("page[limit]", &limit.to_string());
            }
        }
        tracker_debug!("kitsu search query={:?} limit={:?}", query, limit);
        let doc: AnimeDocument = self.fetcher.get_json(url, JSON_API).await?;
        Ok(doc.data.into_iter().map(AnimeResource::into_entry).collect())
    }

    async fn genres(&self, reference: &str) -> Result<Vec<String>, FetchError> {
        let url = JsonFetcher::parse_url(reference)?;
        tracker_debug!("kitsu genres ref={}", reference);
        let doc: GenreDocument = self.fetcher.get_json(url, JSON_API).await?;
        Ok(doc
            .data
            .into_iter()
            .filter_map(|genre| genre.attributes.name)
            .filter(|name| !name.trim().is_empty())
            .collect())
    }
}

/// Streaming links keyed by the Kitsu anime id.
#[derive(Debug, Clone)]
pub struct KitsuStreamingLinks {
    fetcher: JsonFetcher,
    base_url: String,
}

impl KitsuStreamingLinks {
    pub fn new(fetcher: JsonFetcher, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }
}

#[async_trait::async_trait]
impl LinkProvider for KitsuStreamingLinks {
    async fn external_links(&self, record: &EnrichedRecord) -> Result<Vec<ExternalLink>, FetchError> {
        // Synthetic ids never reach an id-keyed endpoint.
        if record.catalog_id.is_synthetic() {
            tracker_debug!("skipping streaming links for {}", record.catalog_id);
            return Ok(Vec::new());
        }
        let path = format!("anime/{}/streaming-links", record.catalog_id);
        let mut url = endpoint(&self.base_url, &path)?;
        url.query_pairs_mut().append_pair("include", "streamer");

        let doc: StreamingLinkDocument = self.fetcher.get_json(url, JSON_API).await?;
        let site_names: HashMap<&str, &str> = doc
            .included
            .iter()
            .filter(|resource| resource.kind == "streamers")
            .filter_map(|resource| {
                resource
                    .attributes
                    .site_name
                    .as_deref()
                    .map(|name| (resource.id.as_str(), name))
            })
            .collect();

        Ok(doc
            .data
            .iter()
            .filter_map(|link| {
                let url = link.attributes.url.clone()?;
                let site = link
                    .streamer_id()
                    .and_then(|id| site_names.get(id).copied())
                    .unwrap_or("Unknown");
                Some(ExternalLink::new(site, url))
            })
            .collect())
    }
}

fn endpoint(base_url: &str, path: &str) -> Result<Url, FetchError> {
    JsonFetcher::parse_url(&format!("{}/{}", base_url.trim_end_matches('/'), path))
}

#[derive(Debug, Deserialize)]
struct AnimeDocument {
    #[serde(default)]
    data: Vec<AnimeResource>,
}

#[derive(Debug, Deserialize)]
struct AnimeResource {
    id: String,
    #[serde(default)]
    attributes: AnimeAttributes,
    #[serde(default)]
    relationships: AnimeRelationships,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnimeAttributes {
    canonical_title: Option<String>,
    #[serde(default)]
    titles: BTreeMap<String, Option<String>>,
    abbreviated_titles: Option<Vec<Option<String>>>,
    synopsis: Option<String>,
    start_date: Option<String>,
    episode_count: Option<u32>,
    status: Option<String>,
    subtype: Option<String>,
    poster_image: Option<WirePosterImage>,
    popularity_rank: Option<u32>,
    rating_rank: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct WirePosterImage {
    tiny: Option<String>,
    small: Option<String>,
    medium: Option<String>,
    large: Option<String>,
    original: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct AnimeRelationships {
    genres: Option<Relationship>,
}

#[derive(Debug, Default, Deserialize)]
struct Relationship {
    links: Option<RelationshipLinks>,
}

#[derive(Debug, Default, Deserialize)]
struct RelationshipLinks {
    related: Option<String>,
}

impl AnimeResource {
    fn into_entry(self) -> CatalogEntry {
        let attrs = self.attributes;
        let poster = attrs.poster_image.unwrap_or_default();
        CatalogEntry {
            id: self.id,
            canonical_title: attrs.canonical_title,
            titles: attrs
                .titles
                .into_iter()
                .filter_map(|(locale, title)| title.map(|title| (locale, title)))
                .collect(),
            abbreviated_titles: attrs
                .abbreviated_titles
                .unwrap_or_default()
                .into_iter()
                .flatten()
                .collect(),
            synopsis: attrs.synopsis,
            start_date: attrs.start_date,
            episode_count: attrs.episode_count,
            status: attrs.status,
            subtype: attrs.subtype,
            poster: PosterImages {
                tiny: poster.tiny,
                small: poster.small,
                medium: poster.medium,
                large: poster.large,
                original: poster.original,
            },
            popularity_rank: attrs.popularity_rank,
            rating_rank: attrs.rating_rank,
            genre_ref: self
                .relationships
                .genres
                .and_then(|rel| rel.links)
                .and_then(|links| links.related),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenreDocument {
    #[serde(default)]
    data: Vec<GenreResource>,
}

#[derive(Debug, Deserialize)]
struct GenreResource {
    #[serde(default)]
    attributes: GenreAttributes,
}

#[derive(Debug, Default, Deserialize)]
struct GenreAttributes {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamingLinkDocument {
    #[serde(default)]
    data: Vec<StreamingLinkResource>,
    #[serde(default)]
    included: Vec<IncludedResource>,
}

#[derive(Debug, Deserialize)]
struct StreamingLinkResource {
    #[serde(default)]
    attributes: StreamingLinkAttributes,
    #[serde(default)]
    relationships: StreamingLinkRelationships,
}

impl StreamingLinkResource {
    fn streamer_id(&self) -> Option<&str> {
        self.relationships
            .streamer
            .as_ref()
            .and_then(|rel| rel.data.as_ref())
            .map(|identifier| identifier.id.as_str())
    }
}

#[derive(Debug, Default, Deserialize)]
struct StreamingLinkAttributes {
    url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StreamingLinkRelationships {
    streamer: Option<ToOneRelationship>,
}

#[derive(Debug, Deserialize)]
struct ToOneRelationship {
    data: Option<ResourceIdentifier>,
}

#[derive(Debug, Deserialize)]
struct ResourceIdentifier {
    id: String,
}

#[derive(Debug, Deserialize)]
struct IncludedResource {
    #[serde(rename = "type")]
    kind: String,
    id: String,
    #[serde(default)]
    attributes: IncludedAttributes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IncludedAttributes {
    site_name: Option<String>,
}
