/// Identifies one selection. Detail results carrying an older token are dropped.
pub type SelectionToken = u64;

/// Site names rendered as clickable links in the detail panel.
pub const STREAMING_SERVICES: &[&str] = &[
    "crunchyroll",
    "funimation",
    "netflix",
    "hulu",
    "hidive",
    "amazon",
    "prime video",
    "disney",
    "hbo",
    "vrv",
    "tubi",
    "bilibili",
    "youtube",
];

/// Which provider answers the external link lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkSource {
    /// Searched by title. Works for every record.
    #[default]
    ByTitle,
    /// Keyed by catalog id. Records with synthetic ids have no links.
    ById,
}

/// State of one independently resolving detail section.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Lookup<T> {
    #[default]
    Pending,
    Ready(T),
    Failed(String),
}

impl<T> Lookup<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Lookup::Pending)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Lookup::Ready(value) => Some(value),
            Lookup::Pending | Lookup::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub site: String,
    pub url: String,
}

impl ExternalLink {
    pub fn new(site: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            url: url.into(),
        }
    }

    /// Display filter only; non-streaming links are still kept.
    pub fn is_streaming_service(&self) -> bool {
        let site = self.site.to_lowercase();
        STREAMING_SERVICES.iter().any(|name| site.contains(name))
    }
}

/// Compact projection of one franchise member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSummary {
    pub id: String,
    pub title: String,
    pub episode_count: Option<u32>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub subtype: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FranchiseInfo {
    pub total_episodes: u32,
    pub status: Option<String>,
    pub series: Vec<SeriesSummary>,
}

/// Transient detail of the selected record, rebuilt on every selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionDetail {
    pub genres: Lookup<Vec<String>>,
    pub external_links: Lookup<Vec<ExternalLink>>,
    pub franchise: Lookup<FranchiseInfo>,
}

impl SelectionDetail {
    pub fn pending() -> Self {
        Self::default()
    }

    /// Genre names, empty until resolved.
    pub fn genres(&self) -> &[String] {
        self.genres.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn external_links(&self) -> &[ExternalLink] {
        self.external_links.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn franchise(&self) -> Option<&FranchiseInfo> {
        self.franchise.ready()
    }
}
