use serde::Deserialize;

/// A series resolved from the Olympus catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub title: String,
    pub url: String,
    pub slug: String,
}

// Payload shapes below mirror the JSON the Olympus API actually returns;
// fields the organizer does not consume are left out and ignored by serde.

/// Response of `GET /api/series`.
#[derive(Debug, Deserialize)]
pub struct SeriesList {
    pub data: SeriesEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct SeriesEnvelope {
    pub series: SeriesPage,
}

/// One page of the paginated series catalog.
#[derive(Debug, Deserialize)]
pub struct SeriesPage {
    pub current_page: u32,
    pub last_page: u32,
    pub data: Vec<SeriesSummary>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeriesSummary {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub chapter_count: u32,
}

/// Response of `GET /api/series/{slug}/chapters`.
#[derive(Debug, Deserialize)]
pub struct ChapterList {
    pub data: Vec<ChapterSummary>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChapterSummary {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
}
