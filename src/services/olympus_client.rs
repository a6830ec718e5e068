//! Olympus chapter resolution for Marcador.
//!
//! Client for the Olympus reading-platform API: walks the paginated series
//! catalog and resolves the newest published chapter of a series, so stale
//! chapter bookmarks can be refreshed in place.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::types::bookmark::Bookmark;
use crate::types::errors::OlympusError;
use crate::types::olympus::{ChapterList, ChapterSummary, Series, SeriesList};

const DEFAULT_CATALOG_BASE: &str = "https://olympusbiblioteca.com";
const DEFAULT_DASHBOARD_BASE: &str = "https://dashboard.olympusbiblioteca.com";
const SERIES_TITLE_SUFFIX: &str = " | Olympus Scanlation";

/// Client for the Olympus series and chapter APIs.
pub struct OlympusClient {
    http: Client,
    catalog_base: String,
    dashboard_base: String,
}

impl Default for OlympusClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OlympusClient {
    pub fn new() -> Self {
        Self::with_base_urls(DEFAULT_CATALOG_BASE, DEFAULT_DASHBOARD_BASE)
    }

    /// Client pointed at alternative hosts; used by tests.
    pub fn with_base_urls(catalog_base: impl Into<String>, dashboard_base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            catalog_base: catalog_base.into(),
            dashboard_base: dashboard_base.into(),
        }
    }

    fn series_api_url(&self, page: u32) -> String {
        format!(
            "{}/api/series?page={}&direction=asc&type=comic",
            self.catalog_base, page
        )
    }

    fn chapters_api_url(&self, slug: &str, page: u32) -> String {
        format!(
            "{}/api/series/{}/chapters?page={}&direction=desc&type=comic",
            self.dashboard_base, slug, page
        )
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, OlympusError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|err| OlympusError::NetworkError(err.to_string()))?;

        if !response.status().is_success() {
            return Err(OlympusError::ApiError(format!(
                "{} for {}",
                response.status(),
                url
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| OlympusError::ParseError(err.to_string()))
    }

    fn collect_page(&self, page: &SeriesList) -> Vec<Series> {
        page.data
            .series
            .data
            .iter()
            .map(|summary| Series {
                title: format!("{}{}", summary.name, SERIES_TITLE_SUFFIX),
                url: format!("{}/series/comic-{}", self.catalog_base, summary.slug),
                slug: summary.slug.clone(),
            })
            .collect()
    }

    /// Fetches the full series catalog, walking every page.
    pub async fn get_series(&self) -> Result<Vec<Series>, OlympusError> {
        let first: SeriesList = self.fetch_json(&self.series_api_url(1)).await?;
        let mut series = self.collect_page(&first);

        for page in 2..=first.data.series.last_page {
            let next: SeriesList = self.fetch_json(&self.series_api_url(page)).await?;
            series.extend(self.collect_page(&next));
        }

        info!(count = series.len(), "fetched Olympus series catalog");
        Ok(series)
    }

    /// Newest published chapter of a series, or `None` for an empty series.
    pub async fn get_latest_chapter(
        &self,
        slug: &str,
    ) -> Result<Option<ChapterSummary>, OlympusError> {
        // First page of the descending listing holds the newest chapter.
        let chapters: ChapterList = self.fetch_json(&self.chapters_api_url(slug, 1)).await?;
        debug!(
            slug,
            pages = chapters.meta.last_page,
            "fetched chapter listing"
        );
        Ok(chapters.data.into_iter().next())
    }

    /// Maps chapter bookmarks onto refreshed records pointing at the newest
    /// chapter of the matching catalog series.
    ///
    /// A bookmark matches a series by title; bookmarks without a catalog
    /// match are left out of the result. Folder, icon, and date carry over
    /// from the source bookmark unchanged.
    pub async fn resolve_chapter_bookmarks(
        &self,
        catalog: &[Series],
        bookmarks: &[Bookmark],
    ) -> Result<Vec<Bookmark>, OlympusError> {
        let mut resolved = Vec::with_capacity(bookmarks.len());

        for bookmark in bookmarks {
            let Some(series) = catalog.iter().find(|s| s.title == bookmark.title) else {
                continue;
            };

            if let Some(chapter) = self.get_latest_chapter(&series.slug).await? {
                resolved.push(Bookmark {
                    title: bookmark.title.clone(),
                    href: format!(
                        "{}/capitulo/{}/comic-{}",
                        self.catalog_base, chapter.id, series.slug
                    ),
                    folder: bookmark.folder.clone(),
                    icon: bookmark.icon.clone(),
                    add_date: bookmark.add_date,
                });
            }
        }

        info!(
            resolved = resolved.len(),
            requested = bookmarks.len(),
            "resolved chapter bookmarks"
        );
        Ok(resolved)
    }
}
