//! Bookmark Manager for Marcador.
//!
//! Orchestrates the full pipeline: read a bookmark file, parse it into the
//! store, answer searches and extractions, and serialize back to disk.
//! Operations that need a populated store are guarded behind a loaded flag;
//! that guard is policy of this layer, not of the store itself.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::services::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use crate::services::file_handler::FileHandler;
use crate::services::html_parser::HtmlParser;
use crate::services::html_serializer::HtmlSerializer;
use crate::types::bookmark::Bookmark;
use crate::types::errors::ManagerError;
use crate::types::search::SearchOptions;

/// Directory that `export_bookmarks` writes into.
const DEFAULT_OUTPUT_DIR: &str = "data/output";

/// Orchestration layer over store, parser, serializer, and file handler.
pub struct BookmarkManager {
    path: PathBuf,
    output_dir: PathBuf,
    store: BookmarkStore,
    parser: HtmlParser,
    serializer: HtmlSerializer,
    files: FileHandler,
    loaded: bool,
}

impl BookmarkManager {
    /// Creates a manager bound to a bookmark file path. Nothing is read
    /// until [`read_bookmarks`](Self::read_bookmarks).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            store: BookmarkStore::new(),
            parser: HtmlParser::new(),
            serializer: HtmlSerializer::new(),
            files: FileHandler::new(),
            loaded: false,
        }
    }

    /// Redirects `export_bookmarks` output away from the default directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Whether `read_bookmarks` has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn ensure_loaded(&self) -> Result<(), ManagerError> {
        if self.loaded {
            Ok(())
        } else {
            Err(ManagerError::NotLoaded)
        }
    }

    /// Loads the bound file into the store. Returns the number of records
    /// the file parsed into (duplicates may collapse inside the store).
    pub async fn read_bookmarks(&mut self) -> Result<usize, ManagerError> {
        let content = self.files.read(&self.path).await?;
        let parsed = self.parser.parse(&content);
        let count = parsed.len();
        self.store.add(parsed);

        self.loaded = true;
        info!(count, path = %self.path.display(), "loaded bookmarks");
        Ok(count)
    }

    /// Serializes the store back to the bound file.
    pub async fn save_bookmarks(&self) -> Result<(), ManagerError> {
        self.ensure_loaded()?;

        let content = self.serializer.serialize(&self.store.get_all());
        self.files.write(&self.path, &content).await?;
        info!(count = self.store.len(), path = %self.path.display(), "saved bookmarks");
        Ok(())
    }

    /// Serializes an arbitrary subset into `data/output/<name>.html`.
    ///
    /// An empty subset writes nothing and returns `None`.
    pub async fn export_bookmarks(
        &self,
        name: &str,
        bookmarks: &[Bookmark],
    ) -> Result<Option<PathBuf>, ManagerError> {
        if bookmarks.is_empty() {
            warn!(file = name, "no bookmarks to export");
            return Ok(None);
        }

        let path = self.output_dir.join(format!("{}.html", name));
        let content = self.serializer.serialize(bookmarks);
        self.files.write(&path, &content).await?;
        info!(count = bookmarks.len(), path = %path.display(), "exported bookmarks");
        Ok(Some(path))
    }

    /// Deletes the bound file from disk. The in-memory store is untouched.
    pub async fn delete_file(&self) -> Result<(), ManagerError> {
        self.files.delete(&self.path).await?;
        Ok(())
    }

    /// Snapshot of the current collection.
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.store.get_all()
    }

    /// Adds records directly, bypassing the file. Logs how many survived
    /// deduplication.
    pub fn add_bookmarks(&mut self, bookmarks: Vec<Bookmark>) {
        let before = self.store.len();
        self.store.add(bookmarks);
        info!(added = self.store.len() - before, "added bookmarks");
    }

    /// Guarded search over the loaded collection.
    pub fn find_bookmarks_by(
        &self,
        options: &SearchOptions,
    ) -> Result<Vec<Bookmark>, ManagerError> {
        self.ensure_loaded()?;

        let results = self.store.find_by(options);
        let mode = if options.use_regex { "regex" } else { "keywords" };
        info!(found = results.len(), mode, "searched bookmarks");
        Ok(results)
    }

    /// Guarded search-and-remove; returns the extracted records.
    pub fn extract_bookmarks_by(
        &mut self,
        options: &SearchOptions,
    ) -> Result<Vec<Bookmark>, ManagerError> {
        self.ensure_loaded()?;

        let extracted = self.store.extract_by(options);
        if extracted.is_empty() {
            info!("no bookmarks found to extract");
        } else {
            let mode = if options.use_regex { "regex" } else { "keywords" };
            info!(extracted = extracted.len(), mode, "extracted bookmarks");
        }
        Ok(extracted)
    }

    /// Removes records from the store by URL. Logs how many were present.
    pub fn delete_bookmarks(&mut self, bookmarks: &[Bookmark]) {
        let before = self.store.len();
        self.store.remove(bookmarks);
        info!(deleted = before - self.store.len(), "deleted bookmarks");
    }

    /// Reorders the store by per-folder domain frequency; see
    /// [`BookmarkStoreTrait::order_by_domain`].
    pub fn order_by_domain(&mut self) -> Vec<Bookmark> {
        self.store.order_by_domain()
    }
}
