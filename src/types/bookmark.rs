use serde::{Deserialize, Serialize};

/// Name of the implicit root folder in a bookmark export. A record whose
/// `folder` equals this sentinel sits directly under the document root, and
/// the sentinel is never emitted as a nested folder header.
pub const ROOT_FOLDER: &str = "Marcadores";

/// Separator between folder segments in a rendered folder path.
pub const FOLDER_SEPARATOR: &str = " > ";

/// One entry of a bookmark export.
///
/// The `href` is the record's identity: a store never holds two bookmarks
/// with the same `href`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub href: String,
    /// Folder path as segments joined by `" > "`, or [`ROOT_FOLDER`] when the
    /// bookmark sits at the root.
    pub folder: String,
    /// Icon reference (data URI or URL), preserved verbatim.
    pub icon: Option<String>,
    /// UNIX timestamp in seconds; `0` when absent from the source file.
    pub add_date: i64,
}

impl Bookmark {
    /// Creates a bookmark at the root folder with no icon and no date.
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            folder: ROOT_FOLDER.to_string(),
            icon: None,
            add_date: 0,
        }
    }

    /// Consumes the bookmark, replacing its folder path.
    pub fn in_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }
}

/// Splits a folder path into its segments.
///
/// The root sentinel and the empty string both mean "no folder" and yield an
/// empty segment list.
pub fn split_folder_path(folder: &str) -> Vec<&str> {
    if folder.is_empty() || folder == ROOT_FOLDER {
        return Vec::new();
    }
    folder.split(FOLDER_SEPARATOR).collect()
}

/// Joins folder segments back into a folder path.
///
/// An empty segment list yields the root sentinel.
pub fn join_folder_path(segments: &[&str]) -> String {
    if segments.is_empty() {
        return ROOT_FOLDER.to_string();
    }
    segments.join(FOLDER_SEPARATOR)
}
