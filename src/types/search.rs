use serde::{Deserialize, Serialize};

/// Criteria for [`BookmarkStore::find_by`] and
/// [`BookmarkStore::extract_by`].
///
/// A record matches when at least one include term matches (all of them when
/// `include_all_words` is set) and no exclude term matches. Terms are plain
/// keywords unless `use_regex` is set, in which case each term is compiled as
/// a regular expression.
///
/// [`BookmarkStore::find_by`]: crate::services::bookmark_store::BookmarkStore::find_by
/// [`BookmarkStore::extract_by`]: crate::services::bookmark_store::BookmarkStore::extract_by
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Terms that must match. An empty list matches nothing.
    pub include_words: Vec<String>,
    /// Terms that must not match; any single hit excludes the record.
    pub exclude_words: Vec<String>,
    /// Match case-sensitively. Off by default.
    pub case_sensitive: bool,
    /// Include the title in the searchable text. On by default.
    pub search_in_title: bool,
    /// Include the URL in the searchable text. On by default.
    pub search_in_href: bool,
    /// Include the folder path in the searchable text. Off by default.
    pub search_in_folder: bool,
    /// Compile terms as regular expressions instead of keywords.
    pub use_regex: bool,
    /// Require every include term to match (AND) instead of any (OR).
    pub include_all_words: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            include_words: Vec::new(),
            exclude_words: Vec::new(),
            case_sensitive: false,
            search_in_title: true,
            search_in_href: true,
            search_in_folder: false,
            use_regex: false,
            include_all_words: false,
        }
    }
}

impl SearchOptions {
    /// Keyword search over title and URL with everything else at defaults.
    pub fn keywords<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            include_words: words.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
