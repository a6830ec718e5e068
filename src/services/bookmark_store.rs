//! Bookmark Store for Marcador.
//!
//! Implements `BookmarkStoreTrait` — the canonical in-memory collection,
//! deduplicated by URL, with search, extraction, removal, and
//! domain-frequency reordering. The store assumes a single logical owner;
//! callers needing shared access should funnel mutations through one task
//! and hand out `get_all` snapshots.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};
use url::Url;

use crate::types::bookmark::Bookmark;
use crate::types::search::SearchOptions;

/// Grouping key used when a URL has no parsable host.
const UNKNOWN_DOMAIN: &str = "unknown";

/// Trait defining bookmark store operations.
pub trait BookmarkStoreTrait {
    /// Appends records whose `href` is not yet known; duplicates are dropped
    /// silently and never update existing fields.
    fn add(&mut self, bookmarks: Vec<Bookmark>);
    /// Like [`add`](Self::add), but replaces each record's folder before
    /// insertion.
    fn add_to_folder(&mut self, bookmarks: Vec<Bookmark>, folder: &str);
    /// Defensive copy of the collection in insertion order.
    fn get_all(&self) -> Vec<Bookmark>;
    /// Removes the given records by `href`; non-members are ignored.
    fn remove(&mut self, bookmarks: &[Bookmark]);
    /// Read-only filtering query; see [`SearchOptions`].
    fn find_by(&self, options: &SearchOptions) -> Vec<Bookmark>;
    /// [`find_by`](Self::find_by) followed by removal of the matched subset;
    /// returns the removed records.
    fn extract_by(&mut self, options: &SearchOptions) -> Vec<Bookmark>;
    /// Reorders the collection so that, within each folder, records sharing
    /// the most frequent URL host come first. Returns a copy of the new
    /// order.
    fn order_by_domain(&mut self) -> Vec<Bookmark>;
}

/// In-memory bookmark store keyed by `href`.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
    known_hrefs: HashSet<String>,
}

/// One include/exclude term, pre-compiled for the current query mode.
enum TermMatcher {
    /// Plain substring needle, pre-lowercased unless the query is
    /// case-sensitive.
    Keyword(String),
    /// Compiled pattern; `None` when the pattern text failed to compile, in
    /// which case the term matches nothing.
    Pattern(Option<Regex>),
}

impl TermMatcher {
    fn build(term: &str, options: &SearchOptions) -> Self {
        if options.use_regex {
            let compiled = RegexBuilder::new(term)
                .case_insensitive(!options.case_sensitive)
                .build();
            match compiled {
                Ok(pattern) => TermMatcher::Pattern(Some(pattern)),
                Err(err) => {
                    warn!(term, error = %err, "invalid search pattern; term will match nothing");
                    TermMatcher::Pattern(None)
                }
            }
        } else if options.case_sensitive {
            TermMatcher::Keyword(term.to_string())
        } else {
            TermMatcher::Keyword(term.to_lowercase())
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            TermMatcher::Keyword(needle) => text.contains(needle.as_str()),
            TermMatcher::Pattern(Some(pattern)) => pattern.is_match(text),
            TermMatcher::Pattern(None) => false,
        }
    }
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// Whether a bookmark with this `href` is already stored.
    pub fn contains(&self, href: &str) -> bool {
        self.known_hrefs.contains(href)
    }

    /// The text a record is matched against: the selected fields joined by
    /// single spaces, lowercased for case-insensitive keyword queries.
    fn searchable_text(bookmark: &Bookmark, options: &SearchOptions) -> String {
        let mut fields: Vec<&str> = Vec::with_capacity(3);
        if options.search_in_title {
            fields.push(&bookmark.title);
        }
        if options.search_in_href {
            fields.push(&bookmark.href);
        }
        if options.search_in_folder {
            fields.push(&bookmark.folder);
        }
        let text = fields.join(" ");
        if !options.use_regex && !options.case_sensitive {
            text.to_lowercase()
        } else {
            text
        }
    }

    fn host_of(href: &str) -> String {
        Url::parse(href)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| UNKNOWN_DOMAIN.to_string())
    }
}

impl BookmarkStoreTrait for BookmarkStore {
    fn add(&mut self, bookmarks: Vec<Bookmark>) {
        for bookmark in bookmarks {
            // First write wins; a later record with a known href is dropped.
            if self.known_hrefs.insert(bookmark.href.clone()) {
                self.bookmarks.push(bookmark);
            }
        }
    }

    fn add_to_folder(&mut self, bookmarks: Vec<Bookmark>, folder: &str) {
        let relocated = bookmarks
            .into_iter()
            .map(|bookmark| bookmark.in_folder(folder))
            .collect();
        self.add(relocated);
    }

    fn get_all(&self) -> Vec<Bookmark> {
        self.bookmarks.clone()
    }

    fn remove(&mut self, bookmarks: &[Bookmark]) {
        let doomed: HashSet<&str> = bookmarks.iter().map(|b| b.href.as_str()).collect();
        self.bookmarks.retain(|b| !doomed.contains(b.href.as_str()));
        self.known_hrefs.retain(|href| !doomed.contains(href.as_str()));
    }

    fn find_by(&self, options: &SearchOptions) -> Vec<Bookmark> {
        // Include criteria are mandatory; nothing to match against otherwise.
        if options.include_words.is_empty() {
            return Vec::new();
        }

        let include: Vec<TermMatcher> = options
            .include_words
            .iter()
            .map(|term| TermMatcher::build(term, options))
            .collect();
        let exclude: Vec<TermMatcher> = options
            .exclude_words
            .iter()
            .map(|term| TermMatcher::build(term, options))
            .collect();

        let results: Vec<Bookmark> = self
            .bookmarks
            .iter()
            .filter(|bookmark| {
                let text = Self::searchable_text(bookmark, options);
                let included = if options.include_all_words {
                    include.iter().all(|term| term.is_match(&text))
                } else {
                    include.iter().any(|term| term.is_match(&text))
                };
                // Excludes are always OR: one hit disqualifies the record.
                included && !exclude.iter().any(|term| term.is_match(&text))
            })
            .cloned()
            .collect();

        debug!(
            matched = results.len(),
            mode = if options.use_regex { "regex" } else { "keywords" },
            "bookmark search"
        );
        results
    }

    fn extract_by(&mut self, options: &SearchOptions) -> Vec<Bookmark> {
        let extracted = self.find_by(options);
        self.remove(&extracted);
        extracted
    }

    fn order_by_domain(&mut self) -> Vec<Bookmark> {
        // Folder groups keep their first-seen order.
        let mut folder_order: Vec<String> = Vec::new();
        let mut folders: HashMap<String, Vec<Bookmark>> = HashMap::new();
        for bookmark in self.bookmarks.drain(..) {
            if !folders.contains_key(&bookmark.folder) {
                folder_order.push(bookmark.folder.clone());
            }
            folders
                .entry(bookmark.folder.clone())
                .or_default()
                .push(bookmark);
        }

        let mut reordered: Vec<Bookmark> = Vec::with_capacity(self.known_hrefs.len());
        for folder in folder_order {
            let group = folders.remove(&folder).unwrap_or_default();

            // Domain sub-groups keep their first-seen order too, so the
            // stable sort below preserves it on equal counts.
            let mut domain_order: Vec<String> = Vec::new();
            let mut domains: HashMap<String, Vec<Bookmark>> = HashMap::new();
            for bookmark in group {
                let host = Self::host_of(&bookmark.href);
                if !domains.contains_key(&host) {
                    domain_order.push(host.clone());
                }
                domains.entry(host).or_default().push(bookmark);
            }

            let mut sub_groups: Vec<Vec<Bookmark>> = domain_order
                .into_iter()
                .filter_map(|host| domains.remove(&host))
                .collect();
            sub_groups.sort_by_key(|sub_group| Reverse(sub_group.len()));

            for sub_group in sub_groups {
                reordered.extend(sub_group);
            }
        }

        self.bookmarks = reordered;
        self.bookmarks.clone()
    }
}
