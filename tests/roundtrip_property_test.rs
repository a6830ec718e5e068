//! Property-based tests for the parse/serialize round trip and store
//! deduplication.
//!
//! These tests verify that serializing any collection of well-formed
//! bookmarks and parsing the result yields the same records (folder order
//! aside, since sibling folders re-sort lexicographically on output), and
//! that adding a batch twice never grows the store past one record per URL.

use std::collections::HashSet;

use marcador::services::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use marcador::services::html_parser::HtmlParser;
use marcador::services::html_serializer::HtmlSerializer;
use marcador::types::bookmark::{Bookmark, ROOT_FOLDER};
use proptest::prelude::*;

/// Strategy for bookmark titles: printable, no markup, no edge whitespace
/// (the parser trims display text).
fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,18}[a-zA-Z0-9]"
}

/// Strategy for folder paths: zero to three short segments, so no segment
/// can collide with the root sentinel or contain the separator.
fn arb_folder() -> impl Strategy<Value = String> {
    proptest::collection::vec("[A-Za-z][a-z]{0,6}", 0..=3)
        .prop_map(|segments| {
            if segments.is_empty() {
                ROOT_FOLDER.to_string()
            } else {
                segments.join(" > ")
            }
        })
}

/// Strategy for optional icon references.
fn arb_icon() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("data:image/png;base64,[A-Za-z0-9]{4,12}")
}

/// Strategy for a batch of bookmarks with unique hrefs.
fn arb_bookmarks() -> impl Strategy<Value = Vec<Bookmark>> {
    proptest::collection::vec(
        (arb_title(), arb_folder(), arb_icon(), 0i64..2_000_000_000),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (title, folder, icon, add_date))| Bookmark {
                title,
                href: format!("https://host{}.example/page/{}", index % 5, index),
                folder,
                icon,
                add_date,
            })
            .collect()
    })
}

/// Key tuple compared across the round trip.
fn key(bookmark: &Bookmark) -> (String, String, String, Option<String>, i64) {
    (
        bookmark.href.clone(),
        bookmark.title.clone(),
        bookmark.folder.clone(),
        bookmark.icon.clone(),
        bookmark.add_date,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // *For any* batch of well-formed bookmarks with unique URLs,
    // parse(serialize(batch)) yields the same set of records.
    #[test]
    fn serialize_then_parse_preserves_records(bookmarks in arb_bookmarks()) {
        let rendered = HtmlSerializer::new().serialize(&bookmarks);
        let reparsed = HtmlParser::new().parse(&rendered);

        let mut expected: Vec<_> = bookmarks.iter().map(key).collect();
        let mut actual: Vec<_> = reparsed.iter().map(key).collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(expected, actual);
    }

    // Within one folder, the round trip preserves record order.
    #[test]
    fn round_trip_preserves_order_within_a_folder(bookmarks in arb_bookmarks()) {
        let rendered = HtmlSerializer::new().serialize(&bookmarks);
        let reparsed = HtmlParser::new().parse(&rendered);

        let folders: HashSet<&str> = bookmarks.iter().map(|b| b.folder.as_str()).collect();
        for folder in folders {
            let before: Vec<&str> = bookmarks
                .iter()
                .filter(|b| b.folder == folder)
                .map(|b| b.href.as_str())
                .collect();
            let after: Vec<&str> = reparsed
                .iter()
                .filter(|b| b.folder == folder)
                .map(|b| b.href.as_str())
                .collect();
            prop_assert_eq!(before, after);
        }
    }

    // Adding the same batch twice leaves exactly one record per unique href.
    #[test]
    fn double_add_is_idempotent(bookmarks in arb_bookmarks()) {
        let unique_hrefs: HashSet<String> =
            bookmarks.iter().map(|b| b.href.clone()).collect();

        let mut store = BookmarkStore::new();
        store.add(bookmarks.clone());
        let after_first = store.len();
        store.add(bookmarks);

        prop_assert_eq!(after_first, unique_hrefs.len());
        prop_assert_eq!(store.len(), after_first);
    }
}
