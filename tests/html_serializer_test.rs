//! Unit tests for the HtmlSerializer.
//!
//! These tests check the fixed preamble/closing, folder-tree construction
//! from flat folder paths, lexicographic folder ordering, and attribute
//! emission rules.

use marcador::services::html_parser::HtmlParser;
use marcador::services::html_serializer::HtmlSerializer;
use marcador::types::bookmark::Bookmark;

fn bookmark(title: &str, href: &str, folder: &str) -> Bookmark {
    Bookmark::new(title, href).in_folder(folder)
}

/// The document starts with the fixed preamble and ends with two close
/// markers.
#[test]
fn test_document_framing() {
    let output = HtmlSerializer::new().serialize(&[Bookmark::new("A", "https://a.example/")]);

    assert!(output.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));
    assert!(output.contains("<TITLE>Bookmarks</TITLE>"));
    assert!(output.contains("<H1>Marcadores</H1>"));
    assert!(output.ends_with("</DL><p>\n</DL><p>\n"));
}

/// Root-sentinel bookmarks attach directly under the root; the sentinel is
/// never rendered as a folder header.
#[test]
fn test_root_bookmarks_have_no_folder_header() {
    let output = HtmlSerializer::new().serialize(&[Bookmark::new("A", "https://a.example/")]);

    assert!(!output.contains("<H3>"));
    assert!(output.contains("<DT><A HREF=\"https://a.example/\">A</A>"));
}

/// Sibling folders render in lexicographic name order regardless of record
/// order; bookmarks inside a folder keep insertion order.
#[test]
fn test_folders_sorted_lexicographically() {
    let output = HtmlSerializer::new().serialize(&[
        bookmark("Z1", "https://z.example/1", "Zeta"),
        bookmark("A1", "https://a.example/1", "Alfa"),
        bookmark("Z2", "https://z.example/2", "Zeta"),
    ]);

    let alfa = output.find("<H3>Alfa</H3>").expect("Alfa header");
    let zeta = output.find("<H3>Zeta</H3>").expect("Zeta header");
    assert!(alfa < zeta);

    let z1 = output.find("Z1</A>").expect("Z1 entry");
    let z2 = output.find("Z2</A>").expect("Z2 entry");
    assert!(z1 < z2);
}

/// A multi-segment folder path produces nested folder blocks, and repeated
/// paths reuse the same node instead of duplicating headers.
#[test]
fn test_nested_paths_share_folder_nodes() {
    let output = HtmlSerializer::new().serialize(&[
        bookmark("One", "https://a.example/1", "Lectura > Manga"),
        bookmark("Two", "https://a.example/2", "Lectura > Manga"),
    ]);

    assert_eq!(output.matches("<H3>Lectura</H3>").count(), 1);
    assert_eq!(output.matches("<H3>Manga</H3>").count(), 1);
}

/// ICON is emitted only when present, ADD_DATE only when non-zero, in the
/// order HREF, ICON, ADD_DATE.
#[test]
fn test_optional_attribute_emission() {
    let mut with_both = Bookmark::new("Full", "https://f.example/");
    with_both.icon = Some("data:,i".to_string());
    with_both.add_date = 1700000000;
    let bare = Bookmark::new("Bare", "https://b.example/");

    let output = HtmlSerializer::new().serialize(&[with_both, bare]);

    assert!(output.contains(
        "<DT><A HREF=\"https://f.example/\" ICON=\"data:,i\" ADD_DATE=\"1700000000\">Full</A>"
    ));
    assert!(output.contains("<DT><A HREF=\"https://b.example/\">Bare</A>"));
}

/// Indentation deepens by one level per folder nesting step.
#[test]
fn test_indentation_tracks_depth() {
    let output =
        HtmlSerializer::new().serialize(&[bookmark("Deep", "https://d.example/", "A > B")]);

    assert!(output.contains("    <DT><H3>A</H3>"));
    assert!(output.contains("        <DT><H3>B</H3>"));
    assert!(output.contains("            <DT><A HREF=\"https://d.example/\">Deep</A>"));
}

/// Serializer output feeds back through the parser without losing records.
#[test]
fn test_output_reparses_to_same_records() {
    let original = vec![
        bookmark("Root", "https://r.example/", "Marcadores"),
        bookmark("One", "https://a.example/1", "Lectura > Manga"),
        bookmark("Two", "https://b.example/2", "Noticias"),
    ];

    let rendered = HtmlSerializer::new().serialize(&original);
    let reparsed = HtmlParser::new().parse(&rendered);

    let mut expected = original;
    let mut actual = reparsed;
    expected.sort_by(|a, b| a.href.cmp(&b.href));
    actual.sort_by(|a, b| a.href.cmp(&b.href));
    assert_eq!(expected, actual);
}
