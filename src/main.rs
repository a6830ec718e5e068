//! Marcador — organizer for Netscape-style browser bookmark exports.
//!
//! Entry point: given a bookmark file path as first argument, loads it and
//! prints a summary. With no arguments, runs a console demo over an embedded
//! sample export.

use marcador::managers::bookmark_manager::BookmarkManager;
use marcador::services::bookmark_store::{BookmarkStore, BookmarkStoreTrait};
use marcador::services::html_parser::HtmlParser;
use marcador::services::html_serializer::HtmlSerializer;
use marcador::types::search::SearchOptions;

const SAMPLE_EXPORT: &str = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=UTF-8">
<TITLE>Bookmarks</TITLE>
<H1>Marcadores</H1>
<DL><p>
    <DT><A HREF="https://example.com/start" ADD_DATE="1700000001">Start page</A>
    <DT><H3>Manga</H3>
    <DL><p>
        <DT><A HREF="https://olympusbiblioteca.com/capitulo/10/comic-naruto" ADD_DATE="1700000002">Naruto ch10</A>
        <DT><A HREF="https://olympusbiblioteca.com/capitulo/11/comic-naruto" ADD_DATE="1700000003">Naruto ch11</A>
        <DT><A HREF="https://mangafan.example/bleach/1" ADD_DATE="1700000004">Bleach ch1</A>
    </DL><p>
    <DT><H3>Noticias</H3>
    <DL><p>
        <DT><A HREF="https://news.example/tech">Tech news</A>
    </DL><p>
</DL><p>
</DL><p>
"#;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Some(path) = std::env::args().nth(1) {
        organize_file(&path).await;
        return;
    }

    println!();
    println!("Marcador v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_parser();
    demo_store();
    demo_search();
    demo_domain_ordering();
    demo_serializer();

    println!();
    println!("  All components demonstrated.");
}

/// Loads a real bookmark file and prints a short report.
async fn organize_file(path: &str) {
    let mut manager = BookmarkManager::new(path);

    match manager.read_bookmarks().await {
        Ok(count) => println!("Loaded {} bookmarks from {}", count, path),
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }

    let ordered = manager.order_by_domain();
    println!("Reordered {} bookmarks by domain frequency", ordered.len());
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────");
}

fn demo_parser() {
    section("HTML Parser");

    let parser = HtmlParser::new();
    let bookmarks = parser.parse(SAMPLE_EXPORT);
    println!("  Parsed {} bookmarks", bookmarks.len());
    for bookmark in &bookmarks {
        println!("    [{}] {}", bookmark.folder, bookmark.title);
    }
    println!("  ✓ Parser OK");
    println!();
}

fn demo_store() {
    section("Bookmark Store");

    let parser = HtmlParser::new();
    let mut store = BookmarkStore::new();
    let bookmarks = parser.parse(SAMPLE_EXPORT);
    store.add(bookmarks.clone());
    store.add(bookmarks); // duplicates collapse
    println!("  Stored {} unique bookmarks", store.len());
    println!("  ✓ Store + dedup OK");
    println!();
}

fn demo_search() {
    section("Search");

    let parser = HtmlParser::new();
    let mut store = BookmarkStore::new();
    store.add(parser.parse(SAMPLE_EXPORT));

    let naruto = store.find_by(&SearchOptions::keywords(["Naruto"]));
    println!("  'Naruto' matched {} bookmarks", naruto.len());

    let chapters = store.find_by(&SearchOptions {
        include_words: vec!["capitulo".into()],
        exclude_words: vec!["ch11".into()],
        ..SearchOptions::default()
    });
    println!(
        "  'capitulo' minus 'ch11' matched {} bookmarks",
        chapters.len()
    );
    println!("  ✓ Search OK");
    println!();
}

fn demo_domain_ordering() {
    section("Domain Ordering");

    let parser = HtmlParser::new();
    let mut store = BookmarkStore::new();
    store.add(parser.parse(SAMPLE_EXPORT));

    let ordered = store.order_by_domain();
    for bookmark in &ordered {
        println!("    [{}] {}", bookmark.folder, bookmark.href);
    }
    println!("  ✓ Domain ordering OK");
    println!();
}

fn demo_serializer() {
    section("HTML Serializer");

    let parser = HtmlParser::new();
    let serializer = HtmlSerializer::new();
    let bookmarks = parser.parse(SAMPLE_EXPORT);
    let rendered = serializer.serialize(&bookmarks);
    let reparsed = parser.parse(&rendered);
    println!(
        "  Serialized {} bookmarks into {} bytes; reparse yields {}",
        bookmarks.len(),
        rendered.len(),
        reparsed.len()
    );
    println!("  ✓ Serializer round trip OK");
    println!();
}
