//! Bookmark-file parser for Marcador.
//!
//! Reads a Netscape-style bookmark export line by line and produces a flat
//! list of [`Bookmark`] records, tracking folder nesting with a stack. This
//! is a best-effort micro-parser, not a markup parser: it builds no DOM,
//! tolerates unbalanced nesting, and silently drops whatever it cannot read.

use std::sync::OnceLock;

use regex::Regex;

use crate::types::bookmark::{Bookmark, FOLDER_SEPARATOR, ROOT_FOLDER};

fn folder_header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<H3[^>]*>([^<]+)</H3>").expect("valid pattern"))
}

fn anchor_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<A\s+([^>]+)>([^<]*)</A>").expect("valid pattern"))
}

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?i)HREF="([^"]+)""#).expect("valid pattern"))
}

fn icon_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?i)ICON="([^"]+)""#).expect("valid pattern"))
}

fn add_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"(?i)ADD_DATE="([^"]+)""#).expect("valid pattern"))
}

/// Stateless parser for Netscape-style bookmark exports.
#[derive(Debug, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses an export into a flat bookmark list.
    ///
    /// Folder headers push onto a name stack, `</DL>` markers pop it, and
    /// anchor lines become records tagged with the current stack joined by
    /// `" > "`. Lines matching none of the patterns are ignored; an anchor
    /// without an `HREF` attribute is not a bookmark and is skipped.
    pub fn parse(&self, content: &str) -> Vec<Bookmark> {
        let mut bookmarks = Vec::new();
        let mut folder_stack: Vec<String> = Vec::new();

        for line in content.lines() {
            let line = line.trim();

            if let Some(captures) = folder_header_pattern().captures(line) {
                let folder_name = captures[1].trim();

                // The root sentinel is the document container, never a segment.
                if folder_name != ROOT_FOLDER {
                    folder_stack.push(folder_name.to_string());
                }
                continue;
            }

            if line.contains("</DL>") {
                // Unbalanced closes in malformed input are tolerated.
                folder_stack.pop();
                continue;
            }

            if let Some(captures) = anchor_pattern().captures(line) {
                let attributes = &captures[1];
                let title = captures[2].trim().to_string();

                let Some(href) = href_pattern()
                    .captures(attributes)
                    .map(|c| c[1].trim().to_string())
                else {
                    continue;
                };

                let icon = icon_pattern()
                    .captures(attributes)
                    .map(|c| c[1].trim().to_string());

                let add_date = add_date_pattern()
                    .captures(attributes)
                    .and_then(|c| c[1].trim().parse::<i64>().ok())
                    .unwrap_or(0);

                let folder = if folder_stack.is_empty() {
                    ROOT_FOLDER.to_string()
                } else {
                    folder_stack.join(FOLDER_SEPARATOR)
                };

                bookmarks.push(Bookmark {
                    title,
                    href,
                    folder,
                    icon,
                    add_date,
                });
            }
        }

        bookmarks
    }
}
