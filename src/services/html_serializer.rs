//! Bookmark-file serializer for Marcador.
//!
//! Turns a flat bookmark list back into a Netscape-style export. Each
//! record's folder path is split on `" > "` and woven into a folder tree,
//! which is then rendered depth-first with child folders in lexicographic
//! order. The tree lives only for the duration of one `serialize` call and
//! carries no parent links; rendering only ever walks root-down.

use std::collections::BTreeMap;

use crate::types::bookmark::{split_folder_path, Bookmark};

const DOCUMENT_PREAMBLE: &str = "\
<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Marcadores</H1>
<DL><p>
";

const DOCUMENT_CLOSING: &str = "</DL><p>\n</DL><p>\n";

const INDENT: &str = "    ";

/// One folder of the rendering tree.
///
/// Children are keyed by segment name; the `BTreeMap` iteration order is the
/// lexicographic output order, so no re-sort is needed at render time.
#[derive(Debug, Default)]
struct FolderNode {
    bookmarks: Vec<Bookmark>,
    children: BTreeMap<String, FolderNode>,
}

impl FolderNode {
    /// Walks the given segments from this node, creating folders on first
    /// sight. Re-encountering a segment reuses the existing child.
    fn descend(&mut self, segments: &[&str]) -> &mut FolderNode {
        let mut node = self;
        for segment in segments {
            node = node.children.entry((*segment).to_string()).or_default();
        }
        node
    }
}

/// Stateless serializer producing Netscape-style bookmark exports.
#[derive(Debug, Default)]
pub struct HtmlSerializer;

impl HtmlSerializer {
    pub fn new() -> Self {
        Self
    }

    /// Serializes the records into a complete export document.
    ///
    /// Bookmarks attached to a folder render in insertion order; sibling
    /// folders render in lexicographic name order. The root sentinel is
    /// never emitted as a folder header.
    pub fn serialize(&self, bookmarks: &[Bookmark]) -> String {
        let mut root = FolderNode::default();
        for bookmark in bookmarks {
            let segments = split_folder_path(&bookmark.folder);
            root.descend(&segments).bookmarks.push(bookmark.clone());
        }

        let mut output = String::from(DOCUMENT_PREAMBLE);
        Self::render(&root, 1, &mut output);
        output.push_str(DOCUMENT_CLOSING);
        output
    }

    fn render(node: &FolderNode, depth: usize, output: &mut String) {
        let indent = INDENT.repeat(depth);

        for bookmark in &node.bookmarks {
            output.push_str(&indent);
            output.push_str(&format!("<DT><A HREF=\"{}\"", bookmark.href));
            if let Some(icon) = &bookmark.icon {
                output.push_str(&format!(" ICON=\"{}\"", icon));
            }
            if bookmark.add_date != 0 {
                output.push_str(&format!(" ADD_DATE=\"{}\"", bookmark.add_date));
            }
            output.push_str(&format!(">{}</A>\n", bookmark.title));
        }

        for (name, child) in &node.children {
            output.push_str(&format!("{}<DT><H3>{}</H3>\n", indent, name));
            output.push_str(&format!("{}<DL><p>\n", indent));
            Self::render(child, depth + 1, output);
            output.push_str(&format!("{}</DL><p>\n", indent));
        }
    }
}
