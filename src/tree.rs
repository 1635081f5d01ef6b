//! Comment-Tree Builder: turns the flat, order-dependent sequence of marked
//! `div` elements inside one side container into a [`PathDict`].

use crate::error::StructureError;
use crate::graph::{CommentGraph, ROOT_ID};
use crate::markers;
use crate::pathdict::PathDict;
use ahash::AHashSet;
use scraper::ElementRef;

/// Build the nested path mapping for one side container.
///
/// Scans descendant `div`s in document order. An argument node gets an edge
/// from its enclosing element's id (or `"root"` when the enclosure has none)
/// and becomes the attachment cursor; a threaded-reply node attaches to the
/// cursor, i.e. the nearest preceding argument node, not its literal DOM
/// parent. Everything else is ignored.
///
/// After the scan, each graph leaf's root path is filtered down to `"root"`
/// plus argument-class ids and merged into the trie. An empty or comment-free
/// container yields an empty `PathDict`; that is the caller's "no comments on
/// this side", not an error.
pub fn comment_tree(container: ElementRef<'_>) -> Result<PathDict, StructureError> {
    let mut graph = CommentGraph::new();
    let mut argument_ids: AHashSet<&str> = AHashSet::new();
    // Most recent argument node in scan order; explicit builder state.
    let mut cursor: Option<&str> = None;

    for el in container.select(markers::div()) {
        match el.value().attr("class") {
            Some(markers::ARGUMENT_CLASS) => {
                let Some(id) = el.value().attr("id") else { continue };
                let parent = enclosing_id(el).unwrap_or(ROOT_ID);
                graph.add_edge(parent, id);
                argument_ids.insert(id);
                cursor = Some(id);
            }
            Some(markers::THREADED_CLASS) => {
                let Some(id) = el.value().attr("id") else { continue };
                match cursor {
                    Some(flag) => graph.add_edge(flag, id),
                    // No preceding argument node to attach to; the leaf would
                    // be unreachable from root anyway, so fail here.
                    None => return Err(StructureError::DetachedReply { id: id.to_string() }),
                }
            }
            _ => {}
        }
    }

    if graph.is_empty() {
        return Ok(PathDict::default());
    }
    if let Some(id) = graph.find_cycle() {
        return Err(StructureError::CycleDetected { id: id.to_string() });
    }

    let mut dict = PathDict::default();
    for leaf in graph.leaves() {
        let path = graph.path_from_root(leaf)?;
        let filtered: Vec<&str> = path
            .into_iter()
            .filter(|id| *id == ROOT_ID || argument_ids.contains(id))
            .collect();
        dict.insert_path(&filtered);
    }
    Ok(dict)
}

fn enclosing_id<'a>(el: ElementRef<'a>) -> Option<&'a str> {
    el.parent()
        .and_then(ElementRef::wrap)
        .and_then(|p| p.value().attr("id"))
}
