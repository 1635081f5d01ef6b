//! Thread Assembler: walks side `PathDict`s, extracts every comment, and
//! combines the result with the page-level fields into one [`Thread`].

use crate::error::{ExtractionError, PageError};
use crate::extract::{author_from_href, FieldExtractor};
use crate::graph::ROOT_ID;
use crate::markers;
use crate::model::{Comment, Thread};
use crate::pathdict::PathDict;
use crate::tree::comment_tree;
use scraper::Html;
use std::collections::BTreeMap;

/// Reconstruct one fully populated thread from a fetched page.
///
/// Pure: no I/O, no shared state; safe to call for distinct pages in
/// parallel. Fails with a [`PageError`] when the page has no title heading
/// (private or removed post), no author link, or its comment structure cannot
/// be recovered even via the combined fallback container.
pub fn parse_thread_page(html: &str, url: &str, tag: &str) -> Result<Thread, PageError> {
    let page = Html::parse_document(html);

    let title = page
        .select(markers::title_heading())
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .ok_or(PageError::MissingTitle)?;

    let author = page
        .select(markers::author_link())
        .next()
        .and_then(|a| a.value().attr("href"))
        .map(author_from_href)
        .ok_or(PageError::MissingAuthor)?;

    let mut thread = Thread::new(title, author, tag.to_string(), url.to_string());
    let (left, right) = reconstruct_sides(&page)?;
    thread.left_meta = left;
    thread.right_meta = right;

    let extractor = FieldExtractor::new(&page);
    assemble_comments(&extractor, &thread.left_meta, &mut thread.comments)?;
    assemble_comments(&extractor, &thread.right_meta, &mut thread.comments)?;

    Ok(thread)
}

/// Build both side trees, falling back to the combined container when the
/// page has no side split or when a side fails structurally. The combined
/// tree is recorded under the left slot; the right slot stays empty.
fn reconstruct_sides(page: &Html) -> Result<(PathDict, PathDict), PageError> {
    let left_c = markers::side_container(page, markers::SIDE_LEFT);
    let right_c = markers::side_container(page, markers::SIDE_RIGHT);

    if left_c.is_none() && right_c.is_none() {
        // No side split at all. A missing combined container means a page
        // with no comments, not an error.
        let combined = match markers::side_container(page, markers::SIDE_COMBINED) {
            Some(c) => comment_tree(c)?,
            None => PathDict::default(),
        };
        return Ok((combined, PathDict::default()));
    }

    let left = left_c.map(comment_tree).transpose();
    let right = right_c.map(comment_tree).transpose();
    match (left, right) {
        (Ok(l), Ok(r)) => Ok((l.unwrap_or_default(), r.unwrap_or_default())),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "side reconstruction failed, retrying combined container");
            match markers::side_container(page, markers::SIDE_COMBINED) {
                Some(c) => Ok((comment_tree(c)?, PathDict::default())),
                None => Err(e.into()),
            }
        }
    }
}

/// Visit every key of the trie exactly once with an explicit stack, skipping
/// only the literal `"root"` key, and insert one extracted comment per id.
pub fn assemble_comments(
    extractor: &FieldExtractor<'_>,
    dict: &PathDict,
    comments: &mut BTreeMap<String, Comment>,
) -> Result<(), ExtractionError> {
    let mut stack: Vec<&PathDict> = vec![dict];
    while let Some(d) = stack.pop() {
        for (key, sub) in d.entries() {
            if key != ROOT_ID {
                comments.insert(key.to_string(), extractor.comment(key)?);
            }
            stack.push(sub);
        }
    }
    Ok(())
}
