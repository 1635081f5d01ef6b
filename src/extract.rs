//! Field Extractor: recovers author, body, timestamp and polarity for one
//! comment id from an already-parsed page.

use crate::error::ExtractionError;
use crate::markers;
use crate::model::Comment;
use crate::tokenize::polarity_time;
use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;

/// Line index of the body text within the companion element's raw markup.
const BODY_LINE: usize = 2;
/// Line index of the trailing metadata line fed to the tokenizer.
const META_LINE: usize = 3;

static TAG_RE: OnceLock<Regex> = OnceLock::new();
static WS_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid tag regex"))
}

fn ws_re() -> &'static Regex {
    WS_RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"))
}

/// Per-page extractor. Holds only a borrow of the parsed page; one instance
/// serves every comment id on it.
pub struct FieldExtractor<'a> {
    page: &'a Html,
}

impl<'a> FieldExtractor<'a> {
    pub fn new(page: &'a Html) -> Self {
        Self { page }
    }

    /// Extract one comment. Author and body are mandatory; timestamp and
    /// polarity degrade to sentinels when the metadata line is missing or
    /// malformed.
    pub fn comment(&self, cid: &str) -> Result<Comment, ExtractionError> {
        let author = self.author(cid)?;
        let raw = self.body_markup(cid)?;

        let lines: Vec<&str> = raw.trim().lines().collect();
        let body_line = lines
            .get(BODY_LINE)
            .ok_or_else(|| ExtractionError::BodyNotFound { id: cid.to_string() })?;
        let body = clean_body(body_line);

        let (timestamp, polarity) = match lines.get(META_LINE) {
            Some(meta) => polarity_time(meta),
            None => polarity_time(""),
        };

        Ok(Comment { author, body, timestamp, polarity })
    }

    /// Author identifier: last path segment of the first outgoing link inside
    /// the comment's element.
    fn author(&self, cid: &str) -> Result<String, ExtractionError> {
        let el = markers::div_by_id(self.page, cid)
            .ok_or_else(|| ExtractionError::CommentNotFound { id: cid.to_string() })?;
        let href = el
            .select(markers::anchor())
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or_else(|| ExtractionError::AuthorNotFound { id: cid.to_string() })?;
        Ok(author_from_href(href))
    }

    /// Raw markup of the companion body element, located via the fixed
    /// prefix substitution on the comment id.
    fn body_markup(&self, cid: &str) -> Result<String, ExtractionError> {
        let missing = || ExtractionError::BodyNotFound { id: cid.to_string() };
        let suffix = cid.get(markers::COMMENT_ID_PREFIX_LEN..).ok_or_else(missing)?;
        let body_id = format!("{}{}", markers::BODY_ID_PREFIX, suffix);
        let el = markers::div_by_id(self.page, &body_id).ok_or_else(missing)?;
        Ok(el.html())
    }
}

/// Last path segment of an author link target.
pub fn author_from_href(href: &str) -> String {
    href.rsplit('/').next().unwrap_or(href).to_string()
}

/// Strip markup tags, then collapse runs of whitespace to single spaces.
fn clean_body(line: &str) -> String {
    let stripped = tag_re().replace_all(line, " ");
    ws_re().replace_all(&stripped, " ").trim().to_string()
}
