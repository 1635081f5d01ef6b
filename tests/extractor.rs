#[path = "common/mod.rs"]
mod common;

use common::*;
use debate_scrape::{ExtractionError, FieldExtractor, NOT_AVAILABLE};
use scraper::Html;

#[test]
fn extracts_author_body_timestamp_and_polarity() {
    let page = Html::parse_document(&two_sided_page());
    let extractor = FieldExtractor::new(&page);

    let c1 = extractor.comment("arg1").unwrap();
    assert_eq!(c1.author, "alice");
    assert_eq!(c1.body, "I agree with everything here.");
    assert_eq!(c1.timestamp, "2020-01-02");
    assert_eq!(c1.polarity, "For The Motion");

    let c2 = extractor.comment("arg2").unwrap();
    assert_eq!(c2.author, "bob");
    assert_eq!(c2.body, "Hard disagree.");
    assert_eq!(c2.timestamp, "2020-01-03");
    assert_eq!(c2.polarity, "Against The Motion");
}

#[test]
fn inline_markup_is_stripped_and_whitespace_collapsed() {
    let body = arg_body(
        "1",
        "Lots   of <i>spacing</i> and <a href=\"x\">links</a> inside.",
        &meta_line("2020-05-05", "Neutral"),
    );
    let html = debate_page(
        &title_heading("t"),
        &arg_box("arg1", "alice", ""),
        &body,
    );
    let page = Html::parse_document(&html);

    let c = FieldExtractor::new(&page).comment("arg1").unwrap();
    assert_eq!(c.body, "Lots of spacing and links inside.");
}

#[test]
fn missing_body_element_is_an_extraction_error() {
    let html = debate_page(&title_heading("t"), &arg_box("arg1", "alice", ""), "");
    let page = Html::parse_document(&html);

    match FieldExtractor::new(&page).comment("arg1") {
        Err(ExtractionError::BodyNotFound { id }) => assert_eq!(id, "arg1"),
        other => panic!("expected BodyNotFound, got {other:?}"),
    }
}

#[test]
fn missing_author_link_is_an_extraction_error() {
    let boxes = r#"<div class="argBox argument" id="arg1">no links here</div>"#;
    let bodies = arg_body("1", "body", &meta_line("2020-01-01", "Yes"));
    let html = debate_page(&title_heading("t"), boxes, &bodies);
    let page = Html::parse_document(&html);

    match FieldExtractor::new(&page).comment("arg1") {
        Err(ExtractionError::AuthorNotFound { id }) => assert_eq!(id, "arg1"),
        other => panic!("expected AuthorNotFound, got {other:?}"),
    }
}

#[test]
fn unknown_comment_id_is_an_extraction_error() {
    let page = Html::parse_document(&two_sided_page());
    match FieldExtractor::new(&page).comment("arg999") {
        Err(ExtractionError::CommentNotFound { id }) => assert_eq!(id, "arg999"),
        other => panic!("expected CommentNotFound, got {other:?}"),
    }
}

#[test]
fn missing_metadata_line_degrades_to_sentinels() {
    // Companion element with a body line but nothing after it; the line at
    // the metadata offset is the closing tag, which has no marker token.
    let body = "<div id=\"argBody1\">\n<p>2 points</p>\nJust the body.\n</div>";
    let html = debate_page(&title_heading("t"), &arg_box("arg1", "alice", ""), body);
    let page = Html::parse_document(&html);

    let c = FieldExtractor::new(&page).comment("arg1").unwrap();
    assert_eq!(c.body, "Just the body.");
    assert_eq!(c.timestamp, NOT_AVAILABLE);
    assert_eq!(c.polarity, NOT_AVAILABLE);
}
