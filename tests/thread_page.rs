#[path = "common/mod.rs"]
mod common;

use common::*;
use debate_scrape::{parse_thread_page, PageError};
use serde_json::json;

const URL: &str = "http://www.createdebate.com/debate/show/Is_testing_worth_it";

#[test]
fn assembles_one_thread_from_a_two_sided_page() {
    let thread = parse_thread_page(&two_sided_page(), URL, "testing").unwrap();

    assert_eq!(thread.title, "Is testing worth it?");
    assert_eq!(thread.author, "opuser");
    assert_eq!(thread.tag, "testing");
    assert_eq!(thread.url, URL);

    // Threaded reply argT1 attaches under arg1 but never becomes a path
    // segment or a comment.
    assert_eq!(
        serde_json::to_value(&thread.left_meta).unwrap(),
        json!({"root": {"arg1": {}}})
    );
    assert_eq!(
        serde_json::to_value(&thread.right_meta).unwrap(),
        json!({"root": {"arg2": {}}})
    );

    let ids: Vec<&str> = thread.comments.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["arg1", "arg2"]);
    assert_eq!(thread.comments["arg1"].author, "alice");
    assert_eq!(thread.comments["arg2"].polarity, "Against The Motion");
}

#[test]
fn missing_title_heading_is_a_page_error() {
    let html = debate_page("", &side("debateSideBox sideL", ""), "");
    match parse_thread_page(&html, URL, "testing") {
        Err(PageError::MissingTitle) => {}
        other => panic!("expected MissingTitle, got {other:?}"),
    }
}

#[test]
fn combined_container_is_used_when_sides_are_absent() {
    let combined = side(
        "bothsidesbox",
        &format!("{}\n{}", arg_box("arg1", "alice", ""), arg_box("arg2", "bob", "")),
    );
    let bodies = format!(
        "{}\n{}",
        arg_body("1", "one", &meta_line("2020-01-01", "Yes")),
        arg_body("2", "two", &meta_line("2020-01-02", "No")),
    );
    let html = debate_page(&title_heading("No sides"), &combined, &bodies);

    let thread = parse_thread_page(&html, URL, "testing").unwrap();
    assert_eq!(
        serde_json::to_value(&thread.left_meta).unwrap(),
        json!({"root": {"arg1": {}, "arg2": {}}})
    );
    assert!(thread.right_meta.is_empty());

    // Comments match exactly the non-root keys of the combined tree.
    let ids: Vec<&str> = thread.comments.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["arg1", "arg2"]);
}

#[test]
fn structural_failure_on_a_side_retries_the_combined_container() {
    // Left side opens with a detached threaded reply (structure error); the
    // combined container holds the recoverable layout.
    let sides = format!(
        "{}\n{}",
        side("debateSideBox sideL", &threaded("argT0")),
        side("bothsidesbox", &arg_box("arg1", "alice", "")),
    );
    let bodies = arg_body("1", "one", &meta_line("2020-01-01", "Yes"));
    let html = debate_page(&title_heading("Fallback"), &sides, &bodies);

    let thread = parse_thread_page(&html, URL, "testing").unwrap();
    assert_eq!(
        serde_json::to_value(&thread.left_meta).unwrap(),
        json!({"root": {"arg1": {}}})
    );
    assert!(thread.right_meta.is_empty());
    assert_eq!(thread.comments.len(), 1);
}

#[test]
fn structural_failure_without_fallback_escalates_to_page_error() {
    let sides = side("debateSideBox sideL", &threaded("argT0"));
    let html = debate_page(&title_heading("Broken"), &sides, "");

    match parse_thread_page(&html, URL, "testing") {
        Err(PageError::Structure(_)) => {}
        other => panic!("expected Structure error, got {other:?}"),
    }
}

#[test]
fn page_without_any_container_yields_an_empty_thread() {
    let html = debate_page(&title_heading("Quiet"), "", "");
    let thread = parse_thread_page(&html, URL, "testing").unwrap();
    assert!(thread.left_meta.is_empty());
    assert!(thread.right_meta.is_empty());
    assert!(thread.comments.is_empty());
}

#[test]
fn missing_comment_body_aborts_the_page() {
    // arg2 has no companion body element, so extraction for the page fails.
    let sides = side(
        "debateSideBox sideL",
        &format!("{}\n{}", arg_box("arg1", "alice", ""), arg_box("arg2", "bob", "")),
    );
    let bodies = arg_body("1", "one", &meta_line("2020-01-01", "Yes"));
    let html = debate_page(&title_heading("Half"), &sides, &bodies);

    match parse_thread_page(&html, URL, "testing") {
        Err(PageError::Extraction(_)) => {}
        other => panic!("expected Extraction error, got {other:?}"),
    }
}
