//! Synthetic debate-page HTML fixtures. The markup mirrors the fixed layout
//! the scraper understands: side containers, argument boxes, threaded
//! replies, companion body elements, and the title/author markers.

#![allow(dead_code)]

pub const PROFILE_BASE: &str = "http://www.createdebate.com/user/viewprofile";

/// First outgoing link inside a comment box; its last path segment is the
/// author identifier.
pub fn author_link(user: &str) -> String {
    format!(r#"<a href="{PROFILE_BASE}/{user}">{user}</a>"#)
}

/// A top-level comment box. `inner` nests further markup (child argument
/// boxes, threaded replies) inside this element.
pub fn arg_box(id: &str, user: &str, inner: &str) -> String {
    format!(
        r#"<div class="argBox argument" id="{id}">{}{inner}</div>"#,
        author_link(user)
    )
}

/// A nested threaded reply; attaches to the nearest preceding argument box.
pub fn threaded(id: &str) -> String {
    format!(r#"<div class="arg-threaded" id="{id}"></div>"#)
}

/// Companion body element for comment id `arg{suffix}`. Line 2 carries the
/// body, line 3 the metadata fed to the tokenizer.
pub fn arg_body(suffix: &str, body: &str, meta: &str) -> String {
    format!("<div id=\"argBody{suffix}\">\n<p>2 points</p>\n{body}\n{meta}\n</div>")
}

/// Metadata line with the timestamp token at offset 3 (attribute-wrapped)
/// and the polarity phrase between the `Side:` marker and the tail token.
pub fn meta_line(date: &str, polarity: &str) -> String {
    format!(r#"pts by user datetime="{date}" ago Side: {polarity} end"#)
}

pub fn side(marker: &str, inner: &str) -> String {
    format!("<div class=\"{marker}\">\n{inner}\n</div>")
}

pub fn title_heading(title: &str) -> String {
    format!(r#"<h1 class="debateTitle">{title}</h1>"#)
}

/// Full page: title heading, thread-author link, containers, body elements.
pub fn debate_page(head: &str, containers: &str, bodies: &str) -> String {
    format!(
        "<html><head></head><body>\n{head}\n<a class=\"points\" href=\"{PROFILE_BASE}/opuser\">op</a>\n{containers}\n{bodies}\n</body></html>"
    )
}

/// A page with one left-side argument box `arg1` (with threaded reply
/// `argT1`) and one right-side argument box `arg2`, bodies included.
pub fn two_sided_page() -> String {
    let left = side(
        "debateSideBox sideL",
        &format!("{}\n{}", arg_box("arg1", "alice", ""), threaded("argT1")),
    );
    let right = side("debateSideBox sideR", &arg_box("arg2", "bob", ""));
    let bodies = format!(
        "{}\n{}",
        arg_body(
            "1",
            "I agree with <b>everything</b> here.",
            &meta_line("2020-01-02", "For The Motion"),
        ),
        arg_body(
            "2",
            "Hard disagree.",
            &meta_line("2020-01-03", "Against The Motion"),
        ),
    );
    debate_page(
        &title_heading("Is testing worth it?"),
        &format!("{left}\n{right}"),
        &bodies,
    )
}
