//! Fixed structural markers of the debate page layout, plus lazily built
//! selectors for them. No other semantic markup is consulted anywhere.

use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

/// Exact class attribute of a top-level comment box.
pub const ARGUMENT_CLASS: &str = "argBox argument";
/// Exact class attribute of a nested threaded reply.
pub const THREADED_CLASS: &str = "arg-threaded";

/// Side container markers, and the combined container used as fallback.
pub const SIDE_LEFT: &str = "debateSideBox sideL";
pub const SIDE_RIGHT: &str = "debateSideBox sideR";
pub const SIDE_COMBINED: &str = "bothsidesbox";

/// Companion body elements carry the comment id with this prefix swapped in.
pub const BODY_ID_PREFIX: &str = "argBody";
/// Length of the prefix stripped from a comment id before the swap.
pub const COMMENT_ID_PREFIX_LEN: usize = 3;

static DIV: OnceLock<Selector> = OnceLock::new();
static ANCHOR: OnceLock<Selector> = OnceLock::new();
static TITLE: OnceLock<Selector> = OnceLock::new();
static AUTHOR_LINK: OnceLock<Selector> = OnceLock::new();
static SIDE_LEFT_SEL: OnceLock<Selector> = OnceLock::new();
static SIDE_RIGHT_SEL: OnceLock<Selector> = OnceLock::new();
static SIDE_COMBINED_SEL: OnceLock<Selector> = OnceLock::new();

fn sel(s: &str) -> Selector {
    Selector::parse(s).expect("valid static selector")
}

pub fn div() -> &'static Selector {
    DIV.get_or_init(|| sel("div"))
}

pub fn anchor() -> &'static Selector {
    ANCHOR.get_or_init(|| sel("a"))
}

/// The title heading; its absence signals a private or removed post.
pub fn title_heading() -> &'static Selector {
    TITLE.get_or_init(|| sel("h1.debateTitle"))
}

/// Author links, shared by the thread author and comment authors.
pub fn author_link() -> &'static Selector {
    AUTHOR_LINK.get_or_init(|| sel("a.points"))
}

fn side_selector(marker: &str) -> &'static Selector {
    match marker {
        SIDE_LEFT => SIDE_LEFT_SEL.get_or_init(|| sel("div.debateSideBox.sideL")),
        SIDE_RIGHT => SIDE_RIGHT_SEL.get_or_init(|| sel("div.debateSideBox.sideR")),
        _ => SIDE_COMBINED_SEL.get_or_init(|| sel("div.bothsidesbox")),
    }
}

/// First container matching a side marker, if the page has one.
pub fn side_container<'a>(page: &'a Html, marker: &str) -> Option<ElementRef<'a>> {
    page.select(side_selector(marker)).next()
}

/// Linear scan for a `div` by id. The layout gives every comment and body
/// element a unique id, so the first hit is the only hit.
pub fn div_by_id<'a>(page: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    page.select(div()).find(|el| el.value().attr("id") == Some(id))
}
