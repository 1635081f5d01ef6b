//! Thin HTTP layer: listing URL construction, page fetch, and thread-link
//! discovery. Everything here funnels into the pure reconstruction core.

use crate::config::ScrapeOptions;
use ahash::AHashSet;
use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

const BROWSE_BASE: &str = "https://www.createdebate.com/browse/debates/all";
/// Thread links come protocol-relative from the listing markup.
const THREAD_LINK_PREFIX: &str = "//www.createdebate.com/debate/show/";
/// Listing pages are requested in 96-thread offset mode.
const PAGE_OFFSET: usize = 96;

static HREF_SEL: OnceLock<Selector> = OnceLock::new();

fn href_sel() -> &'static Selector {
    HREF_SEL.get_or_init(|| Selector::parse("a[href]").expect("valid static selector"))
}

/// Blocking HTTP client with the run's timeout and user agent baked in.
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(opts.request_timeout_secs))
            .user_agent(opts.user_agent.clone())
            .build()
            .context("building HTTP client")?;
        Ok(Self { inner })
    }

    pub fn get_text(&self, url: &str) -> Result<String> {
        let resp = self
            .inner
            .get(url)
            .send()
            .with_context(|| format!("GET {url}"))?
            .error_for_status()
            .with_context(|| format!("GET {url}"))?;
        resp.text().with_context(|| format!("reading body of {url}"))
    }
}

/// Listing URL for one browse page, in the 96-offset scheme.
pub fn listing_url(opts: &ScrapeOptions, tag: &str, page_no: usize) -> String {
    format!(
        "{BROWSE_BASE}/{}/{}/{}/{}/{}/{}/{}",
        opts.sort_by,
        opts.debate_type,
        opts.time_window,
        tag,
        page_no * PAGE_OFFSET,
        PAGE_OFFSET,
        opts.state,
    )
}

/// Extract thread URLs from a listing page: protocol-relative links under the
/// debate-show path, normalized to absolute `http:` URLs. Each thread links
/// twice in the listing markup; first-seen-order dedup keeps one of each.
pub fn discover_thread_links(html: &str) -> Vec<String> {
    let page = Html::parse_document(html);
    let mut seen: AHashSet<String> = AHashSet::new();
    let mut links = Vec::new();

    for a in page.select(href_sel()) {
        let Some(href) = a.value().attr("href") else { continue };
        if !href.starts_with(THREAD_LINK_PREFIX) {
            continue;
        }
        let Ok(absolute) = Url::parse(&format!("http:{href}")) else { continue };
        let absolute = absolute.to_string();
        if seen.insert(absolute.clone()) {
            links.push(absolute);
        }
    }
    links
}
