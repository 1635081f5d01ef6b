use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct ScrapeOptions {
    pub data_dir: PathBuf,            // where threads.log / threads.json / debug.txt land
    pub tag: Option<String>,          // debate tag to browse; required
    pub page_count: usize,            // listing pages to walk (96-offset mode)
    pub debate_type: String,          // alltypes, ...
    pub sort_by: String,              // mostheated / mostrecent / mostarguments ...
    pub time_window: String,          // alltime, ...
    pub state: String,                // open / closed
    pub parallelism: usize,           // thread pages fetched+parsed concurrently
    pub progress: bool,               // show progress bar
    pub progress_label: Option<String>, // optional label for progress bar

    // IO / HTTP tuning
    pub write_buffer_bytes: usize,    // BufWriter capacity for the sinks
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            tag: None,
            page_count: 1,
            debate_type: "alltypes".to_string(),
            sort_by: "mostheated".to_string(),
            time_window: "alltime".to_string(),
            state: "open".to_string(),
            parallelism: 1, // sequential keeps sink order = fetch order
            progress: true,
            progress_label: None,

            write_buffer_bytes: 256 * 1024,
            request_timeout_secs: 30,
            user_agent: concat!("debate-scrape/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ScrapeOptions {
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_tag(mut self, tag: impl AsRef<str>) -> Self {
        self.tag = Some(tag.as_ref().trim().to_string());
        self
    }
    pub fn with_page_count(mut self, pages: usize) -> Self {
        self.page_count = pages;
        self
    }
    pub fn with_debate_type(mut self, t: impl Into<String>) -> Self {
        self.debate_type = t.into();
        self
    }
    pub fn with_sort_by(mut self, s: impl Into<String>) -> Self {
        self.sort_by = s.into();
        self
    }
    pub fn with_time_window(mut self, t: impl Into<String>) -> Self {
        self.time_window = t.into();
        self
    }
    pub fn with_state(mut self, s: impl Into<String>) -> Self {
        self.state = s.into();
        self
    }
    pub fn with_parallelism(mut self, n: usize) -> Self {
        self.parallelism = n.max(1);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }
    pub fn with_request_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs.max(1);
        self
    }
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }
}
