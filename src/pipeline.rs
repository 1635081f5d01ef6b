use crate::assemble::parse_thread_page;
use crate::concurrency::for_each_indexed_limited;
use crate::config::ScrapeOptions;
use crate::net::{discover_thread_links, listing_url, HttpClient};
use crate::output::{DiagnosticLog, ThreadSink};
use crate::progress::make_count_progress;
use crate::util::init_tracing_once;
use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use std::fs;
use std::path::Path;

/// Scrape pipeline with builder-style configuration.
///
/// Walks listing pages, discovers thread links, fetches each thread, runs the
/// reconstruction core, and appends results to the sinks. Failures of one
/// page never abort the run; they become diagnostic entries.
#[derive(Clone)]
pub struct DebateScraper {
    pub(crate) opts: ScrapeOptions,
}

/// What a run accomplished.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: usize,
    pub threads_written: u64,
    pub failures: u64,
}

impl Default for DebateScraper {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateScraper {
    pub fn new() -> Self {
        Self { opts: ScrapeOptions::default() }
    }

    // -------- Builder methods --------

    pub fn data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.opts = self.opts.with_data_dir(dir);
        self
    }

    pub fn tag(mut self, tag: impl AsRef<str>) -> Self {
        self.opts = self.opts.with_tag(tag);
        self
    }

    pub fn page_count(mut self, pages: usize) -> Self {
        self.opts = self.opts.with_page_count(pages);
        self
    }

    pub fn debate_type(mut self, t: impl Into<String>) -> Self {
        self.opts = self.opts.with_debate_type(t);
        self
    }

    pub fn sort_by(mut self, s: impl Into<String>) -> Self {
        self.opts = self.opts.with_sort_by(s);
        self
    }

    pub fn time_window(mut self, t: impl Into<String>) -> Self {
        self.opts = self.opts.with_time_window(t);
        self
    }

    pub fn state(mut self, s: impl Into<String>) -> Self {
        self.opts = self.opts.with_state(s);
        self
    }

    /// Thread pages processed concurrently. The default of 1 preserves fetch
    /// order in the output streams; with more, append order is unspecified.
    pub fn parallelism(mut self, n: usize) -> Self {
        self.opts = self.opts.with_parallelism(n);
        self
    }

    pub fn progress(mut self, yes: bool) -> Self {
        self.opts = self.opts.with_progress(yes);
        self
    }

    pub fn progress_label(mut self, label: impl Into<String>) -> Self {
        self.opts = self.opts.with_progress_label(label);
        self
    }

    pub fn write_buffer(mut self, bytes: usize) -> Self {
        self.opts = self.opts.with_write_buffer(bytes);
        self
    }

    pub fn request_timeout(mut self, secs: u64) -> Self {
        self.opts = self.opts.with_request_timeout(secs);
        self
    }

    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.opts = self.opts.with_user_agent(ua);
        self
    }

    /// Execute the run: all listing pages, all discovered threads.
    pub fn run(self) -> Result<RunSummary> {
        init_tracing_once();
        let tag = self.opts.tag.clone().ok_or_else(|| anyhow!("tag is required"))?;
        if self.opts.page_count == 0 {
            return Err(anyhow!("page_count must be at least 1"));
        }
        if self.opts.parallelism > 1 {
            rayon::ThreadPoolBuilder::new()
                .num_threads(self.opts.parallelism)
                .build_global()
                .ok();
        }

        fs::create_dir_all(&self.opts.data_dir)?;
        let sink = Mutex::new(ThreadSink::create(&self.opts.data_dir, self.opts.write_buffer_bytes)?);
        let diag = Mutex::new(DiagnosticLog::create(&self.opts.data_dir)?);
        let client = HttpClient::new(&self.opts)?;

        for page_no in 0..self.opts.page_count {
            tracing::info!("scraping listing page {} of {}", page_no + 1, self.opts.page_count);
            let url = listing_url(&self.opts, &tag, page_no);
            let listing = match client.get_text(&url) {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "listing fetch failed, skipping page");
                    continue;
                }
            };

            let links = discover_thread_links(&listing);
            tracing::info!("{} threads identified on listing page {}", links.len(), page_no + 1);

            let label = self
                .opts
                .progress_label
                .clone()
                .unwrap_or_else(|| "Processing threads".to_string());
            let pb = if self.opts.progress {
                Some(make_count_progress(links.len() as u64, &label))
            } else {
                None
            };

            for_each_indexed_limited(&links, self.opts.parallelism, |i, link| {
                let outcome = client
                    .get_text(link)
                    .and_then(|body| Ok(parse_thread_page(&body, link, &tag)?));
                match outcome {
                    Ok(thread) => sink.lock().append(&thread)?,
                    Err(e) => {
                        tracing::debug!(url = %link, error = %e, "thread page failed");
                        diag.lock().record(page_no + 1, i + 1, &e)?;
                    }
                }
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                Ok(())
            })?;

            if let Some(pb) = pb {
                pb.finish_with_message(format!("{label} done"));
            }
        }

        let failures = diag.into_inner().finish()?;
        let threads_written = sink.into_inner().finish()?;
        tracing::info!(threads_written, failures, "run complete");
        Ok(RunSummary {
            pages: self.opts.page_count,
            threads_written,
            failures,
        })
    }
}
