//! Output sinks: the append-only NDJSON record stream (`threads.log`), the
//! streamed NDJSON document (`threads.json`), the end-of-run indented array
//! (`threads2.json`), and the page-failure diagnostic stream (`debug.txt`).

use crate::model::Thread;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const THREAD_LOG_FILE: &str = "threads.log";
pub const JSON_STREAM_FILE: &str = "threads.json";
pub const JSON_ARRAY_FILE: &str = "threads2.json";
pub const DIAGNOSTIC_FILE: &str = "debug.txt";

/// Writes every successfully reconstructed thread to the record stream and
/// the NDJSON stream as it arrives, and collects values for the final array
/// document. One sink per run; wrap in a mutex for parallel appends.
pub struct ThreadSink {
    log: BufWriter<File>,
    json: BufWriter<File>,
    array_path: PathBuf,
    collected: Vec<Value>,
    written: u64,
}

impl ThreadSink {
    pub fn create(data_dir: &Path, write_buf: usize) -> Result<Self> {
        let log_path = data_dir.join(THREAD_LOG_FILE);
        let json_path = data_dir.join(JSON_STREAM_FILE);
        let log = BufWriter::with_capacity(
            write_buf,
            File::create(&log_path).with_context(|| format!("create {}", log_path.display()))?,
        );
        let json = BufWriter::with_capacity(
            write_buf,
            File::create(&json_path).with_context(|| format!("create {}", json_path.display()))?,
        );
        Ok(Self {
            log,
            json,
            array_path: data_dir.join(JSON_ARRAY_FILE),
            collected: Vec::new(),
            written: 0,
        })
    }

    /// Append one thread to both streams and retain it for the array document.
    pub fn append(&mut self, thread: &Thread) -> Result<()> {
        let value = serde_json::to_value(thread)?;
        let line = serde_json::to_string(&value)?;
        self.log.write_all(line.as_bytes())?;
        self.log.write_all(b"\n")?;
        self.json.write_all(line.as_bytes())?;
        self.json.write_all(b"\n")?;
        self.collected.push(value);
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush both streams and write the indented array document.
    pub fn finish(mut self) -> Result<u64> {
        self.log.flush()?;
        self.json.flush()?;
        let file = File::create(&self.array_path)
            .with_context(|| format!("create {}", self.array_path.display()))?;
        let mut w = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut w, &self.collected)?;
        w.flush()?;
        Ok(self.written)
    }
}

/// Read a thread record stream back into memory. Empty lines are skipped.
/// Together with [`ThreadSink::append`] this round-trips threads exactly.
pub fn read_threads_log(path: &Path) -> Result<Vec<Thread>> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let r = BufReader::new(f);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        out.push(serde_json::from_str(&line).with_context(|| "malformed thread record")?);
    }
    Ok(out)
}

/// One entry per page-level failure, identifying the failure reason and the
/// page's position in the run (1-based listing page and post numbers).
pub struct DiagnosticLog {
    w: BufWriter<File>,
    entries: u64,
}

impl DiagnosticLog {
    pub fn create(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(DIAGNOSTIC_FILE);
        let w = BufWriter::new(
            File::create(&path).with_context(|| format!("create {}", path.display()))?,
        );
        Ok(Self { w, entries: 0 })
    }

    pub fn record(&mut self, page_no: usize, post_no: usize, error: &dyn std::fmt::Display) -> Result<()> {
        writeln!(self.w, "{error}")?;
        writeln!(self.w, "[Occurred on page {page_no} - post {post_no}]")?;
        writeln!(self.w)?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> u64 {
        self.entries
    }

    pub fn finish(mut self) -> Result<u64> {
        self.w.flush()?;
        Ok(self.entries)
    }
}
