mod config;
mod error;
mod graph;
mod markers;
mod pathdict;

mod extract;
mod tokenize;
mod tree;

mod assemble;
mod model;

mod concurrency;
mod net;
mod output;
mod pipeline;
mod progress;
mod util;

pub use crate::config::ScrapeOptions;
pub use crate::pipeline::{DebateScraper, RunSummary};

pub use crate::error::{ExtractionError, PageError, StructureError};
pub use crate::model::{Comment, Thread, NOT_AVAILABLE};
pub use crate::pathdict::PathDict;

// Reconstruction core, exposed for direct use on pre-fetched pages.
pub use crate::assemble::{assemble_comments, parse_thread_page};
pub use crate::extract::FieldExtractor;
pub use crate::graph::{CommentGraph, ROOT_ID};
pub use crate::markers::{side_container, SIDE_COMBINED, SIDE_LEFT, SIDE_RIGHT};
pub use crate::tokenize::polarity_time;
pub use crate::tree::comment_tree;

// Thin wrappers around the core.
pub use crate::net::{discover_thread_links, listing_url};
pub use crate::output::{read_threads_log, DiagnosticLog, ThreadSink};
pub use crate::output::{DIAGNOSTIC_FILE, JSON_ARRAY_FILE, JSON_STREAM_FILE, THREAD_LOG_FILE};

// Expose multiprogress hook for embedding applications.
pub use crate::progress::set_global_multiprogress;
