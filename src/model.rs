use crate::pathdict::PathDict;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel for fields the metadata line did not yield.
pub const NOT_AVAILABLE: &str = "Not Available";

/// One harvested comment. Created once by extraction, immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub body: String,
    /// Free-text timestamp from the page, or `NOT_AVAILABLE`.
    pub timestamp: String,
    /// Free-text stance label, or `NOT_AVAILABLE`.
    pub polarity: String,
}

/// One fully reconstructed debate thread.
///
/// `comments` holds every id that appears in `left_meta` or `right_meta`
/// (excluding the synthetic `"root"` key). A `BTreeMap` keeps serialization
/// deterministic, so identical pages produce identical records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub title: String,
    pub author: String,
    pub tag: String,
    pub url: String,
    pub left_meta: PathDict,
    pub right_meta: PathDict,
    pub comments: BTreeMap<String, Comment>,
}

impl Thread {
    pub fn new(title: String, author: String, tag: String, url: String) -> Self {
        Self {
            title,
            author,
            tag,
            url,
            left_meta: PathDict::default(),
            right_meta: PathDict::default(),
            comments: BTreeMap::new(),
        }
    }
}
