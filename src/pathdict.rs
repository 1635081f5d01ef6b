use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Nested mapping of comment ids describing every root-to-leaf path of a
/// reply tree, filtered to argument-class nodes. Trie semantics: inserting a
/// path that shares a prefix with an existing one only extends the trie, and
/// inserting the same path twice is a no-op.
///
/// Serializes transparently as the nested JSON object the downstream corpus
/// format expects, e.g. `{"root": {"arg1": {}, "arg2": {}}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathDict(BTreeMap<String, PathDict>);

impl PathDict {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&PathDict> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &PathDict)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert one root-to-leaf path as a chain of nested mappings, sharing
    /// prefixes with paths already present.
    pub fn insert_path<S: AsRef<str>>(&mut self, path: &[S]) {
        let mut cur = self;
        for seg in path {
            cur = cur.0.entry(seg.as_ref().to_string()).or_default();
        }
    }

    /// All keys in the trie, in an unspecified but complete order. Each key
    /// appears exactly once (ids are unique within a page). Iterative walk;
    /// the trie can be arbitrarily deep.
    pub fn all_keys(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(dict) = stack.pop() {
            for (key, sub) in dict.entries() {
                out.push(key);
                stack.push(sub);
            }
        }
        out
    }
}
