use crate::error::StructureError;
use ahash::AHashMap;
use std::collections::VecDeque;

/// Synthetic parent id for top-level argument nodes.
pub const ROOT_ID: &str = "root";

/// Directed graph over comment ids: interned id arena plus adjacency lists.
///
/// Built per side during the scan, then projected into root-to-leaf paths.
/// Construction never assumes tree shape; cycles and unreachable leaves are
/// surfaced as [`StructureError`]s by the query methods.
#[derive(Debug, Default)]
pub struct CommentGraph {
    ids: Vec<String>,
    index: AHashMap<String, usize>,
    children: Vec<Vec<usize>>,
}

impl CommentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.ids.len()
    }

    fn intern(&mut self, id: &str) -> usize {
        if let Some(&i) = self.index.get(id) {
            return i;
        }
        let i = self.ids.len();
        self.ids.push(id.to_string());
        self.index.insert(id.to_string(), i);
        self.children.push(Vec::new());
        i
    }

    /// Add a parent -> child edge, interning both ids. Duplicate edges are
    /// collapsed (ids repeat only on malformed pages).
    pub fn add_edge(&mut self, parent: &str, child: &str) {
        let p = self.intern(parent);
        let c = self.intern(child);
        if !self.children[p].contains(&c) {
            self.children[p].push(c);
        }
    }

    pub fn id(&self, node: usize) -> &str {
        &self.ids[node]
    }

    /// Nodes with out-degree zero, in insertion order.
    pub fn leaves(&self) -> Vec<usize> {
        (0..self.ids.len())
            .filter(|&i| self.children[i].is_empty())
            .collect()
    }

    /// First node found on a back edge, if any. Iterative three-color DFS
    /// over every node, so disconnected cycles are caught too.
    pub fn find_cycle(&self) -> Option<&str> {
        const WHITE: u8 = 0;
        const GRAY: u8 = 1;
        const BLACK: u8 = 2;

        let n = self.ids.len();
        let mut color = vec![WHITE; n];
        // (node, next child offset) pairs form the explicit DFS stack.
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for start in 0..n {
            if color[start] != WHITE {
                continue;
            }
            color[start] = GRAY;
            stack.push((start, 0));
            loop {
                let Some(top) = stack.last_mut() else { break };
                let (node, next) = *top;
                if let Some(&child) = self.children[node].get(next) {
                    top.1 += 1;
                    match color[child] {
                        GRAY => return Some(self.id(child)),
                        WHITE => {
                            color[child] = GRAY;
                            stack.push((child, 0));
                        }
                        _ => {}
                    }
                } else {
                    color[node] = BLACK;
                    stack.pop();
                }
            }
        }
        None
    }

    /// The BFS path from `"root"` to `leaf`. Deterministic: adjacency lists
    /// preserve document order, so reruns on identical input yield identical
    /// paths. Fails if `"root"` was never seen or the leaf is unreachable.
    pub fn path_from_root(&self, leaf: usize) -> Result<Vec<&str>, StructureError> {
        let no_path = || StructureError::NoPathToLeaf { id: self.id(leaf).to_string() };
        let root = *self.index.get(ROOT_ID).ok_or_else(no_path)?;

        let mut pred: Vec<Option<usize>> = vec![None; self.ids.len()];
        let mut seen = vec![false; self.ids.len()];
        let mut queue = VecDeque::new();
        seen[root] = true;
        queue.push_back(root);

        while let Some(node) = queue.pop_front() {
            if node == leaf {
                let mut path = vec![self.id(leaf)];
                let mut cur = leaf;
                while let Some(p) = pred[cur] {
                    path.push(self.id(p));
                    cur = p;
                }
                path.reverse();
                return Ok(path);
            }
            for &child in &self.children[node] {
                if !seen[child] {
                    seen[child] = true;
                    pred[child] = Some(node);
                    queue.push_back(child);
                }
            }
        }
        Err(no_path())
    }
}
