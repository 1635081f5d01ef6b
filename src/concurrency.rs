//! Concurrency helper: limit the number of thread pages in flight.

use anyhow::Result;
use rayon::prelude::*;

/// Run `f` over `(index, item)` pairs with at most `limit` in flight.
/// With `limit <= 1` items run sequentially in order; otherwise they run in
/// bounded parallel chunks and completion order is unspecified.
pub fn for_each_indexed_limited<T, F>(items: &[T], limit: usize, f: F) -> Result<()>
where
    T: Sync,
    F: Sync + Fn(usize, &T) -> Result<()>,
{
    if limit <= 1 {
        for (i, item) in items.iter().enumerate() {
            f(i, item)?;
        }
        return Ok(());
    }
    let indexed: Vec<(usize, &T)> = items.iter().enumerate().collect();
    for chunk in indexed.chunks(limit) {
        chunk.par_iter().try_for_each(|(i, item)| f(*i, item))?;
    }
    Ok(())
}
