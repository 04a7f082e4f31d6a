//! Batch execution over independent work items
//!
//! Sequential by default; with the `parallel` feature the items run on the
//! rayon global pool. Results come back in item order either way.

/// Run `f(0..count)` and collect the results in index order
#[cfg(feature = "parallel")]
pub fn execute_batch<F, R>(count: usize, f: F) -> Vec<R>
where
    F: Fn(usize) -> R + Sync + Send,
    R: Send,
{
    use rayon::prelude::*;
    (0..count).into_par_iter().map(f).collect()
}

/// Run `f(0..count)` and collect the results in index order
#[cfg(not(feature = "parallel"))]
pub fn execute_batch<F, R>(count: usize, f: F) -> Vec<R>
where
    F: Fn(usize) -> R + Sync + Send,
    R: Send,
{
    (0..count).map(f).collect()
}

/// Whether batches run in parallel
pub const fn is_parallel() -> bool {
    cfg!(feature = "parallel")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_in_order() {
        let squares = execute_batch(50, |i| i * i);
        assert_eq!(squares.len(), 50);
        assert!(squares.iter().enumerate().all(|(i, &s)| s == i * i));
    }

    #[test]
    fn test_empty_batch() {
        let out: Vec<usize> = execute_batch(0, |i| i);
        assert!(out.is_empty());
    }
}
