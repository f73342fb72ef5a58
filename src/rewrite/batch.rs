//! Parallel simplification of independent requests using Rayon.

use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use super::service::{SimplificationRequest, SimplificationResult, Simplifier};

/// Upper bound on batch workers.
pub const MAX_WORKERS: usize = 32;

/// Worker count for a batch: the override clamped to `1..=MAX_WORKERS`,
/// otherwise the CPU count.
pub fn worker_count(user_override: Option<usize>) -> usize {
    let count = user_override.unwrap_or_else(|| {
        std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4)
    });
    count.clamp(1, MAX_WORKERS)
}

/// Simplify every request, returning results in input order.
///
/// Runs on a dedicated thread pool so batch work does not compete with the
/// global Rayon pool. Falls back to sequential processing when the pool
/// cannot be built.
pub fn simplify_batch(
    simplifier: &Simplifier,
    requests: &[SimplificationRequest],
    workers: Option<usize>,
) -> Vec<SimplificationResult> {
    if requests.is_empty() {
        return Vec::new();
    }

    let total = requests.len();
    let completed = AtomicUsize::new(0);
    let run = |request: &SimplificationRequest| {
        let result = simplifier.simplify(request);
        let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(done, total, "batch item finished");
        result
    };

    // Single request: no thread pool needed
    if total == 1 {
        return requests.iter().map(&run).collect();
    }

    let workers = worker_count(workers).min(total);
    tracing::info!(requests = total, workers, "starting batch");

    let pool = match rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("lisible-{}", i))
        .build()
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::warn!(error = %e, "failed to create thread pool, processing sequentially");
            return requests.iter().map(&run).collect();
        }
    };

    let results: Vec<SimplificationResult> = pool.install(|| requests.par_iter().map(&run).collect());
    tracing::info!(requests = total, "batch finished");
    results
}
