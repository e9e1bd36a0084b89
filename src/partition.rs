//! Splitting the search across workers and merging their partial scores.
//!
//! The candidate solutions are cut into contiguous chunks. Each worker scores
//! every guess against its own chunk and returns an owned vector of local
//! means. The caller joins all workers and folds the vectors into global means
//! weighted by chunk size.

use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::constraints::ConstraintState;
use crate::error::Result;
use crate::evaluator::expected_remaining;
use crate::word::Word;

/// One worker's share of the candidate solutions.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub solutions: &'a [Word],
    /// Fraction of all candidates held by this chunk.
    pub weight: f64,
}

/// Local expected-remaining values for every guess, in guess-pool order.
#[derive(Debug, Clone)]
pub struct PartialScores {
    pub weight: f64,
    pub scores: Vec<f64>,
}

/// A thread pool with `workers` threads (at least one), built once and
/// reused for every round scored on it.
pub fn worker_pool(workers: usize) -> Result<ThreadPool> {
    Ok(ThreadPoolBuilder::new().num_threads(workers.max(1)).build()?)
}

/// Cut `solutions` into `min(workers, len)` contiguous chunks of
/// `len / chunks` words; the last chunk also takes the remainder.
pub fn partition(solutions: &[Word], workers: usize) -> Vec<Chunk<'_>> {
    let total = solutions.len();
    if total == 0 {
        return Vec::new();
    }
    let count = workers.clamp(1, total);
    let size = total / count;
    (0..count)
        .map(|i| {
            let start = i * size;
            let end = if i + 1 == count { total } else { start + size };
            let slice = &solutions[start..end];
            Chunk {
                solutions: slice,
                weight: slice.len() as f64 / total as f64,
            }
        })
        .collect()
}

/// Score every guess against one chunk, filtering `pool` each time.
pub fn score_chunk(
    state: &ConstraintState,
    guesses: &[Word],
    chunk: &Chunk<'_>,
    pool: &[Word],
) -> PartialScores {
    let scores = guesses
        .iter()
        .map(|guess| expected_remaining(state, guess, chunk.solutions, pool))
        .collect();
    PartialScores {
        weight: chunk.weight,
        scores,
    }
}

/// Weighted sum of per-chunk means, folded in worker order.
pub fn merge(partials: &[PartialScores], guess_count: usize) -> Vec<f64> {
    let mut merged = vec![0.0; guess_count];
    for partial in partials {
        for (total, local) in merged.iter_mut().zip(&partial.scores) {
            *total += local * partial.weight;
        }
    }
    merged
}

/// Fan out one scoring task per chunk on the current rayon pool and block
/// until all of them finish, then merge.
pub fn parallel_scores(
    state: &ConstraintState,
    guesses: &[Word],
    filtered: &[Word],
    workers: usize,
) -> Vec<f64> {
    let chunks = partition(filtered, workers);
    debug!(
        "scoring {} guesses over {} candidates in {} chunks",
        guesses.len(),
        filtered.len(),
        chunks.len()
    );
    let partials: Vec<PartialScores> = chunks
        .par_iter()
        .map(|chunk| score_chunk(state, guesses, chunk, filtered))
        .collect();
    merge(&partials, guesses.len())
}
