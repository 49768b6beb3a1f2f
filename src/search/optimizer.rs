//! Exhaustive route search.
//!
//! Scores every ordering of the input armies and keeps the best. The search
//! is `O(n! * n)` resolve calls, which is only practical for a dozen or so
//! armies; callers are expected to cap `n` themselves.
//!
//! Orderings are visited in lexicographic order of input positions. A later
//! ordering replaces the incumbent only if it scores strictly higher, so ties
//! keep the first ordering found. The parallel search partitions by first
//! position and reduces partitions in the same order, giving identical
//! results to the sequential search.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::army::{parse_army, Army};
use crate::resolve::ResolveConfig;
use crate::search::permutations::Permutations;
use crate::search::route::{score_ordering, trace_route, RouteError, RouteTrace};

/// Result of a route search: the winning ordering and its breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalRoute {
    pub trace: RouteTrace,
    /// Number of orderings scored; `n!` for `n` armies.
    pub orderings: u64,
}

impl OptimalRoute {
    pub fn route(&self) -> &[Army] {
        &self.trace.route
    }

    pub fn score(&self) -> i64 {
        self.trace.score
    }
}

/// Best ordering seen within one walk of the permutation space.
#[derive(Debug, Clone)]
struct Incumbent {
    order: Vec<usize>,
    score: i64,
    orderings: u64,
}

/// Scores every ordering produced by `perms`, keeping the first maximum.
fn best_of(armies: &[Army], mut perms: Permutations, config: &ResolveConfig) -> Option<Incumbent> {
    let mut best: Option<Incumbent> = None;
    let mut orderings = 0u64;

    while let Some(order) = perms.next_ordering() {
        orderings += 1;
        let score = score_ordering(armies, order, config);
        match best.as_mut() {
            Some(b) => {
                if score > b.score {
                    b.order.copy_from_slice(order);
                    b.score = score;
                }
            }
            None => {
                best = Some(Incumbent {
                    order: order.to_vec(),
                    score,
                    orderings: 0,
                });
            }
        }
    }

    best.map(|mut b| {
        b.orderings = orderings;
        b
    })
}

/// Turns the winning index ordering into a traced route.
fn finish(
    armies: &[Army],
    best: Incumbent,
    config: &ResolveConfig,
    started: Instant,
) -> Result<OptimalRoute, RouteError> {
    let route: Vec<Army> = best.order.iter().map(|&i| armies[i]).collect();
    let trace = trace_route(&route, config)?;
    debug_assert_eq!(trace.score, best.score);

    tracing::debug!(
        armies = armies.len(),
        orderings = best.orderings,
        score = trace.score,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "route search finished"
    );

    Ok(OptimalRoute {
        trace,
        orderings: best.orderings,
    })
}

/// Finds the highest-scoring ordering of `armies`.
pub fn optimal_route(armies: &[Army], config: &ResolveConfig) -> Result<OptimalRoute, RouteError> {
    let started = Instant::now();
    let best = best_of(armies, Permutations::new(armies.len()), config).ok_or(RouteError::Empty)?;
    finish(armies, best, config, started)
}

/// Parses raw army tokens and finds their highest-scoring ordering.
pub fn optimal_route_from_tokens<S: AsRef<str>>(
    tokens: &[S],
    config: &ResolveConfig,
) -> Result<OptimalRoute, RouteError> {
    let armies = tokens
        .iter()
        .map(|t| parse_army(t.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    optimal_route(&armies, config)
}

/// Same result as [`optimal_route`], spread over `threads` worker threads.
pub fn optimal_route_parallel(
    armies: &[Army],
    config: &ResolveConfig,
    threads: usize,
) -> Result<OptimalRoute, RouteError> {
    let n = armies.len();
    if threads <= 1 || n <= 1 {
        return optimal_route(armies, config);
    }

    let started = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    // `collect` preserves partition order, which the tie-break depends on.
    let partitions: Vec<Option<Incumbent>> = pool.install(|| {
        (0..n)
            .into_par_iter()
            .map(|first| best_of(armies, Permutations::starting_with(n, first), config))
            .collect()
    });

    let orderings: u64 = partitions.iter().flatten().map(|p| p.orderings).sum();
    let mut best = partitions
        .into_iter()
        .flatten()
        .reduce(|best, next| if next.score > best.score { next } else { best })
        .ok_or(RouteError::Empty)?;
    best.orderings = orderings;

    finish(armies, best, config, started)
}
