//! Route scoring: left-to-right reduction of an ordered army sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::army::{Army, ParseError};
use crate::resolve::{resolve, Interaction, ResolveConfig};

/// Errors returned by route scoring and search.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route is empty")]
    Empty,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to build search thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One reduction step: `left` meets `right` and becomes `result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub left: Army,
    pub right: Army,
    pub interaction: Interaction,
    pub result: Army,
}

/// A fully reduced route with every intermediate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTrace {
    pub route: Vec<Army>,
    pub steps: Vec<TraceStep>,
    pub result: Army,
    pub score: i64,
}

/// Reduces a route to the single army left standing.
pub fn reduce(route: &[Army], config: &ResolveConfig) -> Result<Army, RouteError> {
    let (&first, rest) = route.split_first().ok_or(RouteError::Empty)?;
    Ok(rest
        .iter()
        .fold(first, |current, &next| resolve(current, next, config)))
}

/// Scores a route: the final army's size, negated if it is an enemy.
pub fn score(route: &[Army], config: &ResolveConfig) -> Result<i64, RouteError> {
    reduce(route, config).map(|army| army.signed_size())
}

/// Scores the ordering `order` of `armies` without materializing it.
///
/// `order` must be non-empty and index into `armies`.
pub(crate) fn score_ordering(armies: &[Army], order: &[usize], config: &ResolveConfig) -> i64 {
    let mut current = armies[order[0]];
    for &i in &order[1..] {
        current = resolve(current, armies[i], config);
    }
    current.signed_size()
}

/// Reduces a route, recording each intermediate step for display.
pub fn trace_route(route: &[Army], config: &ResolveConfig) -> Result<RouteTrace, RouteError> {
    let (&first, rest) = route.split_first().ok_or(RouteError::Empty)?;

    let mut steps = Vec::with_capacity(rest.len());
    let mut current = first;
    for &next in rest {
        let result = resolve(current, next, config);
        steps.push(TraceStep {
            left: current,
            right: next,
            interaction: Interaction::between(&current, &next),
            result,
        });
        current = result;
    }

    Ok(RouteTrace {
        route: route.to_vec(),
        steps,
        result: current,
        score: current.signed_size(),
    })
}

impl TraceStep {
    /// Renders the step as `left <op> right = result`.
    pub fn describe(&self) -> String {
        format!(
            "{} {} {} = {}",
            self.left,
            self.interaction.symbol(),
            self.right,
            self.result
        )
    }
}
