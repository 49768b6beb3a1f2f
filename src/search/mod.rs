//! Route scoring and search.
//!
//! Reduces ordered army sequences to a signed score and searches every
//! ordering of an army set for the one that leaves the strongest friendly
//! army standing.

pub mod optimizer;
pub mod permutations;
pub mod route;

pub use optimizer::{optimal_route, optimal_route_from_tokens, optimal_route_parallel, OptimalRoute};
pub use permutations::{factorial, Permutations};
pub use route::{reduce, score, trace_route, RouteError, RouteTrace, TraceStep};
