//! Vanguard engine library.
//!
//! Finds the order in which a set of friendly and enemy armies should meet so
//! that the strongest possible friendly army is left standing. Exposes the
//! army model, the pairwise resolver, route scoring and search, and the host
//! protocol used by the binary entry point.

pub mod army;
pub mod engine;
pub mod protocol;
pub mod resolve;
pub mod search;

pub use army::{parse_armies, parse_army, Alignment, Army, ParseError, UnitType};
pub use resolve::{resolve, ResolveConfig};
pub use search::{
    optimal_route, optimal_route_from_tokens, optimal_route_parallel, score, trace_route,
    OptimalRoute, RouteError, RouteTrace,
};
