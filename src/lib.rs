//! Pathwise: a generic state-space search engine with pluggable ordering.
//!
//! Given an initial state, a set of [`Action`]s (each producing zero or more
//! successor states, synchronously or via a pending computation), one or more
//! goal descriptors, a key specifier for deduplication, and a [`Strategy`],
//! the engine discovers a path from the initial state to a goal and returns
//! it with summary statistics. Swapping only the strategy (plus, for the
//! informed ones, a heuristic and/or weighting factor) turns the same engine
//! into breadth-first, depth-first, uniform-cost, greedy best-first, A*, or
//! weighted-A* search.
//!
//! # Key types
//!
//! - [`SearchConfig`] — builder for the caller-supplied configuration
//! - [`Action`] / [`Successors`] — successor generators and normalization
//! - [`Strategy`] — the closed set of ordering presets
//! - [`Frontier`] — the ordered open list
//! - [`KeyedSet`] / [`KeySpec`] — visited and goal sets
//! - [`Solution`] / [`PathStep`] / [`SearchStats`] — the success result
//! - [`SearchError`] — configuration / expansion / unreachable-goal failures
//!
//! # Example
//!
//! ```
//! use pathwise::{solve_blocking, Action, SearchConfig, Strategy};
//!
//! let solution = solve_blocking(
//!     SearchConfig::new()
//!         .initial(1i64)
//!         .goal(4)
//!         .key_fn(|n: &i64| n.to_string())
//!         .action(Action::new("right", |n: &i64| {
//!             if *n < 4 { Some(n + 1) } else { None }
//!         }))
//!         .action(Action::new("left", |n: &i64| {
//!             if *n > 0 { Some(n - 1) } else { None }
//!         }))
//!         .strategy(Strategy::BreadthFirst),
//! )
//! .unwrap();
//!
//! assert_eq!(solution.path.len(), 4, "minimal-depth path: 1, 2, 3, 4");
//! assert!((solution.stats.cost - 3.0).abs() < f64::EPSILON);
//! ```

#![forbid(unsafe_code)]

pub mod action;
pub mod config;
pub mod error;
pub mod frontier;
pub mod keyed_set;
pub mod node;
pub mod search;
pub mod strategy;

pub use action::{Action, Successors, DEFAULT_ACTION_NAME};
pub use config::SearchConfig;
pub use error::{ActionError, Result, SearchError};
pub use frontier::Frontier;
pub use keyed_set::{KeySpec, KeyedSet};
pub use node::{Node, NodeId, PathStep};
pub use search::{solve, solve_blocking, SearchEngine, SearchStats, Solution};
pub use strategy::{Heuristic, Requirement, Strategy};
