//! Frontier-ordering strategies.
//!
//! Each preset is a `(priority, requires)` pair: a priority function over a
//! node and a declaration of the configuration fields it needs. Swapping the
//! preset turns the one engine into breadth-first, depth-first, uniform-cost,
//! greedy best-first, A*, or weighted-A* search. The set is closed; callers
//! select a variant (directly or via [`Strategy::by_name`]) rather than
//! supplying arbitrary priority functions.

use crate::error::{Result, SearchError};
use crate::node::Node;

/// Heuristic estimate of remaining cost from a state to the nearest goal.
pub type Heuristic<S> = Box<dyn Fn(&S) -> f64>;

/// One entry of a strategy's `requires` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// Configuration field name.
    pub field: &'static str,
    /// Expected kind, in error-message form.
    pub expected: &'static str,
}

/// The closed set of ordering presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Arbitrary order, re-randomized per priority call.
    Random,
    /// Shallowest node first: minimal-depth solutions.
    BreadthFirst,
    /// Deepest node first.
    DepthFirst,
    /// Cheapest cumulative cost first (Dijkstra): minimal-cost solutions.
    UniformCost,
    /// Heuristic only; `1 +` keeps goal-state priorities off zero.
    GreedyBestFirst,
    /// Cumulative cost plus heuristic; optimal for admissible heuristics.
    AStar,
    /// Cumulative cost plus weighted heuristic. Weight `0` behaves like
    /// uniform-cost; a large weight approaches greedy best-first.
    WeightedAStar,
}

const REQUIRES_NONE: &[Requirement] = &[];
const REQUIRES_HEURISTIC: &[Requirement] = &[Requirement {
    field: "heuristic",
    expected: "function",
}];
const REQUIRES_HEURISTIC_AND_WEIGHT: &[Requirement] = &[
    Requirement {
        field: "heuristic",
        expected: "function",
    },
    Requirement {
        field: "weight",
        expected: "number",
    },
];

impl Strategy {
    /// Look a preset up by its algorithm name.
    ///
    /// Accepts the canonical names plus the common aliases `uniform-cost`
    /// and `greedy`.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "random" => Some(Self::Random),
            "bfs" => Some(Self::BreadthFirst),
            "dfs" => Some(Self::DepthFirst),
            "dijkstra" | "uniform-cost" => Some(Self::UniformCost),
            "bestfs" | "greedy" => Some(Self::GreedyBestFirst),
            "astar" => Some(Self::AStar),
            "weighted-astar" => Some(Self::WeightedAStar),
            _ => None,
        }
    }

    /// Canonical algorithm name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::UniformCost => "dijkstra",
            Self::GreedyBestFirst => "bestfs",
            Self::AStar => "astar",
            Self::WeightedAStar => "weighted-astar",
        }
    }

    /// Configuration fields this preset needs, with their expected kinds.
    #[must_use]
    pub fn requires(self) -> &'static [Requirement] {
        match self {
            Self::Random | Self::BreadthFirst | Self::DepthFirst | Self::UniformCost => {
                REQUIRES_NONE
            }
            Self::GreedyBestFirst | Self::AStar => REQUIRES_HEURISTIC,
            Self::WeightedAStar => REQUIRES_HEURISTIC_AND_WEIGHT,
        }
    }

    /// Check `requires` against the supplied extras and bind them into a
    /// ready-to-call priority function. Runs once at setup, before any
    /// expansion.
    ///
    /// # Errors
    ///
    /// [`SearchError::Configuration`] naming the first missing or mistyped
    /// field. A non-finite `weight` counts as "not a number".
    pub(crate) fn bind<S>(
        self,
        heuristic: Option<Heuristic<S>>,
        weight: Option<f64>,
    ) -> Result<BoundStrategy<S>> {
        match self {
            Self::Random => Ok(BoundStrategy::Random),
            Self::BreadthFirst => Ok(BoundStrategy::BreadthFirst),
            Self::DepthFirst => Ok(BoundStrategy::DepthFirst),
            Self::UniformCost => Ok(BoundStrategy::UniformCost),
            Self::GreedyBestFirst => Ok(BoundStrategy::GreedyBestFirst {
                heuristic: self.demand_heuristic(heuristic)?,
            }),
            Self::AStar => Ok(BoundStrategy::AStar {
                heuristic: self.demand_heuristic(heuristic)?,
            }),
            Self::WeightedAStar => Ok(BoundStrategy::WeightedAStar {
                heuristic: self.demand_heuristic(heuristic)?,
                weight: self.demand_weight(weight)?,
            }),
        }
    }

    fn demand_heuristic<S>(self, heuristic: Option<Heuristic<S>>) -> Result<Heuristic<S>> {
        heuristic.ok_or_else(|| self.unmet("heuristic", "function"))
    }

    fn demand_weight(self, weight: Option<f64>) -> Result<f64> {
        weight
            .filter(|w| w.is_finite())
            .ok_or_else(|| self.unmet("weight", "number"))
    }

    fn unmet(self, field: &str, expected: &str) -> SearchError {
        SearchError::config(format!(
            "the {} strategy requires the field '{field}' to be a {expected}",
            self.name()
        ))
    }
}

/// A strategy whose `requires` have been validated and captured.
pub(crate) enum BoundStrategy<S> {
    Random,
    BreadthFirst,
    DepthFirst,
    UniformCost,
    GreedyBestFirst { heuristic: Heuristic<S> },
    AStar { heuristic: Heuristic<S> },
    WeightedAStar { heuristic: Heuristic<S>, weight: f64 },
}

impl<S> std::fmt::Debug for BoundStrategy<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => f.write_str("Random"),
            Self::BreadthFirst => f.write_str("BreadthFirst"),
            Self::DepthFirst => f.write_str("DepthFirst"),
            Self::UniformCost => f.write_str("UniformCost"),
            Self::GreedyBestFirst { .. } => {
                f.debug_struct("GreedyBestFirst").finish_non_exhaustive()
            }
            Self::AStar { .. } => f.debug_struct("AStar").finish_non_exhaustive(),
            Self::WeightedAStar { weight, .. } => f
                .debug_struct("WeightedAStar")
                .field("weight", weight)
                .finish_non_exhaustive(),
        }
    }
}

impl<S> BoundStrategy<S> {
    /// Priority of a node; lower dequeues first.
    pub fn priority(&self, node: &Node<S>) -> f64 {
        match self {
            Self::Random => {
                if rand::random::<bool>() {
                    1.0
                } else {
                    -1.0
                }
            }
            Self::BreadthFirst => f64::from(node.depth),
            Self::DepthFirst => -f64::from(node.depth),
            Self::UniformCost => node.cost,
            Self::GreedyBestFirst { heuristic } => 1.0 + heuristic(&node.data),
            Self::AStar { heuristic } => node.cost + heuristic(&node.data),
            Self::WeightedAStar { heuristic, weight } => {
                node.cost + weight * heuristic(&node.data)
            }
        }
    }
}
