//! Engine setup and the expand/close loop.
//!
//! Lifecycle: [`SearchEngine::new`] performs every configuration check and
//! seeds the frontier with the root node (`Ready -> Running`); [`SearchEngine::run`]
//! drives the loop to a terminal outcome (`Succeeded` as a [`Solution`],
//! `Failed` as a [`SearchError`]). A failed setup never expands anything.

use std::sync::Arc;

use futures::future;
use serde::Serialize;
use tracing::{debug, trace};

use crate::action::Action;
use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::frontier::Frontier;
use crate::keyed_set::KeyedSet;
use crate::node::{reconstruct, Node, NodeArena, NodeId, PathStep};
use crate::strategy::BoundStrategy;

/// Summary counters for a successful search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchStats {
    /// Cumulative cost of the returned path.
    pub cost: f64,
    /// Depth of the terminal node.
    pub depth: u32,
    /// States closed (dequeued and expanded); the terminal node is excluded.
    pub nodes: usize,
}

/// A successful search outcome: the path from initial state to goal plus
/// summary statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<S> {
    pub path: Vec<PathStep<S>>,
    pub stats: SearchStats,
}

/// The engine: one frontier, the visited and goal sets, the configured
/// actions, and a bound strategy.
pub struct SearchEngine<S> {
    frontier: Frontier<NodeId>,
    arena: NodeArena<S>,
    goals: KeyedSet<S>,
    visited: KeyedSet<S>,
    actions: Vec<Action<S>>,
    strategy: BoundStrategy<S>,
}

impl<S: Serialize> std::fmt::Debug for SearchEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("frontier", &self.frontier.size())
            .field("visited", &self.visited.size())
            .field("goals", &self.goals.size())
            .field("actions", &self.actions.len())
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl<S: Serialize + Clone + 'static> SearchEngine<S> {
    /// Validate a configuration and seed the frontier with the root node.
    ///
    /// # Errors
    ///
    /// [`SearchError::Configuration`] for a missing initial state, empty
    /// goals, missing key specifier, missing or ill-costed actions, missing
    /// strategy, or an unmet strategy requirement. No action is expanded on
    /// any of these paths.
    pub fn new(config: SearchConfig<S>) -> Result<Self> {
        let initial = config
            .initial
            .ok_or_else(|| SearchError::config("missing initial state"))?;
        if config.goals.is_empty() {
            return Err(SearchError::config("missing goal states"));
        }
        let key = Arc::new(
            config
                .key
                .ok_or_else(|| SearchError::config("missing key specifier"))?,
        );
        if config.actions.is_empty() {
            return Err(SearchError::config("missing actions"));
        }
        for action in &config.actions {
            let cost = action.cost();
            if !(cost.is_finite() && cost > 0.0) {
                return Err(SearchError::config(format!(
                    "action '{}' must have a positive finite cost, got {cost}",
                    action.name()
                )));
            }
        }
        let strategy = config
            .strategy
            .ok_or_else(|| SearchError::config("missing strategy"))?;
        let bound = strategy.bind(config.heuristic, config.weight)?;

        let mut goals = KeyedSet::new(Arc::clone(&key));
        goals.add_all(config.goals)?;
        let visited = KeyedSet::new(key);

        let root_is_goal = goals.has(&initial)?;
        let root = Node::root(initial, root_is_goal);
        let root_priority = bound.priority(&root);

        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let root_id = arena.push(root);
        frontier.enqueue(root_id, root_priority)?;

        debug!(
            strategy = strategy.name(),
            actions = config.actions.len(),
            goals = goals.size(),
            "search configured"
        );

        Ok(Self {
            frontier,
            arena,
            goals,
            visited,
            actions: config.actions,
            strategy: bound,
        })
    }

    /// Run the expand/close loop to completion.
    ///
    /// Each iteration dequeues the highest-priority node, returns it if it is
    /// a goal, and otherwise starts every action's successor computation
    /// concurrently, joining all branches before integrating their results
    /// and closing the node. Duplicate states may coexist in the frontier;
    /// only the visited set deduplicates.
    ///
    /// # Errors
    ///
    /// [`SearchError::GoalUnreachable`] once the frontier is exhausted;
    /// [`SearchError::Expansion`] as soon as any action's computation fails;
    /// [`SearchError::Configuration`] if a produced state cannot be keyed or
    /// a priority cannot be ordered. All are terminal, nothing is retried.
    pub async fn run(mut self) -> Result<Solution<S>> {
        loop {
            let Some(current_id) = self.frontier.dequeue() else {
                debug!(closed = self.visited.size(), "frontier exhausted");
                return Err(SearchError::GoalUnreachable);
            };
            let current = self.arena.get(current_id);
            let (data, cost, depth, is_goal) =
                (current.data.clone(), current.cost, current.depth, current.is_goal);

            if is_goal {
                let stats = SearchStats {
                    cost,
                    depth,
                    nodes: self.visited.size(),
                };
                debug!(cost, depth, closed = stats.nodes, "goal reached");
                return Ok(Solution {
                    path: reconstruct(&self.arena, current_id),
                    stats,
                });
            }

            trace!(cost, depth, frontier = self.frontier.size(), "expanding");

            // Fan every action out concurrently, then rendezvous: results are
            // integrated only after all branches have finished.
            let branches = self.actions.iter().map(|action| action.expand(&data));
            let outcomes = future::join_all(branches).await;

            for (action, outcome) in self.actions.iter().zip(outcomes) {
                let successors = outcome
                    .map_err(|source| SearchError::Expansion {
                        action: action.name().to_string(),
                        source,
                    })?
                    .into_vec();

                let mut batch = Vec::new();
                for successor in successors {
                    if self.visited.has(&successor)? {
                        continue;
                    }
                    let reaches_goal = self.goals.has(&successor)?;
                    let child = Node::child(
                        current_id,
                        self.arena.get(current_id),
                        successor,
                        action.name(),
                        action.cost(),
                        reaches_goal,
                    );
                    let priority = self.strategy.priority(&child);
                    batch.push((self.arena.push(child), priority));
                }
                if !batch.is_empty() {
                    trace!(action = action.name(), children = batch.len(), "enqueuing");
                    self.frontier.enqueue_all(batch)?;
                }
            }

            // The node closes only after the barrier above.
            self.visited.add(data)?;
        }
    }
}

/// Validate `config` and run the search to completion.
///
/// # Errors
///
/// See [`SearchEngine::new`] and [`SearchEngine::run`].
pub async fn solve<S: Serialize + Clone + 'static>(config: SearchConfig<S>) -> Result<Solution<S>> {
    SearchEngine::new(config)?.run().await
}

/// [`solve`], driven on the calling thread.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_blocking<S: Serialize + Clone + 'static>(
    config: SearchConfig<S>,
) -> Result<Solution<S>> {
    futures::executor::block_on(solve(config))
}
