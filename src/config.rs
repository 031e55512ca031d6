//! Caller-facing search configuration.
//!
//! Every field is optional on the builder; completeness is checked once by
//! [`crate::search::SearchEngine::new`] so that an omitted field surfaces as
//! a configuration error instead of a compile-time dead end in caller code
//! that assembles configurations dynamically.

use crate::action::Action;
use crate::keyed_set::KeySpec;
use crate::strategy::{Heuristic, Strategy};

/// Everything a search needs: initial state, goal descriptors, a key
/// specifier shared by the visited and goal sets, actions, a strategy, and
/// the strategy-specific extras (`heuristic`, `weight`).
pub struct SearchConfig<S> {
    pub(crate) initial: Option<S>,
    pub(crate) goals: Vec<S>,
    pub(crate) key: Option<KeySpec<S>>,
    pub(crate) actions: Vec<Action<S>>,
    pub(crate) strategy: Option<Strategy>,
    pub(crate) heuristic: Option<Heuristic<S>>,
    pub(crate) weight: Option<f64>,
}

impl<S> Default for SearchConfig<S> {
    fn default() -> Self {
        Self {
            initial: None,
            goals: Vec::new(),
            key: None,
            actions: Vec::new(),
            strategy: None,
            heuristic: None,
            weight: None,
        }
    }
}

impl<S> SearchConfig<S> {
    /// An empty configuration; fill it in with the builder methods.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The state the search starts from.
    #[must_use]
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add one goal-state descriptor.
    #[must_use]
    pub fn goal(mut self, state: S) -> Self {
        self.goals.push(state);
        self
    }

    /// Add several goal-state descriptors.
    #[must_use]
    pub fn goals(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.goals.extend(states);
        self
    }

    /// Key states by the named field of their serialized form.
    #[must_use]
    pub fn key_field(mut self, field: impl Into<String>) -> Self {
        self.key = Some(KeySpec::Field(field.into()));
        self
    }

    /// Key states with a caller-supplied function.
    #[must_use]
    pub fn key_fn(mut self, f: impl Fn(&S) -> String + Send + Sync + 'static) -> Self {
        self.key = Some(KeySpec::Func(Box::new(f)));
        self
    }

    /// Add one action.
    #[must_use]
    pub fn action(mut self, action: Action<S>) -> Self {
        self.actions.push(action);
        self
    }

    /// Add several actions.
    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = Action<S>>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Choose the ordering strategy.
    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Heuristic for the informed strategies.
    #[must_use]
    pub fn heuristic(mut self, f: impl Fn(&S) -> f64 + 'static) -> Self {
        self.heuristic = Some(Box::new(f));
        self
    }

    /// Heuristic weighting factor for weighted A*.
    #[must_use]
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }
}
