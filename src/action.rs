//! User-supplied actions and successor normalization.
//!
//! An action maps a state to zero, one, or many successor states, either
//! synchronously or through a pending computation. The engine fans all
//! configured actions out concurrently per expanded node and joins them
//! before closing the node.

use std::future::Future;

use futures::future::{self, FutureExt, LocalBoxFuture};

use crate::error::ActionError;

/// Action name used when the caller does not supply one.
pub const DEFAULT_ACTION_NAME: &str = "expand";

/// Normalized result of one expansion: zero, one, or many successor states.
///
/// Mirrors the boundary contract that a single state becomes a one-element
/// list and an absent result becomes an empty list.
#[derive(Debug, Clone)]
pub enum Successors<S> {
    None,
    One(S),
    Many(Vec<S>),
}

impl<S> Successors<S> {
    pub(crate) fn into_vec(self) -> Vec<S> {
        match self {
            Self::None => Vec::new(),
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

impl<S> From<S> for Successors<S> {
    fn from(state: S) -> Self {
        Self::One(state)
    }
}

impl<S> From<Option<S>> for Successors<S> {
    fn from(state: Option<S>) -> Self {
        state.map_or(Self::None, Self::One)
    }
}

impl<S> From<Vec<S>> for Successors<S> {
    fn from(states: Vec<S>) -> Self {
        Self::Many(states)
    }
}

pub(crate) type ExpandFuture<S> = LocalBoxFuture<'static, Result<Successors<S>, ActionError>>;

/// A named, costed successor generator.
///
/// Cost defaults to `1.0` and must be positive and finite (checked at engine
/// setup).
pub struct Action<S> {
    name: String,
    cost: f64,
    expand: Box<dyn Fn(&S) -> ExpandFuture<S>>,
}

impl<S> std::fmt::Debug for Action<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

impl<S: 'static> Action<S> {
    /// An infallible synchronous action. An empty `name` falls back to
    /// [`DEFAULT_ACTION_NAME`].
    pub fn new<T, F>(name: impl Into<String>, expand: F) -> Self
    where
        T: Into<Successors<S>>,
        F: Fn(&S) -> T + 'static,
    {
        Self::try_new(name, move |state| Ok(expand(state)))
    }

    /// A fallible synchronous action. Any returned error aborts the whole
    /// search.
    pub fn try_new<T, F>(name: impl Into<String>, expand: F) -> Self
    where
        T: Into<Successors<S>>,
        F: Fn(&S) -> Result<T, ActionError> + 'static,
    {
        Self {
            name: Self::normalize_name(name),
            cost: 1.0,
            expand: Box::new(move |state| {
                future::ready(expand(state).map(Into::into)).boxed_local()
            }),
        }
    }

    /// An action whose successors arrive via a pending computation.
    ///
    /// The state is cloned into the future so the computation can outlive the
    /// borrow of the node being expanded.
    pub fn new_async<T, F, Fut>(name: impl Into<String>, expand: F) -> Self
    where
        S: Clone,
        T: Into<Successors<S>> + 'static,
        F: Fn(S) -> Fut + 'static,
        Fut: Future<Output = Result<T, ActionError>> + 'static,
    {
        Self {
            name: Self::normalize_name(name),
            cost: 1.0,
            expand: Box::new(move |state| {
                let pending = expand(state.clone());
                async move { pending.await.map(Into::into) }.boxed_local()
            }),
        }
    }

    /// Replace the default cost of `1.0`.
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Begin this action's successor computation for `state`.
    pub(crate) fn expand(&self, state: &S) -> ExpandFuture<S> {
        (self.expand)(state)
    }

    fn normalize_name(name: impl Into<String>) -> String {
        let name = name.into();
        if name.is_empty() {
            DEFAULT_ACTION_NAME.to_string()
        } else {
            name
        }
    }
}
