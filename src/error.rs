//! Typed search errors.
//!
//! Every failure in this crate is terminal for the invocation that produced
//! it: nothing is retried, and no partial result survives an error. Callers
//! receive either a [`crate::search::Solution`] or exactly one of these
//! variants.

use thiserror::Error;

/// Boxed error produced by a caller-supplied action body.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Failure taxonomy for a search invocation.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The configuration is incomplete or inconsistent. Raised during setup,
    /// before any action is expanded, or when a produced state cannot be
    /// keyed or ordered.
    #[error("invalid search configuration: {reason}")]
    Configuration { reason: String },

    /// An action's successor computation failed. Aborts the in-progress
    /// search with no partial result.
    #[error("action '{action}' failed to expand: {source}")]
    Expansion {
        action: String,
        #[source]
        source: ActionError,
    },

    /// The frontier was exhausted without ever dequeuing a goal node.
    /// Expected (non-exceptional) outcome for disconnected instances.
    #[error("the goal states could not be reached from the initial state")]
    GoalUnreachable,
}

impl SearchError {
    /// Shorthand for a [`SearchError::Configuration`] with a formatted reason.
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Returns `true` for configuration problems (as opposed to runtime ones).
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
