//! Errors reported by state and manager operations.

use thiserror::Error;

/// Errors that can occur when mutating a transition table or a manager.
///
/// Every failing operation leaves the table or manager untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    #[error("NullStateId is not allowed for a real state id")]
    NullStateId,

    #[error("NullTransition is not allowed for a real transition")]
    NullTransition,

    #[error("State '{state}' already exists")]
    DuplicateState { state: String },

    #[error("State '{state}' already has transition '{transition}'")]
    DuplicateTransition { state: String, transition: String },

    #[error("State '{state}' is not registered")]
    StateNotFound { state: String },

    #[error("Transition '{transition}' is not on the transition list of '{state}'")]
    TransitionNotFound { state: String, transition: String },

    #[error("State '{from}' does not have a next state for transition '{transition}'")]
    NoTransition { from: String, transition: String },

    #[error("Transition '{transition}' from '{from}' points at unregistered state '{to}'")]
    InconsistentTable {
        from: String,
        transition: String,
        to: String,
    },

    #[error("Cannot delete active state '{state}'")]
    ActiveStateDeletion { state: String },

    #[error("No state is active")]
    NoActiveState,

    #[error("State '{state}' is already active")]
    AlreadyActive { state: String },
}
