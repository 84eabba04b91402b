//! Build errors for the state manager builder.

use crate::core::FsmError;
use thiserror::Error;

/// Errors that can occur when building a state manager.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("No states defined. Add at least one state with .state()")]
    NoStates,

    #[error("Initial state '{state}' is not among the added states")]
    UnknownInitial { state: String },

    #[error(transparent)]
    Registration(#[from] FsmError),
}
