//! The state manager and its configuration.
//!
//! A [`StateManager`] owns a set of states, tracks the active one and is the
//! only way to change it. All operations are synchronous and bounded; the
//! caller drives ticks from a single thread.

mod config;
mod machine;
mod validation;

pub use config::{ActiveDeletion, ManagerConfig, TickOrder};
pub use machine::{BoxedState, DynState, StateEditor, StateManager, TickOutcome, Transitioned};
pub use validation::TableViolation;
