//! Core FSM types.
//!
//! This module contains the building blocks a manager is made of:
//! - Identifier traits with reserved sentinels
//! - Per-state transition tables
//! - The `State` capability contract
//! - Guarded triggers and transition history

mod error;
mod guard;
mod history;
mod id;
mod state;
mod table;

pub use error::FsmError;
pub use guard::{Guard, Trigger, Triggers};
pub use history::{TransitionHistory, TransitionRecord};
pub use id::{StateId, TransitionId};
pub use state::State;
pub use table::TransitionTable;
