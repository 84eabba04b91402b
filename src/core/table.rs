//! Per-state transition tables.

use super::error::FsmError;
use super::id::{StateId, TransitionId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outgoing edges of one state, keyed by transition event.
///
/// The table remembers the id of the state that owns it, which is also the
/// state's identity inside a manager. At most one destination exists per
/// transition event.
///
/// # Example
///
/// ```rust
/// use npc_fsm::core::TransitionTable;
/// use npc_fsm::{state_ids, transition_ids};
///
/// state_ids! {
///     enum Mode { Idle, Patrol }
///     null: NullStateId
/// }
///
/// transition_ids! {
///     enum Event { SawPlayer, LostPlayer }
///     null: NullTransition
/// }
///
/// let mut table = TransitionTable::new(Mode::Idle);
/// table.add(Event::SawPlayer, Mode::Patrol).unwrap();
///
/// assert_eq!(table.output(Event::SawPlayer), Mode::Patrol);
/// assert_eq!(table.output(Event::LostPlayer), Mode::NullStateId);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionTable<S: StateId, T: TransitionId> {
    owner: S,
    edges: HashMap<T, S>,
}

impl<S: StateId, T: TransitionId> TransitionTable<S, T> {
    /// Create an empty table owned by `owner`.
    pub fn new(owner: S) -> Self {
        Self {
            owner,
            edges: HashMap::new(),
        }
    }

    /// Id of the state owning this table.
    pub fn owner(&self) -> S {
        self.owner
    }

    /// Register an outgoing edge.
    ///
    /// Fails without mutating if `transition` or `destination` is a
    /// sentinel, or if an edge for `transition` already exists.
    pub fn add(&mut self, transition: T, destination: S) -> Result<(), FsmError> {
        if transition.is_null() {
            return Err(FsmError::NullTransition);
        }
        if destination.is_null() {
            return Err(FsmError::NullStateId);
        }
        if self.edges.contains_key(&transition) {
            return Err(FsmError::DuplicateTransition {
                state: self.owner.name().to_string(),
                transition: transition.name().to_string(),
            });
        }

        self.edges.insert(transition, destination);
        Ok(())
    }

    /// Remove a previously registered edge, returning its destination.
    pub fn remove(&mut self, transition: T) -> Result<S, FsmError> {
        if transition.is_null() {
            return Err(FsmError::NullTransition);
        }

        self.edges
            .remove(&transition)
            .ok_or_else(|| FsmError::TransitionNotFound {
                state: self.owner.name().to_string(),
                transition: transition.name().to_string(),
            })
    }

    /// Destination for `transition`, or `S::NULL` when there is none.
    pub fn output(&self, transition: T) -> S {
        self.edges.get(&transition).copied().unwrap_or(S::NULL)
    }

    /// Iterate over `(transition, destination)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (T, S)> + '_ {
        self.edges.iter().map(|(t, s)| (*t, *s))
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
