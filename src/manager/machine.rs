//! The state manager: owns the states and mediates every transition.

use crate::core::{
    FsmError, State, StateId, TransitionHistory, TransitionId, TransitionRecord, TransitionTable,
};
use crate::manager::config::{ActiveDeletion, ManagerConfig, TickOrder};
use chrono::Utc;

/// A state as stored by the manager.
pub type DynState<S, T, Ctx> = dyn State<Ctx, Id = S, Transition = T>;

/// Owned, type-erased state.
pub type BoxedState<S, T, Ctx> = Box<DynState<S, T, Ctx>>;

/// A transition that was performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transitioned<S: StateId, T: TransitionId> {
    pub from: S,
    pub to: S,
    pub transition: T,
}

/// Result of one external tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome<S: StateId, T: TransitionId> {
    /// No transition fired; the given state is still active
    Stayed(S),

    /// A transition fired and was performed
    Moved(Transitioned<S, T>),
}

// The id is captured at registration and is the only identity the manager
// uses afterwards, whatever the state's table later claims.
struct Member<S: StateId, T: TransitionId, Ctx> {
    id: S,
    state: BoxedState<S, T, Ctx>,
}

/// Mutable view of a registered state, limited to editing its edges.
///
/// The registered id and the lifecycle hooks stay with the manager.
pub struct StateEditor<'a, S: StateId, T: TransitionId, Ctx> {
    id: S,
    state: &'a mut DynState<S, T, Ctx>,
}

impl<'a, S: StateId, T: TransitionId, Ctx> StateEditor<'a, S, T, Ctx> {
    /// The id the state was registered under.
    pub fn id(&self) -> S {
        self.id
    }

    pub fn add_transition(&mut self, transition: T, destination: S) -> Result<(), FsmError> {
        self.state.add_transition(transition, destination)
    }

    pub fn delete_transition(&mut self, transition: T) -> Result<S, FsmError> {
        self.state.delete_transition(transition)
    }

    pub fn output_state(&self, transition: T) -> S {
        self.state.output_state(transition)
    }

    pub fn table(&self) -> &TransitionTable<S, T> {
        self.state.table()
    }
}

/// Finite-state machine holding a set of states and the active one.
///
/// The manager is the only component that changes the active state. The
/// first state added to an empty manager becomes active without firing its
/// enter hook; afterwards only [`perform_transition`](Self::perform_transition)
/// (directly or through [`update`](Self::update)) changes it.
///
/// # Example
///
/// ```rust
/// use npc_fsm::core::{State, TransitionTable};
/// use npc_fsm::{state_ids, transition_ids, StateManager};
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
/// struct Passive(TransitionTable<Mode, Event>);
///
/// impl State<()> for Passive {
///     type Id = Mode;
///     type Transition = Event;
///
///     fn table(&self) -> &TransitionTable<Mode, Event> { &self.0 }
///     fn table_mut(&mut self) -> &mut TransitionTable<Mode, Event> { &mut self.0 }
///     fn transition_condition(&mut self, _: &()) -> Option<Event> { None }
///     fn update(&mut self, _: &mut ()) {}
/// }
///
/// let mut idle = Passive(TransitionTable::new(Mode::Idle));
/// idle.add_transition(Event::SawPlayer, Mode::Patrol).unwrap();
///
/// let mut manager: StateManager<Mode, Event, ()> = StateManager::new();
/// manager.add_state(idle).unwrap();
/// manager.add_state(Passive(TransitionTable::new(Mode::Patrol))).unwrap();
/// assert_eq!(manager.current_state_id(), Mode::Idle);
///
/// manager.perform_transition(Event::SawPlayer, &mut ()).unwrap();
/// assert_eq!(manager.current_state_id(), Mode::Patrol);
///
/// assert!(manager.perform_transition(Event::LostPlayer, &mut ()).is_err());
/// assert_eq!(manager.current_state_id(), Mode::Patrol);
/// ```
pub struct StateManager<S: StateId, T: TransitionId, Ctx> {
    members: Vec<Member<S, T, Ctx>>,
    current: Option<S>,
    config: ManagerConfig,
    history: TransitionHistory<S, T>,
}

impl<S: StateId, T: TransitionId, Ctx> StateManager<S, T, Ctx> {
    /// Create an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ManagerConfig::default())
    }

    pub fn with_config(config: ManagerConfig) -> Self {
        Self {
            members: Vec::new(),
            current: None,
            config,
            history: TransitionHistory::new(config.history_limit),
        }
    }

    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Register a state.
    ///
    /// Fails if the state's id is the `NULL` sentinel or already registered;
    /// nothing is added in either case. The first state added to an empty
    /// manager becomes active silently.
    pub fn add_state<St>(&mut self, state: St) -> Result<(), FsmError>
    where
        St: State<Ctx, Id = S, Transition = T> + 'static,
    {
        self.add_boxed_state(Box::new(state))
    }

    /// Register an already boxed state. See [`add_state`](Self::add_state).
    pub fn add_boxed_state(&mut self, state: BoxedState<S, T, Ctx>) -> Result<(), FsmError> {
        let id = state.id();
        if id.is_null() {
            return rejected("add_state", FsmError::NullStateId);
        }
        if self.contains(id) {
            return rejected(
                "add_state",
                FsmError::DuplicateState {
                    state: id.name().to_string(),
                },
            );
        }

        let activate = self.members.is_empty();
        self.members.push(Member { id, state });
        if activate {
            self.current = Some(id);
            log::debug!("StateManager: '{}' added as initial state", id.name());
        } else {
            log::debug!("StateManager: '{}' added", id.name());
        }
        Ok(())
    }

    /// Remove a state and hand it back to the caller.
    ///
    /// Deleting the active state follows [`ManagerConfig::active_deletion`].
    /// No hooks fire. Edges in other states that point at the removed id are
    /// left in place; performing them fails with
    /// [`FsmError::InconsistentTable`].
    pub fn delete_state(&mut self, id: S) -> Result<BoxedState<S, T, Ctx>, FsmError> {
        if id.is_null() {
            return rejected("delete_state", FsmError::NullStateId);
        }
        let Some(index) = self.position(id) else {
            return rejected(
                "delete_state",
                FsmError::StateNotFound {
                    state: id.name().to_string(),
                },
            );
        };

        if self.current == Some(id) {
            match self.config.active_deletion {
                ActiveDeletion::Forbid => {
                    return rejected(
                        "delete_state",
                        FsmError::ActiveStateDeletion {
                            state: id.name().to_string(),
                        },
                    );
                }
                ActiveDeletion::Deactivate => {
                    log::debug!("StateManager: active state '{}' deleted", id.name());
                    self.current = None;
                }
            }
        }

        Ok(self.members.remove(index).state)
    }

    /// Silently make a registered state active.
    ///
    /// Only allowed while no state is active, e.g. after the active state
    /// was deleted under [`ActiveDeletion::Deactivate`].
    pub fn activate(&mut self, id: S) -> Result<(), FsmError> {
        if id.is_null() {
            return rejected("activate", FsmError::NullStateId);
        }
        if let Some(current) = self.current {
            return rejected(
                "activate",
                FsmError::AlreadyActive {
                    state: current.name().to_string(),
                },
            );
        }
        if !self.contains(id) {
            return rejected(
                "activate",
                FsmError::StateNotFound {
                    state: id.name().to_string(),
                },
            );
        }

        self.current = Some(id);
        Ok(())
    }

    /// Move the active state along the edge labelled `transition`.
    ///
    /// The destination is checked to be a registered state before anything
    /// changes, so a failed call never fires hooks nor alters the active
    /// state. On success the old state's exit hook runs, then the active
    /// state switches, then the new state's enter hook runs.
    pub fn perform_transition(
        &mut self,
        transition: T,
        ctx: &mut Ctx,
    ) -> Result<Transitioned<S, T>, FsmError> {
        if transition.is_null() {
            return rejected("perform_transition", FsmError::NullTransition);
        }
        let Some(from_index) = self.current_index() else {
            return rejected("perform_transition", FsmError::NoActiveState);
        };

        let from = self.members[from_index].id;
        let to = self.members[from_index].state.output_state(transition);
        if to.is_null() {
            return rejected(
                "perform_transition",
                FsmError::NoTransition {
                    from: from.name().to_string(),
                    transition: transition.name().to_string(),
                },
            );
        }
        let Some(to_index) = self.position(to) else {
            return rejected(
                "perform_transition",
                FsmError::InconsistentTable {
                    from: from.name().to_string(),
                    transition: transition.name().to_string(),
                    to: to.name().to_string(),
                },
            );
        };

        self.members[from_index].state.on_exit(ctx);
        self.current = Some(to);
        self.members[to_index].state.on_enter(ctx);

        self.history.record(TransitionRecord {
            from,
            to,
            transition,
            timestamp: Utc::now(),
        });
        log::debug!(
            "StateManager: '{}' -> '{}' on '{}'",
            from.name(),
            to.name(),
            transition.name()
        );

        Ok(Transitioned {
            from,
            to,
            transition,
        })
    }

    /// Drive the active state for one external tick.
    ///
    /// The active state's update and transition condition each run exactly
    /// once, in the configured [`TickOrder`]. A fired transition is
    /// performed before returning; its failure is returned as the error.
    /// Under [`TickOrder::ConditionFirst`] a performed transition replaces
    /// the old state's update, but a failed one leaves the state active and
    /// its update still runs.
    pub fn update(&mut self, ctx: &mut Ctx) -> Result<TickOutcome<S, T>, FsmError> {
        let Some(index) = self.current_index() else {
            return rejected("update", FsmError::NoActiveState);
        };
        let id = self.members[index].id;

        match self.config.tick_order {
            TickOrder::ConditionFirst => {
                let Some(transition) = self.members[index].state.transition_condition(ctx) else {
                    self.members[index].state.update(ctx);
                    return Ok(TickOutcome::Stayed(id));
                };
                match self.perform_transition(transition, ctx) {
                    Ok(moved) => Ok(TickOutcome::Moved(moved)),
                    Err(err) => {
                        // A failed transition mutates nothing, so `index` is still active.
                        self.members[index].state.update(ctx);
                        Err(err)
                    }
                }
            }
            TickOrder::UpdateFirst => {
                self.members[index].state.update(ctx);
                match self.members[index].state.transition_condition(ctx) {
                    Some(transition) => self
                        .perform_transition(transition, ctx)
                        .map(TickOutcome::Moved),
                    None => Ok(TickOutcome::Stayed(id)),
                }
            }
        }
    }

    /// Id of the active state, or `S::NULL` when none is active.
    pub fn current_state_id(&self) -> S {
        self.current.unwrap_or(S::NULL)
    }

    pub fn current_state(&self) -> Option<&DynState<S, T, Ctx>> {
        self.current.and_then(|id| self.state(id))
    }

    pub fn current_state_mut(&mut self) -> Option<StateEditor<'_, S, T, Ctx>> {
        let id = self.current?;
        self.state_mut(id)
    }

    pub fn state(&self, id: S) -> Option<&DynState<S, T, Ctx>> {
        self.members
            .iter()
            .find(|m| m.id == id)
            .map(|m| &*m.state)
    }

    /// Edit a member's transition table.
    pub fn state_mut(&mut self, id: S) -> Option<StateEditor<'_, S, T, Ctx>> {
        self.members
            .iter_mut()
            .find(|m| m.id == id)
            .map(|m| StateEditor {
                id: m.id,
                state: &mut *m.state,
            })
    }

    pub fn contains(&self, id: S) -> bool {
        self.position(id).is_some()
    }

    /// Member ids in insertion order.
    pub fn state_ids(&self) -> impl Iterator<Item = S> + '_ {
        self.members.iter().map(|m| m.id)
    }

    /// Members paired with the id they were registered under.
    pub(crate) fn members(&self) -> impl Iterator<Item = (S, &DynState<S, T, Ctx>)> + '_ {
        self.members.iter().map(|m| (m.id, &*m.state))
    }

    pub(crate) fn set_active(&mut self, id: S) {
        self.current = Some(id);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn history(&self) -> &TransitionHistory<S, T> {
        &self.history
    }

    fn position(&self, id: S) -> Option<usize> {
        self.members.iter().position(|m| m.id == id)
    }

    fn current_index(&self) -> Option<usize> {
        self.current.and_then(|id| self.position(id))
    }
}

impl<S: StateId, T: TransitionId, Ctx> Default for StateManager<S, T, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

fn rejected<V>(operation: &str, error: FsmError) -> Result<V, FsmError> {
    log::warn!("StateManager {}(): {}", operation, error);
    Err(error)
}
