//! Builder for constructing state managers.

use crate::builder::error::BuildError;
use crate::core::{State, StateId, TransitionId};
use crate::manager::{BoxedState, ManagerConfig, StateManager};

/// Builder for constructing state managers with a fluent API.
///
/// States are registered in the order they were added. Without
/// [`initial`](Self::initial) the first state becomes active.
///
/// # Example
///
/// ```rust
/// use npc_fsm::builder::StateManagerBuilder;
/// use npc_fsm::core::{State, TransitionTable};
/// use npc_fsm::{state_ids, transition_ids};
///
/// state_ids! {
///     enum Mode { Idle, Patrol }
///     null: NullStateId
/// }
///
/// transition_ids! {
///     enum Event { StartPatrol }
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
/// let manager = StateManagerBuilder::<Mode, Event, ()>::new()
///     .state(Passive(TransitionTable::new(Mode::Idle)))
///     .state(Passive(TransitionTable::new(Mode::Patrol)))
///     .initial(Mode::Patrol)
///     .build()
///     .unwrap();
///
/// assert_eq!(manager.current_state_id(), Mode::Patrol);
/// ```
pub struct StateManagerBuilder<S: StateId, T: TransitionId, Ctx> {
    config: ManagerConfig,
    states: Vec<BoxedState<S, T, Ctx>>,
    initial: Option<S>,
}

impl<S: StateId, T: TransitionId, Ctx> StateManagerBuilder<S, T, Ctx> {
    pub fn new() -> Self {
        Self {
            config: ManagerConfig::default(),
            states: Vec::new(),
            initial: None,
        }
    }

    pub fn config(mut self, config: ManagerConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a state.
    pub fn state<St>(mut self, state: St) -> Self
    where
        St: State<Ctx, Id = S, Transition = T> + 'static,
    {
        self.states.push(Box::new(state));
        self
    }

    /// Add multiple boxed states at once.
    pub fn states(mut self, states: Vec<BoxedState<S, T, Ctx>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Start in `id` instead of the first added state.
    pub fn initial(mut self, id: S) -> Self {
        self.initial = Some(id);
        self
    }

    /// Build the manager.
    ///
    /// Fails on the first rejected registration, when no states were added,
    /// or when the initial state was never added.
    pub fn build(self) -> Result<StateManager<S, T, Ctx>, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut manager = StateManager::with_config(self.config);
        for state in self.states {
            manager.add_boxed_state(state)?;
        }

        if let Some(initial) = self.initial {
            if !manager.contains(initial) {
                return Err(BuildError::UnknownInitial {
                    state: initial.name().to_string(),
                });
            }
            manager.set_active(initial);
        }

        Ok(manager)
    }
}

impl<S: StateId, T: TransitionId, Ctx> Default for StateManagerBuilder<S, T, Ctx> {
    fn default() -> Self {
        Self::new()
    }
}
