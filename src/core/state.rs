//! The capability contract every FSM state implements.
//!
//! A state owns its outgoing [`TransitionTable`] and provides the behavior
//! hooks a [`StateManager`](crate::StateManager) drives. Engine handles such
//! as the player or the NPC itself are passed as the `Ctx` parameter instead
//! of being stored on the state.

use super::error::FsmError;
use super::id::{StateId, TransitionId};
use super::table::TransitionTable;

/// Trait for FSM states driven by a manager.
///
/// Only [`table`](State::table), [`table_mut`](State::table_mut),
/// [`transition_condition`](State::transition_condition) and
/// [`update`](State::update) are required. The lifecycle hooks default to
/// no-ops. Once a state is registered, its hooks belong to the manager:
/// outside code must not call them, and
/// [`StateManager::state_mut`](crate::StateManager::state_mut) hands out a
/// [`StateEditor`](crate::StateEditor) that does not expose them.
///
/// # Example
///
/// ```rust
/// use npc_fsm::core::{State, TransitionTable};
/// use npc_fsm::{state_ids, transition_ids};
///
/// state_ids! {
///     enum Mode { Idle, Patrol }
///     null: NullStateId
/// }
///
/// transition_ids! {
///     enum Event { SawPlayer }
///     null: NullTransition
/// }
///
/// struct World {
///     player_visible: bool,
///     idle_ticks: u32,
/// }
///
/// struct Idle {
///     table: TransitionTable<Mode, Event>,
/// }
///
/// impl State<World> for Idle {
///     type Id = Mode;
///     type Transition = Event;
///
///     fn table(&self) -> &TransitionTable<Mode, Event> {
///         &self.table
///     }
///
///     fn table_mut(&mut self) -> &mut TransitionTable<Mode, Event> {
///         &mut self.table
///     }
///
///     fn transition_condition(&mut self, world: &World) -> Option<Event> {
///         world.player_visible.then_some(Event::SawPlayer)
///     }
///
///     fn update(&mut self, world: &mut World) {
///         world.idle_ticks += 1;
///     }
/// }
///
/// let mut idle = Idle { table: TransitionTable::new(Mode::Idle) };
/// idle.add_transition(Event::SawPlayer, Mode::Patrol).unwrap();
///
/// assert_eq!(idle.id(), Mode::Idle);
/// assert_eq!(idle.output_state(Event::SawPlayer), Mode::Patrol);
/// ```
pub trait State<Ctx> {
    type Id: StateId;
    type Transition: TransitionId;

    fn table(&self) -> &TransitionTable<Self::Id, Self::Transition>;

    /// Replacing the table after registration does not change the id the
    /// manager keys this state by.
    fn table_mut(&mut self) -> &mut TransitionTable<Self::Id, Self::Transition>;

    /// Evaluate world state and report which transition, if any, fires.
    ///
    /// The manager performs the returned transition. States cannot borrow
    /// their owning manager, so they report instead of calling it.
    fn transition_condition(&mut self, ctx: &Ctx) -> Option<Self::Transition>;

    /// Per-tick behavior while this state is active.
    fn update(&mut self, ctx: &mut Ctx);

    /// Called once each time the manager transitions into this state.
    ///
    /// Invoked only by the owning manager; never call it directly.
    fn on_enter(&mut self, _ctx: &mut Ctx) {}

    /// Called once each time the manager transitions out of this state.
    ///
    /// Invoked only by the owning manager; never call it directly.
    fn on_exit(&mut self, _ctx: &mut Ctx) {}

    /// Identity of this state, read once when it is registered.
    fn id(&self) -> Self::Id {
        self.table().owner()
    }

    fn add_transition(
        &mut self,
        transition: Self::Transition,
        destination: Self::Id,
    ) -> Result<(), FsmError> {
        self.table_mut().add(transition, destination)
    }

    fn delete_transition(&mut self, transition: Self::Transition) -> Result<Self::Id, FsmError> {
        self.table_mut().remove(transition)
    }

    /// Destination for `transition`, or the `NULL` state id when absent.
    fn output_state(&self, transition: Self::Transition) -> Self::Id {
        self.table().output(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state_ids, transition_ids};

    state_ids! {
        enum TestState {
            Idle,
            Patrol,
        }
        null: NullStateId
    }

    transition_ids! {
        enum TestEvent {
            SawPlayer,
            LostPlayer,
        }
        null: NullTransition
    }

    #[derive(Default)]
    struct Hooks {
        entered: u32,
        exited: u32,
        ticks: u32,
    }

    struct Minimal {
        table: TransitionTable<TestState, TestEvent>,
    }

    impl State<Hooks> for Minimal {
        type Id = TestState;
        type Transition = TestEvent;

        fn table(&self) -> &TransitionTable<TestState, TestEvent> {
            &self.table
        }

        fn table_mut(&mut self) -> &mut TransitionTable<TestState, TestEvent> {
            &mut self.table
        }

        fn transition_condition(&mut self, _ctx: &Hooks) -> Option<TestEvent> {
            None
        }

        fn update(&mut self, ctx: &mut Hooks) {
            ctx.ticks += 1;
        }
    }

    #[test]
    fn id_comes_from_table_owner() {
        let state = Minimal {
            table: TransitionTable::new(TestState::Patrol),
        };
        assert_eq!(state.id(), TestState::Patrol);
    }

    #[test]
    fn default_hooks_do_nothing() {
        let mut state = Minimal {
            table: TransitionTable::new(TestState::Idle),
        };
        let mut hooks = Hooks::default();

        state.on_enter(&mut hooks);
        state.on_exit(&mut hooks);

        assert_eq!(hooks.entered, 0);
        assert_eq!(hooks.exited, 0);
        assert_eq!(hooks.ticks, 0);
    }

    #[test]
    fn transition_helpers_delegate_to_table() {
        let mut state = Minimal {
            table: TransitionTable::new(TestState::Idle),
        };

        state
            .add_transition(TestEvent::SawPlayer, TestState::Patrol)
            .unwrap();
        assert_eq!(state.output_state(TestEvent::SawPlayer), TestState::Patrol);
        assert_eq!(
            state.output_state(TestEvent::LostPlayer),
            TestState::NullStateId
        );

        assert_eq!(
            state.delete_transition(TestEvent::SawPlayer),
            Ok(TestState::Patrol)
        );
        assert!(matches!(
            state.delete_transition(TestEvent::SawPlayer),
            Err(FsmError::TransitionNotFound { .. })
        ));
    }
}
