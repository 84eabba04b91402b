//! Structural validation of a manager's transition tables.
//!
//! Deleting a state leaves edges in other tables that still point at it.
//! `validate` reports every such inconsistency at once instead of stopping
//! at the first, using stillwater's `Validation`.

use crate::core::{StateId, TransitionId};
use crate::manager::machine::StateManager;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A broken structural invariant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableViolation {
    #[error("Transition '{transition}' from '{from}' points at unregistered state '{to}'")]
    DanglingEdge {
        from: String,
        transition: String,
        to: String,
    },
}

impl<S: StateId, T: TransitionId, Ctx> StateManager<S, T, Ctx> {
    /// Check every table edge, accumulating ALL violations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use npc_fsm::core::{State, TransitionTable};
    /// use npc_fsm::{state_ids, transition_ids, StateManager};
    ///
    /// state_ids! {
    ///     enum Mode { Idle, Chase }
    ///     null: NullStateId
    /// }
    ///
    /// transition_ids! {
    ///     enum Event { SawPlayer }
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
    /// idle.add_transition(Event::SawPlayer, Mode::Chase).unwrap();
    ///
    /// let mut manager: StateManager<Mode, Event, ()> = StateManager::new();
    /// manager.add_state(idle).unwrap();
    /// assert!(manager.validate().is_failure());
    ///
    /// manager.add_state(Passive(TransitionTable::new(Mode::Chase))).unwrap();
    /// assert!(manager.validate().is_success());
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<TableViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<TableViolation>>> = Vec::new();

        for (from, state) in self.members() {
            for (transition, to) in state.table().iter() {
                let check = if self.contains(to) {
                    Validation::success(())
                } else {
                    Validation::fail(TableViolation::DanglingEdge {
                        from: from.name().to_string(),
                        transition: transition.name().to_string(),
                        to: to.name().to_string(),
                    })
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{State, TransitionTable};
    use crate::{state_ids, transition_ids};

    state_ids! {
        enum TestState {
            Idle,
            Patrol,
            Chase,
        }
        null: NullStateId
    }

    transition_ids! {
        enum TestEvent {
            SawPlayer,
            LostPlayer,
            HeardNoise,
        }
        null: NullTransition
    }

    struct Passive {
        table: TransitionTable<TestState, TestEvent>,
    }

    impl State<()> for Passive {
        type Id = TestState;
        type Transition = TestEvent;

        fn table(&self) -> &TransitionTable<TestState, TestEvent> {
            &self.table
        }

        fn table_mut(&mut self) -> &mut TransitionTable<TestState, TestEvent> {
            &mut self.table
        }

        fn transition_condition(&mut self, _ctx: &()) -> Option<TestEvent> {
            None
        }

        fn update(&mut self, _ctx: &mut ()) {}
    }

    fn passive(id: TestState, edges: &[(TestEvent, TestState)]) -> Passive {
        let mut table = TransitionTable::new(id);
        for (transition, to) in edges {
            table.add(*transition, *to).unwrap();
        }
        Passive { table }
    }

    #[test]
    fn consistent_manager_validates() {
        let mut manager: StateManager<TestState, TestEvent, ()> = StateManager::new();
        manager
            .add_state(passive(
                TestState::Idle,
                &[(TestEvent::SawPlayer, TestState::Patrol)],
            ))
            .unwrap();
        manager
            .add_state(passive(
                TestState::Patrol,
                &[(TestEvent::LostPlayer, TestState::Idle)],
            ))
            .unwrap();

        assert!(manager.validate().is_success());
    }

    #[test]
    fn empty_manager_validates() {
        let manager: StateManager<TestState, TestEvent, ()> = StateManager::new();

        assert!(manager.validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_dangling_edges() {
        let mut manager: StateManager<TestState, TestEvent, ()> = StateManager::new();
        manager
            .add_state(passive(
                TestState::Idle,
                &[
                    (TestEvent::SawPlayer, TestState::Chase),
                    (TestEvent::HeardNoise, TestState::Patrol),
                ],
            ))
            .unwrap();
        manager
            .add_state(passive(
                TestState::Patrol,
                &[(TestEvent::SawPlayer, TestState::Chase)],
            ))
            .unwrap();

        match manager.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .all(|e| matches!(e, TableViolation::DanglingEdge { to, .. } if to == "Chase")));
            }
            Validation::Success(_) => panic!("Expected violations, got success"),
        }
    }

    #[test]
    fn deleting_a_target_breaks_validation() {
        let mut manager: StateManager<TestState, TestEvent, ()> = StateManager::new();
        manager
            .add_state(passive(
                TestState::Idle,
                &[(TestEvent::SawPlayer, TestState::Chase)],
            ))
            .unwrap();
        manager.add_state(passive(TestState::Chase, &[])).unwrap();
        assert!(manager.validate().is_success());

        manager.delete_state(TestState::Chase).unwrap();

        let result = manager.validate();
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors.iter().any(|e| *e
                == TableViolation::DanglingEdge {
                    from: "Idle".to_string(),
                    transition: "SawPlayer".to_string(),
                    to: "Chase".to_string(),
                }));
        }
    }
}
