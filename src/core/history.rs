//! Transition history tracking.
//!
//! The manager records one entry per successful transition so tooling
//! (debug overlays, tests, replays in an editor) can see how an NPC moved
//! through its states.

use super::id::{StateId, TransitionId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single performed transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: StateId, T: TransitionId> {
    /// The state that was exited
    pub from: S,
    /// The state that was entered
    pub to: S,
    /// The event that fired
    pub transition: T,
    /// When the transition was performed
    pub timestamp: DateTime<Utc>,
}

/// Ordered, optionally bounded history of transitions.
///
/// When a limit is set, the oldest records are dropped first.
///
/// # Example
///
/// ```rust
/// use npc_fsm::core::{TransitionHistory, TransitionRecord};
/// use npc_fsm::{state_ids, transition_ids};
/// use chrono::Utc;
///
/// state_ids! {
///     enum Mode { Idle, Patrol, Chase }
///     null: NullStateId
/// }
///
/// transition_ids! {
///     enum Event { StartPatrol, SawPlayer }
///     null: NullTransition
/// }
///
/// let mut history = TransitionHistory::new(None);
/// history.record(TransitionRecord {
///     from: Mode::Idle,
///     to: Mode::Patrol,
///     transition: Event::StartPatrol,
///     timestamp: Utc::now(),
/// });
/// history.record(TransitionRecord {
///     from: Mode::Patrol,
///     to: Mode::Chase,
///     transition: Event::SawPlayer,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![Mode::Idle, Mode::Patrol, Mode::Chase]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionHistory<S: StateId, T: TransitionId> {
    records: VecDeque<TransitionRecord<S, T>>,
    limit: Option<usize>,
}

impl<S: StateId, T: TransitionId> Default for TransitionHistory<S, T> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<S: StateId, T: TransitionId> TransitionHistory<S, T> {
    /// Create an empty history keeping at most `limit` records.
    ///
    /// A limit of `Some(0)` disables recording.
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            records: VecDeque::new(),
            limit,
        }
    }

    /// Append a record, evicting the oldest ones beyond the limit.
    pub fn record(&mut self, record: TransitionRecord<S, T>) {
        if self.limit == Some(0) {
            return;
        }

        self.records.push_back(record);
        if let Some(limit) = self.limit {
            while self.records.len() > limit {
                self.records.pop_front();
            }
        }
    }

    pub fn records(&self) -> impl Iterator<Item = &TransitionRecord<S, T>> {
        self.records.iter()
    }

    pub fn last(&self) -> Option<&TransitionRecord<S, T>> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// States traversed: the first recorded origin, then each destination.
    pub fn path(&self) -> Vec<S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` when empty, or when the clock went backwards.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.records.front()?;
        let last = self.records.back()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
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
            Chase,
        }
        null: NullStateId
    }

    transition_ids! {
        enum TestEvent {
            StartPatrol,
            SawPlayer,
            LostPlayer,
        }
        null: NullTransition
    }

    fn record(
        from: TestState,
        to: TestState,
        transition: TestEvent,
    ) -> TransitionRecord<TestState, TestEvent> {
        TransitionRecord {
            from,
            to,
            transition,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_history_has_no_path() {
        let history: TransitionHistory<TestState, TestEvent> = TransitionHistory::default();

        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn path_follows_recorded_transitions() {
        let mut history = TransitionHistory::new(None);
        history.record(record(TestState::Idle, TestState::Patrol, TestEvent::StartPatrol));
        history.record(record(TestState::Patrol, TestState::Chase, TestEvent::SawPlayer));
        history.record(record(TestState::Chase, TestState::Patrol, TestEvent::LostPlayer));

        assert_eq!(
            history.path(),
            vec![
                TestState::Idle,
                TestState::Patrol,
                TestState::Chase,
                TestState::Patrol
            ]
        );
        assert_eq!(history.last().map(|r| r.transition), Some(TestEvent::LostPlayer));
    }

    #[test]
    fn limit_evicts_oldest_records() {
        let mut history = TransitionHistory::new(Some(2));
        history.record(record(TestState::Idle, TestState::Patrol, TestEvent::StartPatrol));
        history.record(record(TestState::Patrol, TestState::Chase, TestEvent::SawPlayer));
        history.record(record(TestState::Chase, TestState::Patrol, TestEvent::LostPlayer));

        assert_eq!(history.len(), 2);
        assert_eq!(
            history.path(),
            vec![TestState::Patrol, TestState::Chase, TestState::Patrol]
        );
    }

    #[test]
    fn zero_limit_disables_recording() {
        let mut history = TransitionHistory::new(Some(0));
        history.record(record(TestState::Idle, TestState::Patrol, TestEvent::StartPatrol));

        assert!(history.is_empty());
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let mut history = TransitionHistory::new(None);
        history.record(TransitionRecord {
            from: TestState::Idle,
            to: TestState::Patrol,
            transition: TestEvent::StartPatrol,
            timestamp: start,
        });
        history.record(TransitionRecord {
            from: TestState::Patrol,
            to: TestState::Chase,
            transition: TestEvent::SawPlayer,
            timestamp: start + chrono::Duration::seconds(3),
        });

        assert_eq!(history.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = TransitionHistory::new(Some(8));
        history.record(record(TestState::Idle, TestState::Patrol, TestEvent::StartPatrol));

        let json = serde_json::to_string(&history).unwrap();
        let back: TransitionHistory<TestState, TestEvent> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.path(), history.path());
    }
}
