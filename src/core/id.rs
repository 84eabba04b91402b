//! Identifier traits for states and transition events.
//!
//! Both identifier kinds reserve one sentinel value (`NULL`) that never
//! labels a real state or transition. Lookups that find nothing return it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a state within one [`StateManager`](crate::StateManager).
///
/// # Example
///
/// ```rust
/// use npc_fsm::core::StateId;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum GuardState {
///     NullStateId,
///     Idle,
///     Alert,
/// }
///
/// impl StateId for GuardState {
///     const NULL: Self = Self::NullStateId;
///
///     fn name(&self) -> &str {
///         match self {
///             Self::NullStateId => "NullStateId",
///             Self::Idle => "Idle",
///             Self::Alert => "Alert",
///         }
///     }
/// }
///
/// assert!(GuardState::NullStateId.is_null());
/// assert!(!GuardState::Idle.is_null());
/// ```
pub trait StateId:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Reserved "no state" value.
    const NULL: Self;

    /// Name used in errors and log lines.
    fn name(&self) -> &str;

    /// Check whether this is the reserved sentinel.
    fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

/// Identifier of a transition event.
///
/// Same shape as [`StateId`]; `NULL` is never a key in a transition table.
pub trait TransitionId:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Reserved "not a real transition" value.
    const NULL: Self;

    /// Name used in errors and log lines.
    fn name(&self) -> &str;

    /// Check whether this is the reserved sentinel.
    fn is_null(&self) -> bool {
        *self == Self::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Null,
        Idle,
        Patrol,
    }

    impl StateId for TestState {
        const NULL: Self = Self::Null;

        fn name(&self) -> &str {
            match self {
                Self::Null => "Null",
                Self::Idle => "Idle",
                Self::Patrol => "Patrol",
            }
        }
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    struct Event(u32);

    impl TransitionId for Event {
        const NULL: Self = Event(0);

        fn name(&self) -> &str {
            if self.is_null() {
                "NullTransition"
            } else {
                "Event"
            }
        }
    }

    #[test]
    fn sentinel_is_detected() {
        assert!(TestState::Null.is_null());
        assert!(!TestState::Idle.is_null());
        assert!(!TestState::Patrol.is_null());
    }

    #[test]
    fn integer_backed_ids_work() {
        assert!(Event(0).is_null());
        assert!(!Event(7).is_null());
        assert_eq!(Event::NULL.name(), "NullTransition");
        assert_eq!(Event(3).name(), "Event");
    }

    #[test]
    fn ids_serialize_correctly() {
        let json = serde_json::to_string(&TestState::Patrol).unwrap();
        let back: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TestState::Patrol);
    }
}
