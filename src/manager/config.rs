//! Manager configuration.

use serde::{Deserialize, Serialize};

/// Order in which a tick drives the active state's hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TickOrder {
    /// Evaluate the transition condition first. If it fires, the state is
    /// left and its update is skipped for this tick.
    #[default]
    ConditionFirst,

    /// Run the update, then evaluate the transition condition.
    UpdateFirst,
}

/// Policy for deleting the currently active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActiveDeletion {
    /// Refuse with `FsmError::ActiveStateDeletion`.
    #[default]
    Forbid,

    /// Remove the state and leave the manager with no active state.
    Deactivate,
}

/// Settings for a [`StateManager`](crate::StateManager).
///
/// # Example
///
/// ```rust
/// use npc_fsm::manager::{ActiveDeletion, ManagerConfig, TickOrder};
///
/// let config = ManagerConfig::default()
///     .with_tick_order(TickOrder::UpdateFirst)
///     .with_active_deletion(ActiveDeletion::Deactivate)
///     .with_history_limit(None);
///
/// assert_eq!(config.tick_order, TickOrder::UpdateFirst);
/// assert_eq!(config.history_limit, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerConfig {
    pub tick_order: TickOrder,
    pub active_deletion: ActiveDeletion,
    /// Maximum number of transition records kept; `None` keeps all.
    pub history_limit: Option<usize>,
}

impl ManagerConfig {
    pub const DEFAULT_HISTORY_LIMIT: usize = 64;

    pub fn with_tick_order(mut self, order: TickOrder) -> Self {
        self.tick_order = order;
        self
    }

    pub fn with_active_deletion(mut self, policy: ActiveDeletion) -> Self {
        self.active_deletion = policy;
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            tick_order: TickOrder::default(),
            active_deletion: ActiveDeletion::default(),
            history_limit: Some(Self::DEFAULT_HISTORY_LIMIT),
        }
    }
}
