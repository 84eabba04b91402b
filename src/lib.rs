//! npc-fsm: a finite-state machine framework for NPC behavior
//!
//! An NPC's behavior is split into a fixed set of named states. Each state
//! declares which transition events move it to which other state, and a
//! [`StateManager`] holds the active state and mediates every transition.
//! What a state actually does (movement, animation, perception) lives in
//! the caller's [`State`] implementations.
//!
//! # Core Concepts
//!
//! - **Identifiers**: `StateId` / `TransitionId` value types with a reserved
//!   `NULL` sentinel, usually declared with [`state_ids!`] and
//!   [`transition_ids!`]
//! - **State**: the capability contract (update, condition, enter, exit) plus
//!   a per-state transition table
//! - **StateManager**: owns the states and is the only way to change the
//!   active one; every operation returns an explicit `Result`
//!
//! The caller drives the machine, typically once per frame, by calling
//! [`StateManager::update`]. Nothing here is thread-safe; give each NPC its
//! own manager.
//!
//! # Example
//!
//! ```rust
//! use npc_fsm::core::{State, TransitionTable};
//! use npc_fsm::{state_ids, transition_ids, StateManager, TickOutcome};
//!
//! state_ids! {
//!     enum Mode { Idle, Patrol }
//!     null: NullStateId
//! }
//!
//! transition_ids! {
//!     enum Event { SawPlayer, LostPlayer }
//!     null: NullTransition
//! }
//!
//! struct World {
//!     player_visible: bool,
//! }
//!
//! struct Watch {
//!     table: TransitionTable<Mode, Event>,
//! }
//!
//! impl State<World> for Watch {
//!     type Id = Mode;
//!     type Transition = Event;
//!
//!     fn table(&self) -> &TransitionTable<Mode, Event> {
//!         &self.table
//!     }
//!
//!     fn table_mut(&mut self) -> &mut TransitionTable<Mode, Event> {
//!         &mut self.table
//!     }
//!
//!     fn transition_condition(&mut self, world: &World) -> Option<Event> {
//!         match (self.id(), world.player_visible) {
//!             (Mode::Idle, true) => Some(Event::SawPlayer),
//!             (Mode::Patrol, false) => Some(Event::LostPlayer),
//!             _ => None,
//!         }
//!     }
//!
//!     fn update(&mut self, _world: &mut World) {}
//! }
//!
//! let mut idle = Watch { table: TransitionTable::new(Mode::Idle) };
//! idle.add_transition(Event::SawPlayer, Mode::Patrol).unwrap();
//! let mut patrol = Watch { table: TransitionTable::new(Mode::Patrol) };
//! patrol.add_transition(Event::LostPlayer, Mode::Idle).unwrap();
//!
//! let mut manager: StateManager<Mode, Event, World> = StateManager::new();
//! manager.add_state(idle).unwrap();
//! manager.add_state(patrol).unwrap();
//!
//! let mut world = World { player_visible: true };
//! let outcome = manager.update(&mut world).unwrap();
//!
//! assert!(matches!(outcome, TickOutcome::Moved(_)));
//! assert_eq!(manager.current_state_id(), Mode::Patrol);
//! ```

pub mod builder;
pub mod core;
pub mod manager;

// Re-export commonly used types
pub use builder::{BuildError, StateManagerBuilder};
pub use crate::core::{FsmError, State, StateId, TransitionId, TransitionTable};
pub use manager::{ManagerConfig, StateEditor, StateManager, TickOutcome, Transitioned};
