//! NPC Patrol
//!
//! This example drives a guard NPC through Idle, Patrol and Chase states
//! from a simulated frame loop.
//!
//! Key concepts:
//! - Identifiers declared with `state_ids!` / `transition_ids!`
//! - Transition conditions expressed as ordered triggers
//! - Engine data passed to hooks as an explicit context
//! - Enter/exit hooks starting and stopping per-state effects
//!
//! Run with: RUST_LOG=debug cargo run --example npc_patrol

use npc_fsm::core::{State, TransitionTable, Triggers};
use npc_fsm::{state_ids, transition_ids, StateManagerBuilder, TickOutcome};

state_ids! {
    enum GuardState {
        Idle,
        Patrol,
        Chase,
    }
    null: NullStateId
}

transition_ids! {
    enum GuardEvent {
        Rested,
        SawPlayer,
        LostPlayer,
    }
    null: NullTransition
}

// What the engine exposes to the guard each frame
struct World {
    frame: u32,
    guard_x: f32,
    player_x: f32,
    animation: &'static str,
}

impl World {
    fn player_distance(&self) -> f32 {
        (self.player_x - self.guard_x).abs()
    }
}

const SIGHT_RANGE: f32 = 6.0;

struct Idle {
    table: TransitionTable<GuardState, GuardEvent>,
    triggers: Triggers<World, GuardEvent>,
    rested: u32,
}

struct Patrol {
    table: TransitionTable<GuardState, GuardEvent>,
    triggers: Triggers<World, GuardEvent>,
    heading: f32,
}

struct Chase {
    table: TransitionTable<GuardState, GuardEvent>,
    triggers: Triggers<World, GuardEvent>,
}

impl State<World> for Idle {
    type Id = GuardState;
    type Transition = GuardEvent;

    fn table(&self) -> &TransitionTable<GuardState, GuardEvent> {
        &self.table
    }

    fn table_mut(&mut self) -> &mut TransitionTable<GuardState, GuardEvent> {
        &mut self.table
    }

    fn transition_condition(&mut self, world: &World) -> Option<GuardEvent> {
        if self.rested >= 3 {
            return Some(GuardEvent::Rested);
        }
        self.triggers.first_fired(world)
    }

    fn update(&mut self, _world: &mut World) {
        self.rested += 1;
    }

    fn on_enter(&mut self, world: &mut World) {
        self.rested = 0;
        world.animation = "idle";
    }
}

impl State<World> for Patrol {
    type Id = GuardState;
    type Transition = GuardEvent;

    fn table(&self) -> &TransitionTable<GuardState, GuardEvent> {
        &self.table
    }

    fn table_mut(&mut self) -> &mut TransitionTable<GuardState, GuardEvent> {
        &mut self.table
    }

    fn transition_condition(&mut self, world: &World) -> Option<GuardEvent> {
        self.triggers.first_fired(world)
    }

    fn update(&mut self, world: &mut World) {
        if world.guard_x.abs() >= 5.0 {
            self.heading = -world.guard_x.signum();
        }
        world.guard_x += self.heading;
    }

    fn on_enter(&mut self, world: &mut World) {
        world.animation = "walk";
    }
}

impl State<World> for Chase {
    type Id = GuardState;
    type Transition = GuardEvent;

    fn table(&self) -> &TransitionTable<GuardState, GuardEvent> {
        &self.table
    }

    fn table_mut(&mut self) -> &mut TransitionTable<GuardState, GuardEvent> {
        &mut self.table
    }

    fn transition_condition(&mut self, world: &World) -> Option<GuardEvent> {
        self.triggers.first_fired(world)
    }

    fn update(&mut self, world: &mut World) {
        world.guard_x += (world.player_x - world.guard_x).signum() * 1.5;
    }

    fn on_enter(&mut self, world: &mut World) {
        world.animation = "run";
    }

    fn on_exit(&mut self, world: &mut World) {
        println!("  (frame {}) guard gives up the chase", world.frame);
    }
}

fn main() {
    env_logger::init();

    println!("=== NPC Patrol Example ===\n");

    let sees_player = |w: &World| w.player_distance() <= SIGHT_RANGE;

    let mut idle = Idle {
        table: TransitionTable::new(GuardState::Idle),
        triggers: Triggers::new().on(GuardEvent::SawPlayer, sees_player),
        rested: 0,
    };
    let mut patrol = Patrol {
        table: TransitionTable::new(GuardState::Patrol),
        triggers: Triggers::new().on(GuardEvent::SawPlayer, sees_player),
        heading: 1.0,
    };
    let mut chase = Chase {
        table: TransitionTable::new(GuardState::Chase),
        triggers: Triggers::new().on(GuardEvent::LostPlayer, move |w: &World| !sees_player(w)),
    };

    idle.add_transition(GuardEvent::Rested, GuardState::Patrol).unwrap();
    idle.add_transition(GuardEvent::SawPlayer, GuardState::Chase).unwrap();
    patrol.add_transition(GuardEvent::SawPlayer, GuardState::Chase).unwrap();
    chase.add_transition(GuardEvent::LostPlayer, GuardState::Idle).unwrap();

    let mut manager = StateManagerBuilder::<GuardState, GuardEvent, World>::new()
        .state(idle)
        .state(patrol)
        .state(chase)
        .build()
        .unwrap();

    assert!(
        manager.validate().is_success(),
        "every edge should point at a registered state"
    );

    let mut world = World {
        frame: 0,
        guard_x: 0.0,
        player_x: 30.0,
        animation: "idle",
    };

    println!("Initial state: {:?}\n", manager.current_state_id());

    for frame in 0..24 {
        world.frame = frame;
        // The player walks toward the guard, then runs off.
        world.player_x += if frame < 12 { -2.0 } else { 4.0 };

        match manager.update(&mut world) {
            Ok(TickOutcome::Moved(moved)) => println!(
                "frame {:>2}: {:?} -> {:?} on {:?} (animation: {})",
                frame, moved.from, moved.to, moved.transition, world.animation
            ),
            Ok(TickOutcome::Stayed(_)) => {}
            Err(err) => println!("frame {:>2}: {}", frame, err),
        }
    }

    println!("\nPath taken: {:?}", manager.history().path());
    println!("\n=== Example Complete ===");
}
