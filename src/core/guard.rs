//! Guarded triggers for transition conditions.
//!
//! A trigger pairs a pure predicate over the driver's context with the
//! transition it fires. States can implement
//! [`State::transition_condition`](super::State::transition_condition) by
//! evaluating an ordered list of triggers.

use super::id::TransitionId;

/// Pure predicate over a context.
///
/// # Example
///
/// ```rust
/// use npc_fsm::core::Guard;
///
/// struct Senses {
///     distance_to_player: f32,
/// }
///
/// let close = Guard::new(|s: &Senses| s.distance_to_player < 5.0);
///
/// assert!(close.check(&Senses { distance_to_player: 2.0 }));
/// assert!(!close.check(&Senses { distance_to_player: 9.0 }));
/// ```
pub struct Guard<Ctx> {
    predicate: Box<dyn Fn(&Ctx) -> bool>,
}

impl<Ctx> Guard<Ctx> {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Ctx) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    pub fn check(&self, ctx: &Ctx) -> bool {
        (self.predicate)(ctx)
    }
}

/// A guard and the transition it fires when it passes.
pub struct Trigger<Ctx, T: TransitionId> {
    pub guard: Guard<Ctx>,
    pub transition: T,
}

impl<Ctx, T: TransitionId> Trigger<Ctx, T> {
    pub fn new<F>(transition: T, predicate: F) -> Self
    where
        F: Fn(&Ctx) -> bool + 'static,
    {
        Self {
            guard: Guard::new(predicate),
            transition,
        }
    }

    /// The transition, if the guard passes.
    pub fn fire(&self, ctx: &Ctx) -> Option<T> {
        self.guard.check(ctx).then_some(self.transition)
    }
}

/// Ordered triggers; earlier entries take priority.
///
/// # Example
///
/// ```rust
/// use npc_fsm::core::Triggers;
/// use npc_fsm::transition_ids;
///
/// transition_ids! {
///     enum Event { SawPlayer, HeardNoise }
///     null: NullTransition
/// }
///
/// struct Senses {
///     sees_player: bool,
///     hears_noise: bool,
/// }
///
/// let triggers = Triggers::new()
///     .on(Event::SawPlayer, |s: &Senses| s.sees_player)
///     .on(Event::HeardNoise, |s: &Senses| s.hears_noise);
///
/// let both = Senses { sees_player: true, hears_noise: true };
/// assert_eq!(triggers.first_fired(&both), Some(Event::SawPlayer));
///
/// let calm = Senses { sees_player: false, hears_noise: false };
/// assert_eq!(triggers.first_fired(&calm), None);
/// ```
pub struct Triggers<Ctx, T: TransitionId> {
    triggers: Vec<Trigger<Ctx, T>>,
}

impl<Ctx, T: TransitionId> Triggers<Ctx, T> {
    pub fn new() -> Self {
        Self {
            triggers: Vec::new(),
        }
    }

    /// Append a trigger firing `transition` when `predicate` holds.
    pub fn on<F>(mut self, transition: T, predicate: F) -> Self
    where
        F: Fn(&Ctx) -> bool + 'static,
    {
        self.triggers.push(Trigger::new(transition, predicate));
        self
    }

    pub fn push(&mut self, trigger: Trigger<Ctx, T>) {
        self.triggers.push(trigger);
    }

    /// First transition whose guard passes, in insertion order.
    pub fn first_fired(&self, ctx: &Ctx) -> Option<T> {
        self.triggers.iter().find_map(|t| t.fire(ctx))
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }
}

impl<Ctx, T: TransitionId> Default for Triggers<Ctx, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition_ids;

    transition_ids! {
        enum TestEvent {
            SawPlayer,
            LostPlayer,
            LowHealth,
        }
        null: NullTransition
    }

    struct Senses {
        player_visible: bool,
        health: u32,
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new(|s: &Senses| s.health < 20);
        let senses = Senses {
            player_visible: false,
            health: 10,
        };

        assert_eq!(guard.check(&senses), guard.check(&senses));
        assert!(guard.check(&senses));
    }

    #[test]
    fn trigger_fires_only_when_guard_passes() {
        let trigger = Trigger::new(TestEvent::SawPlayer, |s: &Senses| s.player_visible);

        let seen = Senses {
            player_visible: true,
            health: 100,
        };
        let unseen = Senses {
            player_visible: false,
            health: 100,
        };

        assert_eq!(trigger.fire(&seen), Some(TestEvent::SawPlayer));
        assert_eq!(trigger.fire(&unseen), None);
    }

    #[test]
    fn earlier_triggers_take_priority() {
        let triggers = Triggers::new()
            .on(TestEvent::LowHealth, |s: &Senses| s.health < 20)
            .on(TestEvent::SawPlayer, |s: &Senses| s.player_visible)
            .on(TestEvent::LostPlayer, |s: &Senses| !s.player_visible);

        let hurt_and_seen = Senses {
            player_visible: true,
            health: 5,
        };
        assert_eq!(
            triggers.first_fired(&hurt_and_seen),
            Some(TestEvent::LowHealth)
        );

        let healthy_unseen = Senses {
            player_visible: false,
            health: 80,
        };
        assert_eq!(
            triggers.first_fired(&healthy_unseen),
            Some(TestEvent::LostPlayer)
        );
        assert_eq!(triggers.len(), 3);
    }

    #[test]
    fn empty_triggers_never_fire() {
        let triggers: Triggers<Senses, TestEvent> = Triggers::default();
        let senses = Senses {
            player_visible: true,
            health: 1,
        };

        assert!(triggers.is_empty());
        assert_eq!(triggers.first_fired(&senses), None);
    }
}
