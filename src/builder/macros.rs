//! Macros for declaring state and transition identifiers.

/// Declare a state id enum and implement [`StateId`](crate::core::StateId)
/// for it.
///
/// The `null:` variant is added to the enum as the sentinel.
///
/// # Example
///
/// ```
/// use npc_fsm::core::StateId;
/// use npc_fsm::state_ids;
///
/// state_ids! {
///     pub enum GuardState {
///         Idle,
///         Patrol,
///         Chase,
///     }
///     null: NullStateId
/// }
///
/// assert_eq!(GuardState::Patrol.name(), "Patrol");
/// assert!(GuardState::NullStateId.is_null());
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
        null: $null:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $null,
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::StateId for $name {
            const NULL: Self = Self::$null;

            fn name(&self) -> &str {
                match self {
                    Self::$null => stringify!($null),
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a transition id enum and implement
/// [`TransitionId`](crate::core::TransitionId) for it.
///
/// # Example
///
/// ```
/// use npc_fsm::core::TransitionId;
/// use npc_fsm::transition_ids;
///
/// transition_ids! {
///     pub enum Sighting {
///         SawPlayer,
///         LostPlayer,
///     }
///     null: NullTransition
/// }
///
/// assert_eq!(Sighting::LostPlayer.name(), "LostPlayer");
/// assert!(Sighting::NullTransition.is_null());
/// ```
#[macro_export]
macro_rules! transition_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
        null: $null:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $null,
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::TransitionId for $name {
            const NULL: Self = Self::$null;

            fn name(&self) -> &str {
                match self {
                    Self::$null => stringify!($null),
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
