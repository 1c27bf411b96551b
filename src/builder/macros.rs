//! Macros for declaring states and actions.

/// Generate a State trait implementation for an enum.
///
/// Variants may be unit, tuple or struct variants. The generated enum derives
/// `Clone`, `PartialEq` and `Debug`, so payload types must implement them
/// too. Attributes written above the enum, such as extra derives, are kept.
///
/// # Example
///
/// ```
/// use sluice::core::State;
/// use sluice::state_enum;
///
/// state_enum! {
///     pub enum ScreenState {
///         Loading,
///         Loaded(u32),
///         Toast { message: String },
///     }
///     ephemeral: [Toast]
/// }
///
/// assert_eq!(ScreenState::Loaded(3).name(), "Loaded");
/// assert!(ScreenState::Toast { message: "saved".into() }.is_ephemeral());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple:ty),* $(,)? ) )?
                $( { $($field:ident : $field_ty:ty),* $(,)? } )?
            ),* $(,)?
        }

        $(ephemeral: [$($ephemeral:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple),* ) )?
                $( { $($field : $field_ty),* } )?
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),*
                }
            }

            fn is_ephemeral(&self) -> bool {
                match self {
                    $($(Self::$ephemeral { .. } => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}

/// Generate an Action trait implementation for an enum.
///
/// The generated enum derives `Clone`, `PartialEq` and `Debug`; `name()`
/// returns the variant identifier, which is the key handlers are registered
/// under.
///
/// # Example
///
/// ```
/// use sluice::core::Action;
/// use sluice::action_enum;
///
/// action_enum! {
///     pub enum CounterAction {
///         Increment,
///         Add(i64),
///     }
/// }
///
/// assert_eq!(CounterAction::Add(2).name(), "Add");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
                $( ( $($tuple:ty),* $(,)? ) )?
                $( { $($field:ident : $field_ty:ty),* $(,)? } )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
                $( ( $($tuple),* ) )?
                $( { $($field : $field_ty),* } )?
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Action, State};

    state_enum! {
        enum TestState {
            Idle,
            Counting(u32),
            Flash { message: String },
        }
        ephemeral: [Flash]
    }

    action_enum! {
        enum TestAction {
            Start,
            Add(u32, u32),
            Notify { message: String },
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        let state = TestState::Idle;
        assert_eq!(state.name(), "Idle");
        assert!(!state.is_ephemeral());

        let counting = TestState::Counting(2);
        assert_eq!(counting.name(), "Counting");
        assert!(!counting.is_ephemeral());

        let flash = TestState::Flash {
            message: "hi".to_string(),
        };
        assert_eq!(flash.name(), "Flash");
        assert!(flash.is_ephemeral());
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            ephemeral: [B]
        }

        assert!(PublicState::B.is_ephemeral());
        assert!(!PublicState::A.is_ephemeral());
    }

    #[test]
    fn state_enum_works_without_ephemeral_list() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_ephemeral());
        assert!(!MinimalState::Two.is_ephemeral());
    }

    #[test]
    fn state_enum_keeps_enum_attributes() {
        state_enum! {
            #[derive(Eq, Hash)]
            enum KeyedState {
                Left,
                Right,
            }
        }

        let mut seen = std::collections::HashSet::new();
        seen.insert(KeyedState::Left);
        seen.insert(KeyedState::Left);
        seen.insert(KeyedState::Right);
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn action_enum_names_variants_regardless_of_payload() {
        assert_eq!(TestAction::Start.name(), "Start");
        assert_eq!(TestAction::Add(1, 2).name(), "Add");
        assert_eq!(
            TestAction::Notify {
                message: "x".to_string()
            }
            .name(),
            "Notify"
        );
    }
}
